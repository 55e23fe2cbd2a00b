// Copyright 2026 Sift Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

const DEFAULT_ORIGIN: &str = "http://localhost:5000";
const DEFAULT_TOP_K_CHOICES: [u32; 4] = [3, 5, 10, 20];
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub origin: String,
    pub top_k: u32,
    pub top_k_choices: Vec<u32>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            top_k: DEFAULT_TOP_K_CHOICES[0],
            top_k_choices: DEFAULT_TOP_K_CHOICES.to_vec(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::from_origin(&self.origin)
    }

    fn sanitize(&mut self) {
        self.top_k_choices.retain(|k| *k > 0);
        if self.top_k_choices.is_empty() {
            self.top_k_choices = DEFAULT_TOP_K_CHOICES.to_vec();
        }
        if !self.top_k_choices.contains(&self.top_k) {
            self.top_k = self.top_k_choices[0];
        }
        if self.timeout_secs == 0 {
            self.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
    }
}

/// Service URLs, all on the same origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub origin: String,
    pub search: Url,
    pub health: Url,
    pub info: Url,
}

impl Endpoints {
    /// Any path, query or fragment on `origin` is discarded.
    pub fn from_origin(origin: &str) -> Result<Self> {
        let url = Url::parse(origin.trim()).with_context(|| format!("parse origin {origin:?}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("origin must use http or https, got {:?}", url.scheme());
        }
        if url.host_str().is_none() {
            anyhow::bail!("origin {origin:?} has no host");
        }
        let origin = url.origin().ascii_serialization();
        Ok(Self {
            search: url.join("/search").context("build search endpoint")?,
            health: url.join("/health").context("build health endpoint")?,
            info: url.join("/api/info").context("build info endpoint")?,
            origin,
        })
    }
}

fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return Some(PathBuf::from(appdata));
        }
        if let Ok(profile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(profile).join("AppData").join("Roaming"));
        }
        return None;
    }

    if cfg!(target_os = "macos") {
        let home = std::env::var("HOME").ok()?;
        return Some(
            PathBuf::from(home)
                .join("Library")
                .join("Application Support"),
        );
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config"))
}

pub fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("sift").join("sift.toml"))
}

pub fn load_global_config() -> Result<Config> {
    let Some(path) = global_config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    read_config(&path)
}

/// Loads the global config and applies a command-line origin override.
pub fn load_with_origin(origin: Option<String>) -> Result<Config> {
    let mut config = load_global_config()?;
    if let Some(origin) = origin {
        config.origin = origin;
    }
    Ok(config)
}

pub fn read_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut config: Config = toml::from_str(&text).context("parse sift.toml")?;
    config.sanitize();
    Ok(config)
}

pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
    }
    let text = toml::to_string_pretty(config).context("serialize config")?;
    std::fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
