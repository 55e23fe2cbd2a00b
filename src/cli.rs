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

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "sift", version, about = "Command-line client for a document search service")]
pub struct Cli {
    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single search
    Search(SearchArgs),

    /// Start an interactive search session
    Shell(ShellArgs),

    /// Check whether the search service is up
    Health(ServiceArgs),

    /// Show the search service's API description
    Info(ServiceArgs),

    /// Write a default config file
    Init(InitArgs),

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query text
    pub query: String,

    /// Number of results (one of the configured choices)
    #[arg(long)]
    pub k: Option<String>,

    /// Search service origin, e.g. http://localhost:5000
    #[arg(long)]
    pub origin: Option<String>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Initial number of results
    #[arg(long)]
    pub k: Option<String>,

    /// Search service origin
    #[arg(long)]
    pub origin: Option<String>,
}

#[derive(Args, Debug)]
pub struct ServiceArgs {
    /// Search service origin
    #[arg(long)]
    pub origin: Option<String>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Origin to store in the new config
    #[arg(long)]
    pub origin: Option<String>,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}
