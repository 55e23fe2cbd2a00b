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

mod cli;
mod client;
mod config;
mod error;
mod gateway;
mod input;
mod model;
mod output;
mod render;
mod shell;
mod state;

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::cli::InitArgs;
use crate::cli::SearchArgs;
use crate::cli::ServiceArgs;
use crate::cli::ShellArgs;
use crate::client::SearchClient;
use crate::config::Config;
use crate::gateway::HttpGateway;
use crate::input::InputValidator;
use crate::output::JsonResponse;
use crate::output::print_json;
use crate::render::View;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Search(args) => {
            let json = args.json;
            handle_result(cmd_search(args).await, json)
        }
        Commands::Shell(args) => cmd_shell(args).await,
        Commands::Health(args) => {
            let json = args.json;
            handle_result(cmd_health(args).await, json)
        }
        Commands::Info(args) => {
            let json = args.json;
            handle_result(cmd_info(args).await, json)
        }
        Commands::Init(args) => cmd_init(args),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sift", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_result(result: Result<()>, json: bool) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            if json {
                let resp = JsonResponse::error("error", &err.to_string());
                print_json(&resp)?;
                Ok(())
            } else {
                Err(err)
            }
        }
    }
}

fn session(config: &Config) -> Result<SearchClient<HttpGateway>> {
    let gateway = HttpGateway::new(config)?;
    let validator = InputValidator::new(config.top_k_choices.clone());
    Ok(SearchClient::new(gateway, validator))
}

async fn cmd_search(args: SearchArgs) -> Result<()> {
    let config = config::load_with_origin(args.origin)?;
    let raw_top_k = args.k.unwrap_or_else(|| config.top_k.to_string());
    let mut client = session(&config)?;
    client.submit(&args.query, &raw_top_k).await;
    let view = client.view();

    if args.json {
        let top_k = client.validator().parse_top_k(&raw_top_k).ok();
        let resp = JsonResponse::from_view(&view).with_query(args.query.trim(), top_k);
        print_json(&resp)?;
        return Ok(());
    }
    match view {
        View::Error(err) => anyhow::bail!(err.message),
        view => print!("{view}"),
    }
    Ok(())
}

async fn cmd_shell(args: ShellArgs) -> Result<()> {
    let config = config::load_with_origin(args.origin)?;
    let mut client = session(&config)?;
    let top_k = match args.k {
        Some(raw) => client.validator().parse_top_k(&raw)?.to_string(),
        None => config.top_k.to_string(),
    };
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    shell::run_shell(&mut client, top_k, stdin, &mut stdout).await
}

async fn cmd_health(args: ServiceArgs) -> Result<()> {
    let config = config::load_with_origin(args.origin)?;
    let gateway = HttpGateway::new(&config)?;
    let health = gateway.health().await?;

    if args.json {
        let resp = if health.is_healthy() {
            JsonResponse::ok()
        } else {
            JsonResponse::error("unhealthy", &health.message)
        };
        print_json(&resp.with_health(health))?;
        return Ok(());
    }
    println!("Status: {}", health.status);
    println!("Message: {}", health.message);
    println!("Documents: {}", health.documents_loaded);
    if !health.is_healthy() {
        anyhow::bail!("search service at {} is unhealthy", gateway.origin());
    }
    Ok(())
}

async fn cmd_info(args: ServiceArgs) -> Result<()> {
    let config = config::load_with_origin(args.origin)?;
    let gateway = HttpGateway::new(&config)?;
    let info = gateway.info().await?;

    if args.json {
        print_json(&JsonResponse::ok().with_info(info))?;
        return Ok(());
    }
    println!("{} {}", info.name, info.version);
    for (path, description) in &info.endpoints {
        println!("  {path}\t{description}");
    }
    Ok(())
}

fn cmd_init(args: InitArgs) -> Result<()> {
    let path = config::global_config_path()
        .ok_or_else(|| anyhow::anyhow!("cannot locate a config directory"))?;
    if path.exists() && !args.force {
        anyhow::bail!("sift.toml already exists at {}", path.display());
    }

    let mut config = Config::default();
    if let Some(origin) = args.origin {
        config.origin = origin;
    }
    config.endpoints()?;
    config::write_config(&path, &config)?;

    println!("Wrote config to {}", path.display());
    Ok(())
}
