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

//! Line-oriented interactive session.
//!
//! Every line that is not a `:` command is a query submission. Commands:
//! `:k <N>`, `:clear`, `:samples`, `:help`, `:quit`.

use std::io::Write;

use anyhow::Result;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;

use crate::client::SearchClient;
use crate::gateway::SearchBackend;

pub const SAMPLE_QUERIES: [&str; 4] = [
    "information retrieval",
    "database systems",
    "machine learning",
    "search engine optimization",
];

const HELP: &str = "\
Type a query and press enter to search.
  :k <N>     set the number of results
  :clear     clear the current results or error
  :samples   list sample queries
  :help      show this help
  :quit      leave the shell";

enum Command<'a> {
    Quit,
    Help,
    Clear,
    Samples,
    TopK(&'a str),
    Unknown(&'a str),
    Query(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Query(line);
    };
    let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    match name {
        "q" | "quit" | "exit" => Command::Quit,
        "h" | "help" => Command::Help,
        "clear" => Command::Clear,
        "samples" => Command::Samples,
        "k" => Command::TopK(arg.trim()),
        _ => Command::Unknown(name),
    }
}

pub async fn run_shell<B, R, W>(
    client: &mut SearchClient<B>,
    mut top_k: String,
    input: R,
    out: &mut W,
) -> Result<()>
where
    B: SearchBackend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "sift shell ({top_k} results per query). Type :help for commands.")?;
    write_prompt(out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                writeln!(out, "Result counts: {}", choice_list(client.validator().choices()))?;
            }
            Command::Clear => client.clear(),
            Command::Samples => {
                for sample in SAMPLE_QUERIES {
                    writeln!(out, "  {sample}")?;
                }
            }
            Command::TopK(raw) => match client.validator().parse_top_k(raw) {
                Ok(k) => {
                    top_k = k.to_string();
                    writeln!(out, "Showing {top_k} results per query")?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Unknown(name) => writeln!(out, "error: unknown command :{name}")?,
            Command::Query(raw) => {
                client.edit_input();
                client.submit(raw, &top_k).await;
                write!(out, "{}", client.view())?;
            }
        }
        write_prompt(out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn choice_list(choices: &[u32]) -> String {
    choices
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
