// Copyright 2025 eraflo
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

// Inspection tool for asset browser projects.
// Run with: harbor-inspect [--project <dir>] <command>

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Inspect the assets of a Harbor project", long_about = None)]
struct Cli {
    /// Project directory (the folder holding Harbor.toml).
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the folder/file tree.
    Tree,
    /// Load one asset and print its typed fields.
    Show {
        /// UID or file name of the asset.
        asset: String,
    },
    /// Load every asset and report the ones that fail.
    Check,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Tree => commands::tree::run(&cli.project),
        Commands::Show { asset } => commands::show::run(&cli.project, &asset),
        Commands::Check => commands::check::run(&cli.project),
    }
}
