//! Papillon CLI Application
//!
//! Command-line interface over the Papillon core: canteen QR codes, school
//! accounts, subject classification and grades.

mod args;
mod cli;
mod renderer;

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use papillon_core::{PapillonBuilder, Providers, SnapshotProvider};
use renderer::TerminalRenderer;
use Commands::*;

/// Every vendor client answers from the same snapshot file.
fn snapshot_providers(path: &Path) -> Result<Providers> {
    let provider = SnapshotProvider::from_file(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
    Ok(Providers::new().with_all(Arc::new(provider)))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let providers = match command.as_ref().and_then(Commands::snapshot_file) {
        Some(path) => snapshot_providers(path)?,
        None => Providers::new(),
    };

    let app = PapillonBuilder::new()
        .with_database_path(database_file)
        .with_providers(providers)
        .build()
        .await
        .context("Failed to initialize Papillon")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(app, renderer);

    info!("Papillon started");

    match command {
        Some(Qr { command }) => cli.handle_qr_command(command).await,
        Some(Account { command }) => cli.handle_account_command(command).await,
        Some(Subject(args)) => cli.handle_subject(args).await,
        Some(Grades { command }) => cli.handle_grades_command(command).await,
        None => cli.list_qrcodes().await,
    }
}
