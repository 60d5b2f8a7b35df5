//! Design Bridge - command-line import/export
//!
//! Imports a design payload into an in-memory host page, then exports that
//! page and prints the transferable JSON. Useful for checking what a payload
//! turns into before it reaches a real design tool.
//!
//! ```text
//! design-bridge <payload.json> [--ai] [--pretty] [--settings <dir>]
//! ```

use anyhow::{bail, Context};
use clap::Parser as ClapParser;
use design_io::{
    parse_json, DesignParser, ExportDesign, ImportDesign, InMemoryRepository, SettingsManager,
    TracingNotifier,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(ClapParser, Debug)]
#[command(
    name = "design-bridge",
    version,
    about = "Import a design payload into an in-memory host and print the re-exported tree"
)]
struct CliArgs {
    /// JSON payload: a node, an array of nodes, or an envelope around either
    #[arg(value_name = "FILE")]
    payload: PathBuf,
    /// Treat the payload as AI-generated output
    #[arg(long)]
    ai: bool,
    /// Indent the printed JSON
    #[arg(long)]
    pretty: bool,
    /// Directory holding design-bridge.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    settings: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();
    tracing::info!("Starting design bridge");

    let mut settings_manager = SettingsManager::new(&args.settings);
    let settings = settings_manager
        .load()
        .await
        .context("failed to load settings")?
        .clone();
    tracing::debug!(path = ?settings_manager.settings_path(), "Settings loaded");

    let text = tokio::fs::read_to_string(&args.payload)
        .await
        .with_context(|| format!("failed to read {}", args.payload.display()))?;
    let raw = parse_json(&text)
        .with_context(|| format!("{} is not valid JSON", args.payload.display()))?;

    let host = InMemoryRepository::new();
    let notifier = TracingNotifier;

    let import = ImportDesign::new(&host, &notifier).with_parser(DesignParser::with_config(settings.parser));
    let imported = if args.ai {
        import.execute_ai_response(&raw).await
    } else {
        import.execute(&raw).await
    };
    if !imported.success {
        bail!(
            "import failed: {}",
            imported.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    let exported = ExportDesign::new(&host, &notifier)
        .with_options(settings.export)
        .execute()
        .await;
    if !exported.success {
        bail!(
            "export failed: {}",
            exported.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    let json = if args.pretty {
        exported.to_json_pretty()?
    } else {
        exported.to_json()?
    };
    println!("{}", json);

    Ok(())
}
