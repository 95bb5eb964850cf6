//! `radar` - build a technology radar from a Google Sheet
//!
//! ```text
//! radar resolve <REFERENCE>
//! radar build <REFERENCE> [--sheet-name NAME] [--config FILE] [--viewport-height PX]
//! ```
//!
//! `build` prints the radar as JSON on stdout. Failures go to stderr and the
//! process exits with status 1. Logs go to stderr, filtered by `RUST_LOG`.

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use radar_core::{ErrorDisplay, RadarConfig, RadarPipeline, RadarRenderer};
use radar_ingest::{GoogleSheetsClient, SheetLocator, SheetReference};
use radar_model::Radar;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Renderer that writes the radar as pretty JSON to stdout
struct JsonRenderer;

#[derive(Serialize)]
struct RenderedRadar<'a> {
    size: u32,
    radar: &'a Radar,
}

fn render_json(size: u32, radar: &Radar) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RenderedRadar { size, radar })
}

impl RadarRenderer for JsonRenderer {
    fn render(&self, size: u32, radar: &Radar) {
        match render_json(size, radar) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "cannot serialize radar"),
        }
    }
}

/// Error display that writes to stderr
struct StderrDisplay;

impl ErrorDisplay for StderrDisplay {
    fn show_error(&self, message: &str) {
        eprintln!("{message}");
    }
}

fn cli() -> Command {
    Command::new("radar")
        .version(radar_core::VERSION)
        .about("Build a technology radar from a Google Sheet")
        .subcommand_required(true)
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("resolve")
                .about("Print the sheet ID a reference resolves to")
                .arg(
                    Arg::new("reference")
                        .required(true)
                        .help("Spreadsheet URL or bare sheet ID"),
                ),
        )
        .subcommand(
            Command::new("build")
                .about("Fetch, validate and assemble a radar")
                .arg(
                    Arg::new("reference")
                        .required(true)
                        .help("Spreadsheet URL or bare sheet ID"),
                )
                .arg(
                    Arg::new("sheet-name")
                        .long("sheet-name")
                        .help("Tab to read; defaults to the first tab"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML configuration file"),
                )
                .arg(
                    Arg::new("viewport-height")
                        .long("viewport-height")
                        .value_parser(value_parser!(u32))
                        .help("Page height used to size the radar"),
                ),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn reference(args: &ArgMatches) -> anyhow::Result<SheetReference> {
    args.get_one::<String>("reference")
        .map(|reference| SheetReference::from(reference.as_str()))
        .context("missing sheet reference")
}

fn load_config(args: &ArgMatches) -> anyhow::Result<RadarConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => RadarConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RadarConfig::default().with_env_overrides(),
    };

    if let Some(height) = args.get_one::<u32>("viewport-height") {
        config.pipeline.viewport_height = *height;
    }
    Ok(config)
}

async fn build(args: &ArgMatches) -> anyhow::Result<bool> {
    let reference = reference(args)?;
    let config = load_config(args)?;

    let client = Arc::new(
        GoogleSheetsClient::new(config.sheets.clone()).context("creating Google Sheets client")?,
    );
    let pipeline = RadarPipeline::new(
        config.pipeline,
        client.clone(),
        client,
        Arc::new(JsonRenderer),
        Arc::new(StderrDisplay),
    );

    let sheet_name = args.get_one::<String>("sheet-name").map(String::as_str);
    Ok(pipeline.build(&reference, sheet_name).await.is_ok())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("json-logs"));

    match matches.subcommand() {
        Some(("resolve", args)) => {
            println!("{}", SheetLocator::resolve(&reference(args)?));
        }
        Some(("build", args)) => {
            if !build(args).await? {
                std::process::exit(1);
            }
        }
        _ => {}
    }
    Ok(())
}
