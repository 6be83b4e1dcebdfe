//! # Marquee Host
//!
//! Replays a page event script against the conference carousels and reports
//! where every carousel ended up.
//!
//! ```text
//! marquee-host run demos/organizers.toml --duration 30s --auto-advance 2s
//! marquee-host check-config
//! ```

use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use marquee_config::{ConfigLoad, ConfigLoader, ConfigWarnings};
use marquee_core::CarouselSettings;
use marquee_host::{EventScript, Host, HostReport};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "marquee-host")]
#[command(about = "Headless host for the Marquee conference carousels")]
struct Cli {
    /// Read variables from this file instead of `./.env`.
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an event script and print the final carousel state.
    Run(RunArgs),
    /// Print the effective carousel settings and any warnings.
    CheckConfig,
}

#[derive(ClapArgs, Debug, Clone)]
struct RunArgs {
    /// TOML or JSON event script.
    script: PathBuf,

    /// How long to keep the page open.
    #[arg(long, value_parser = humantime::parse_duration, default_value = "30s")]
    duration: Duration,

    /// Override the configured auto-advance interval.
    #[arg(long, value_parser = humantime::parse_duration)]
    auto_advance: Option<Duration>,

    /// Override the configured number of visible cards.
    #[arg(long)]
    items_per_view: Option<usize>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,marquee_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;
    log_warnings(&warnings);

    let settings = config
        .carousel_settings()
        .context("invalid carousel settings")?;

    match cli.command {
        Command::CheckConfig => {
            println!("source:          {:?}", config.metadata.source);
            println!("env file loaded: {}", config.metadata.env_file_loaded);
            println!("items per view:  {}", settings.items_per_view());
            println!(
                "auto-advance:    {}",
                humantime::format_duration(settings.auto_advance())
            );
            println!("swipe threshold: {}", settings.swipe_threshold());
            for override_key in &config.metadata.overrides {
                println!("override:        {override_key}");
            }
            for warning in &warnings.items {
                println!("warning:         {}", warning.message);
            }
            Ok(())
        }
        Command::Run(args) => run(args, settings).await,
    }
}

async fn run(args: RunArgs, mut settings: CarouselSettings) -> anyhow::Result<()> {
    if let Some(interval) = args.auto_advance {
        settings = settings
            .with_auto_advance(interval)
            .context("invalid --auto-advance")?;
    }
    if let Some(items) = args.items_per_view {
        settings = settings
            .with_items_per_view(items)
            .context("invalid --items-per-view")?;
    }

    let script = EventScript::load(&args.script)?;
    info!(
        script = %args.script.display(),
        carousels = script.carousels.len(),
        events = script.events.len(),
        duration = %humantime::format_duration(args.duration),
        "replaying event script"
    );

    let host = Host::new(settings, &script)?;
    let report = host.run(script.events, args.duration).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
}

fn print_report(report: &HostReport) {
    println!(
        "replayed {}ms, page {:?}{}",
        report.elapsed_ms,
        report.visibility,
        if report.page_unloaded { " (unloaded)" } else { "" }
    );
    for carousel in &report.carousels {
        println!(
            "{:<16} position {}/{} ({} per view) {:?} {} | ticks {} applied, {} hidden, {} stale | swipes {} taps {}",
            carousel.key.as_str(),
            carousel.position,
            carousel.total_items.saturating_sub(carousel.items_per_view),
            carousel.items_per_view,
            carousel.phase,
            carousel.transform,
            carousel.ticks.applied,
            carousel.ticks.skipped_hidden,
            carousel.ticks.dropped_stale,
            carousel.swipes,
            carousel.taps,
        );
    }
    for key in &report.unloaded {
        println!("{:<16} unloaded", key.as_str());
    }
}
