//! `benedict-bot` executable.
//!
//! Parses the command line, installs the log and trace subscribers, loads the
//! bot's settings and hands over to [`benedict_bot::start`] until Slack's
//! socket listener stops.

use std::path::PathBuf;

use benedict_bot::base::{config::Config, types::Void};
use clap::Parser;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Slack bot that answers to its name, badly.
///
/// Settings come from a TOML file and `BENEDICT_BOT_*` environment variables;
/// the environment wins.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// TOML settings file; `.hidden/config.toml` is used when present and this is omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log more (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    init_tracing(args.verbose)?;

    let config = Config::load(args.config.as_deref())?;

    benedict_bot::start(config).await
}

fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a compact stdout layer and an OTLP span exporter behind one level filter.
fn init_tracing(verbose: u8) -> Void {
    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::CLOSE);

    let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
    let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_simple_exporter(exporter)
        .build()
        .tracer(env!("CARGO_PKG_NAME"));

    tracing_subscriber::registry()
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .with(LevelFilter::from_level(level_for(verbose)))
        .with(stdout)
        .init();

    Ok(())
}
