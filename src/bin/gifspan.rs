use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use gifspan::{DurationReport, FetchConfig, Fetcher, GifDuration, GifTimeline, GifspanResult};

#[derive(Parser, Debug)]
#[command(name = "gifspan", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print the JSON report.
    #[arg(long, global = true)]
    pretty: bool,

    /// Also print per-frame timing to stderr.
    #[arg(long, global = true)]
    frames: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a GIF over http(s) and measure it.
    Url(UrlArgs),
    /// Measure a local GIF file.
    File(FileArgs),
}

#[derive(Parser, Debug)]
struct UrlArgs {
    /// Absolute http or https URL.
    url: String,

    /// User-Agent header sent with the request.
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Parser, Debug)]
struct FileArgs {
    /// Path to a GIF file.
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.cmd {
        Command::Url(args) => cmd_url(args, cli.frames),
        Command::File(args) => cmd_file(args, cli.frames),
    };

    let report = DurationReport::from(result);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("serialize report")?;
    println!("{json}");

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_url(args: &UrlArgs, frames: bool) -> GifspanResult<GifDuration> {
    let defaults = FetchConfig::default();
    let fetcher = Fetcher::new(FetchConfig {
        user_agent: args.user_agent.clone().unwrap_or(defaults.user_agent),
        timeout_secs: args.timeout_secs.or(defaults.timeout_secs),
    });

    let bytes = fetcher.fetch(&args.url)?;
    if frames {
        dump_frames(&bytes);
    }
    gifspan::analyze_bytes(&bytes)
}

fn cmd_file(args: &FileArgs, frames: bool) -> GifspanResult<GifDuration> {
    let bytes = gifspan::read_gif_file(&args.path)?;
    if frames {
        dump_frames(&bytes);
    }
    gifspan::analyze_bytes(&bytes)
}

fn dump_frames(bytes: &[u8]) {
    let Ok(GifTimeline { version, frames }) = gifspan::scan_frames(bytes) else {
        return;
    };
    eprintln!("{} frames ({}):", frames.len(), version.as_str());
    for f in &frames {
        let declared = match f.declared_delay_cs {
            Some(d) => format!("{d}cs"),
            None => "-".to_string(),
        };
        eprintln!(
            "  #{:<4} @{:<8} declared {:>7}  counted {:>5}ms",
            f.index,
            f.offset,
            declared,
            f.duration().as_millis()
        );
    }
}
