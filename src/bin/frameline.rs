use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use frameline::{
    Composition, CompositionConfig, FrameIndex, FrameRange, JsonLinesSink, RenderThreading,
    evaluate_range,
};

const LOG_ENV: &str = "FRAMELINE_LOG";

#[derive(Parser, Debug)]
#[command(name = "frameline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the composition descriptor as JSON.
    Info(ConfigArgs),
    /// Print the scene table with start/end times.
    Timeline(ConfigArgs),
    /// Evaluate one frame and print it as pretty JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range and write it as JSON lines.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Composition config JSON (defaults to the built-in composition).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); the composition end when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Evaluation chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Enable static-frame elision within chunks.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

#[derive(serde::Serialize)]
struct TimelineRow {
    scene: frameline::SceneId,
    start: u64,
    end: u64,
    start_secs: f64,
    end_secs: f64,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load(args: &ConfigArgs) -> anyhow::Result<Composition> {
    let config = match &args.config {
        Some(path) => CompositionConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => CompositionConfig::default(),
    };
    Ok(Composition::new(config)?)
}

fn cmd_info(args: ConfigArgs) -> anyhow::Result<()> {
    let comp = load(&args)?;
    let json = serde_json::to_string_pretty(&comp.descriptor())?;
    println!("{json}");
    Ok(())
}

fn cmd_timeline(args: ConfigArgs) -> anyhow::Result<()> {
    let comp = load(&args)?;
    let fps = comp.fps();
    let rows: Vec<TimelineRow> = comp
        .timeline()
        .specs()
        .iter()
        .map(|s| TimelineRow {
            scene: s.id,
            start: s.start,
            end: s.end(),
            start_secs: fps.frames_to_secs(s.start),
            end_secs: fps.frames_to_secs(s.end()),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load(&args.config)?;
    let state = comp.eval_frame(FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&state)?;

    match &args.out {
        Some(out) => {
            create_parent_dir(out)?;
            std::fs::write(out, format!("{json}\n"))
                .with_context(|| format!("write frame '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let comp = load(&args.config)?;
    let end = args.end.unwrap_or_else(|| comp.duration_in_frames());
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };

    create_parent_dir(&args.out)?;
    let file = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut sink = JsonLinesSink::new(BufWriter::new(file));
    let stats = evaluate_range(&comp, range, &threading, &mut sink)?;
    sink.into_inner()
        .flush()
        .with_context(|| format!("flush output '{}'", args.out.display()))?;

    tracing::info!(
        frames = stats.frames_total,
        evaluated = stats.frames_evaluated,
        elided = stats.frames_elided,
        "render finished"
    );
    eprintln!(
        "wrote {} ({} frames, {} elided)",
        args.out.display(),
        stats.frames_total,
        stats.frames_elided
    );
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
