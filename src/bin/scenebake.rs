use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scenebake", version)]
struct Cli {
    /// Raise log verbosity (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bake a payload into a timeline JSON file.
    Bake(BakeArgs),
    /// Bake a payload and print the timeline fingerprint.
    Fingerprint(FingerprintArgs),
}

#[derive(Parser, Debug)]
struct BakeArgs {
    /// Input payload JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional bake config JSON; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Measure text with this font (TTF/OTF) instead of the built-in estimator.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output timeline JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Bake in batches, logging progress between them.
    #[arg(long)]
    chunked: bool,
}

#[derive(Parser, Debug)]
struct FingerprintArgs {
    /// Input payload JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional bake config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Measure text with this font (TTF/OTF) instead of the built-in estimator.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Bake(args) => cmd_bake(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn read_payload_json(path: &Path) -> anyhow::Result<scenebake::Payload> {
    let f = File::open(path).with_context(|| format!("open payload '{}'", path.display()))?;
    let r = BufReader::new(f);
    let payload: scenebake::Payload =
        serde_json::from_reader(r).with_context(|| "parse payload JSON")?;
    Ok(payload)
}

fn read_config(path: Option<&Path>) -> anyhow::Result<scenebake::BakeConfig> {
    let Some(path) = path else {
        return Ok(scenebake::BakeConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    scenebake::BakeConfig::from_json_str(&s)
        .with_context(|| format!("parse config '{}'", path.display()))
}

fn make_measure(font: Option<&Path>) -> anyhow::Result<Box<dyn scenebake::TextMeasure>> {
    let Some(path) = font else {
        return Ok(Box::new(scenebake::GlyphWidthEstimator));
    };
    let bytes =
        std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    let m = scenebake::ParleyMeasurer::new(&bytes)
        .with_context(|| format!("load font '{}'", path.display()))?;
    tracing::info!(family = m.family_name(), "measuring with font");
    Ok(Box::new(m))
}

fn run_bake(
    payload: &scenebake::Payload,
    config: &scenebake::BakeConfig,
    measure: &mut dyn scenebake::TextMeasure,
    chunked: bool,
) -> anyhow::Result<scenebake::Timeline> {
    let timeline = if chunked {
        scenebake::bake_chunked(payload, config, measure, |p| {
            tracing::info!(progress = p, "bake batch");
        })?
    } else {
        let mut report = |p: f64| tracing::debug!(progress = p, "bake progress");
        scenebake::bake_with(payload, config, measure, Some(&mut report))?
    };
    Ok(timeline)
}

fn cmd_bake(args: BakeArgs) -> anyhow::Result<()> {
    let payload = read_payload_json(&args.in_path)?;
    let config = read_config(args.config.as_deref())?;
    let mut measure = make_measure(args.font.as_deref())?;

    let timeline = run_bake(&payload, &config, measure.as_mut(), args.chunked)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = timeline.to_json_pretty()?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write timeline '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {})",
        args.out.display(),
        timeline.frame_count,
        scenebake::fingerprint_timeline(&timeline)
    );
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    let payload = read_payload_json(&args.in_path)?;
    let config = read_config(args.config.as_deref())?;
    let mut measure = make_measure(args.font.as_deref())?;

    let timeline = run_bake(&payload, &config, measure.as_mut(), false)?;
    println!("{}", scenebake::fingerprint_timeline(&timeline));
    Ok(())
}
