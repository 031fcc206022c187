use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "chilistation", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the frame at a given time as a PNG.
    Frame(FrameArgs),
    /// Render every frame of a script as a numbered PNG sequence.
    Render(RenderArgs),
    /// Print one JSON frame state per line.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Interaction script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Page config JSON (defaults to the built-in ChiliStation page).
    #[arg(long)]
    page: Option<PathBuf>,

    /// Reveal, fade, and smoothing tunables JSON; missing fields keep their defaults.
    #[arg(long)]
    opts: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Directory holding canvas frames named `<index>.png`.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the SHA-256 of the rendered pixels.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output directory for `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Directory holding canvas frames named `<index>.png`.
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    source: SourceArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Trace(args) => cmd_trace(args),
    }
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

fn open_session(source: &SourceArgs) -> anyhow::Result<chilistation::Session> {
    let script = chilistation::Script::load(&source.script)
        .with_context(|| format!("load script '{}'", source.script.display()))?;
    let page = match &source.page {
        Some(path) => chilistation::PageConfig::load(path)
            .with_context(|| format!("load page '{}'", path.display()))?,
        None => chilistation::PageConfig::default(),
    };
    let opts = match &source.opts {
        Some(path) => chilistation::AppOpts::load(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => chilistation::AppOpts::default(),
    };
    Ok(chilistation::Session::new(page, &script, opts)?)
}

fn make_renderer(
    assets: Option<&Path>,
    frames: &[chilistation::FrameState],
) -> anyhow::Result<chilistation::CpuRenderer> {
    let store = match assets {
        Some(root) => {
            let indices = frames
                .iter()
                .flat_map(|f| f.canvases.iter().map(|c| c.frame_index));
            chilistation::ImageSequenceStore::prepare(root, indices)?
        }
        None => chilistation::ImageSequenceStore::empty(),
    };
    Ok(chilistation::CpuRenderer::new(
        store,
        chilistation::CpuRendererOpts::default(),
    ))
}

fn write_png(path: &Path, frame: &chilistation::FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create output dir '{}'", dir.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.source)?;
    let state = session.seek(args.time)?;
    let renderer = make_renderer(args.assets.as_deref(), std::slice::from_ref(&state))?;
    let frame = renderer.render(&state)?;

    if let Some(parent) = args.out.parent() {
        ensure_dir(parent)?;
    }
    write_png(&args.out, &frame)?;

    if args.digest {
        println!("{}", sha256_hex(&frame.data));
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.source)?;
    let states = session.run()?;
    let renderer = make_renderer(args.assets.as_deref(), &states)?;
    ensure_dir(&args.out_dir)?;

    // Simulation is sequential; rasterizing the finished snapshots is not.
    states
        .par_iter()
        .enumerate()
        .try_for_each(|(i, state)| -> anyhow::Result<()> {
            let frame = renderer.render(state)?;
            write_png(&args.out_dir.join(format!("frame_{i:05}.png")), &frame)
        })?;

    eprintln!("wrote {} frames to {}", states.len(), args.out_dir.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.source)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    while let Some(state) = session.step()? {
        serde_json::to_writer(&mut out, &state).context("serialize frame state")?;
        out.write_all(b"\n").context("write trace")?;
    }
    out.flush().context("flush trace")?;
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
