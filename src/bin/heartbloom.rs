use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt as _, BufReader};
use tracing_subscriber::EnvFilter;

use heartbloom::{
    BloomConfig, Canvas, LandingCanopy, Session, SlotKind, ViewAction, landing_svg,
    rasterize_svg, render_screen, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "heartbloom", version)]
struct Cli {
    /// TOML config file (environment variables still override it).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing heart tree as a PNG (or SVG).
    Tree(TreeArgs),
    /// Walk through the screens interactively, reading commands from stdin.
    Tour,
    /// Run enter -> message -> done and print the final session state as JSON.
    Snapshot,
}

#[derive(Parser, Debug)]
struct TreeArgs {
    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Seed for a reproducible tree.
    #[arg(long)]
    seed: Option<u64>,

    /// Output width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output height in pixels; defaults to the tree's 4:5 aspect at `--width`.
    #[arg(long)]
    height: Option<u32>,

    /// Write the SVG document instead of rasterizing.
    #[arg(long)]
    svg: bool,
}

enum TourEvent {
    Line(std::io::Result<Option<String>>),
    Settled,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = BloomConfig::load(cli.config.as_deref())?;
    match cli.cmd {
        Command::Tree(args) => cmd_tree(cfg, args),
        Command::Tour => cmd_tour(cfg).await,
        Command::Snapshot => cmd_snapshot(cfg).await,
    }
}

fn cmd_tree(mut cfg: BloomConfig, args: TreeArgs) -> anyhow::Result<()> {
    if args.seed.is_some() {
        cfg.canopy.seed = args.seed;
    }
    let canopy = LandingCanopy::new(cfg.canopy)?;
    let svg = landing_svg(canopy.leaves(), Canvas::LANDING);

    if args.svg {
        ensure_parent_dir(&args.out)?;
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    } else {
        let height = args
            .height
            .unwrap_or_else(|| (f64::from(args.width) * Canvas::LANDING.aspect()).round() as u32);
        let frame = rasterize_svg(&svg, args.width, height)?;
        write_png(&frame, &args.out)?;
    }

    eprintln!(
        "wrote {} ({} leaves)",
        args.out.display(),
        canopy.leaves().len()
    );
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

async fn cmd_tour(cfg: BloomConfig) -> anyhow::Result<()> {
    let mut session = Session::new(&cfg, cfg.text_service()?)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print!("{}", render_screen(&session.snapshot()));

    loop {
        let event = tokio::select! {
            biased;
            Some(_) = session.pump(), if session.is_loading() => TourEvent::Settled,
            line = lines.next_line() => TourEvent::Line(line),
        };

        match event {
            TourEvent::Settled => {}
            TourEvent::Line(line) => {
                let Some(line) = line.context("read stdin")? else {
                    if session.is_loading() {
                        session.settle().await;
                        println!();
                        print!("{}", render_screen(&session.snapshot()));
                    }
                    break;
                };
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }
                if matches!(command, "quit" | "exit" | "q") {
                    break;
                }
                if let Err(err) = run_command(&mut session, command) {
                    eprintln!("{err}");
                    continue;
                }
                // Let requests that answer immediately land before redrawing.
                tokio::task::yield_now().await;
                session.try_pump();
            }
        }
        println!();
        print!("{}", render_screen(&session.snapshot()));
    }
    Ok(())
}

fn run_command(session: &mut Session, command: &str) -> heartbloom::BloomResult<()> {
    if command.eq_ignore_ascii_case("reassure") {
        return session.request_reassurance();
    }
    let action: ViewAction = command.parse()?;
    session.dispatch(action)?;
    Ok(())
}

async fn cmd_snapshot(cfg: BloomConfig) -> anyhow::Result<()> {
    let mut session = Session::new(&cfg, cfg.text_service()?)?;
    for action in [
        ViewAction::Enter,
        ViewAction::PersonalMessage,
        ViewAction::Done,
    ] {
        session.dispatch(action)?;
        session.settle().await;
    }
    tracing::info!(
        poem = ?session.slot(SlotKind::Poem).status(),
        reassurance = ?session.slot(SlotKind::Reassurance).status(),
        "tour finished"
    );

    let snapshot = session.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("serialize snapshot")?
    );
    Ok(())
}
