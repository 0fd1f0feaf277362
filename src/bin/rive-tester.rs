use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rive_tester::{
    AssetManifest, GestureScript, InputControl, InputDescriptor, ManualClock, SimulatedRuntime,
    TesterOptions, TesterSession,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rive-tester", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print animations, state machines, inputs and generated controls as JSON.
    Inspect(InspectArgs),
    /// Replay a gesture script against an asset and print the trace as JSON.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Asset manifest JSON.
    #[arg(long)]
    asset: PathBuf,

    /// Tester options JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Asset manifest JSON.
    #[arg(long)]
    asset: PathBuf,

    /// Gesture script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Tester options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame length used by `advance` steps, in milliseconds.
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    /// Write the trace here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct InspectReport<'a> {
    asset: &'a str,
    animations: &'a [String],
    state_machines: &'a [String],
    selected: Option<&'a str>,
    inputs: &'a [InputDescriptor],
    controls: Vec<InputControl>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn load_options(path: Option<&Path>) -> anyhow::Result<TesterOptions> {
    match path {
        Some(p) => TesterOptions::from_path(p)
            .with_context(|| format!("load options '{}'", p.display())),
        None => Ok(TesterOptions::default()),
    }
}

fn open_session(
    asset: &Path,
    config: Option<&Path>,
    clock: ManualClock,
) -> anyhow::Result<TesterSession<SimulatedRuntime, ManualClock>> {
    let manifest = AssetManifest::from_path(asset)
        .with_context(|| format!("load asset '{}'", asset.display()))?;
    let options = load_options(config)?;
    let session = TesterSession::new(SimulatedRuntime::new(manifest), options, clock)?;
    Ok(session)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let session = open_session(&args.asset, args.config.as_deref(), ManualClock::default())?;
    let report = InspectReport {
        asset: &session.runtime().manifest().name,
        animations: session.animations(),
        state_machines: session.state_machines(),
        selected: session.selected(),
        inputs: session.inputs(),
        controls: session.controls(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.asset, args.config.as_deref(), ManualClock::default())?;
    let script = GestureScript::from_path(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;

    let trace = rive_tester::replay(&mut session, &script, args.frame_ms)?;
    let json = serde_json::to_string_pretty(&trace)?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json)
                .with_context(|| format!("write trace '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
