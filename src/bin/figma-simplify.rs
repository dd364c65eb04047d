use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "figma-simplify", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simplify one or more design-file JSON responses.
    Simplify(SimplifyArgs),
}

#[derive(Parser, Debug)]
struct SimplifyArgs {
    /// Input response JSON files (full document or nodes-by-id).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write `<stem>.simplified.json` per input here instead of printing to stdout.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Maximum depth to descend below the root nodes.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Simplify(args) => cmd_simplify(args),
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
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_response_json(path: &Path) -> anyhow::Result<figma_simplify::DesignResponse> {
    let f = File::open(path).with_context(|| format!("open response '{}'", path.display()))?;
    let r = BufReader::new(f);
    let resp = figma_simplify::DesignResponse::from_reader(r)
        .with_context(|| format!("read response '{}'", path.display()))?;
    Ok(resp)
}

fn render_one(
    path: &Path,
    opts: &figma_simplify::SimplifyOptions,
    compact: bool,
) -> anyhow::Result<String> {
    let resp = read_response_json(path)?;
    // One style store per file; ids are never shared across inputs.
    let design = figma_simplify::simplify_with(&resp, opts)
        .with_context(|| format!("simplify '{}'", path.display()))?;
    let out = if compact {
        design.to_json()?
    } else {
        design.to_json_pretty()?
    };
    Ok(out)
}

fn cmd_simplify(args: SimplifyArgs) -> anyhow::Result<()> {
    let opts = figma_simplify::SimplifyOptions {
        max_depth: args.max_depth,
    };

    let rendered = args
        .inputs
        .par_iter()
        .map(|p| render_one(p, &opts, args.compact))
        .collect::<anyhow::Result<Vec<_>>>()?;

    match args.out_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("create output dir '{}'", dir.display()))?;
            for (input, json) in args.inputs.iter().zip(&rendered) {
                let stem = input
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("design");
                let out = dir.join(format!("{stem}.simplified.json"));
                std::fs::write(&out, json)
                    .with_context(|| format!("write '{}'", out.display()))?;
                tracing::info!(path = %out.display(), "wrote simplified design");
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            for json in &rendered {
                writeln!(stdout, "{json}").context("write stdout")?;
            }
        }
    }
    Ok(())
}
