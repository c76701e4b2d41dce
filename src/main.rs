//! sketchref — feed one dot gesture into a sketch and print the outcome.
//!
//! Loads a sketch description from YAML, recognizes a dot at the given
//! location, activates the result and prints the updated sketch.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sketchref::geometry::Pt;
use sketchref::recognizer::{DotReferenceRecognizer, RecognizerConfig, SketchRecognizer};
use sketchref::sketch::{Ink, SketchBook};

#[derive(Debug, Parser)]
#[command(name = "sketchref", version, about = "Apply a dot reference gesture to a sketch")]
struct Cli {
    /// YAML file describing the sketch's segments and guide points.
    #[arg(long)]
    sketch: PathBuf,

    /// Dot location as `x,y`.
    #[arg(long, value_parser = parse_pt, allow_hyphen_values = true)]
    at: Pt,

    /// Override the nearness threshold.
    #[arg(long)]
    threshold: Option<f64>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_pt(s: &str) -> Result<Pt, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Pt::new(x, y))
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = match resolve_config(RecognizerConfig::load(), cli.threshold) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("invalid --threshold: {e}");
            std::process::exit(1);
        }
    };

    let mut book = match load_sketch(&cli.sketch) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("failed to load sketch {}: {e}", cli.sketch.display());
            std::process::exit(1);
        }
    };

    let recognizer = DotReferenceRecognizer::new(config);
    let item = recognizer.apply_raw(&Ink::dot(cli.at), &book);
    println!("recognized: {:?}", item.action());

    match item.activate(&mut book) {
        Ok(Some(gp)) => {
            let loc = gp.location();
            println!("guide point at ({:.3}, {:.3})", loc.x, loc.y);
        }
        Ok(None) => println!("nothing to do"),
        Err(e) => {
            eprintln!("activation failed: {e}");
            std::process::exit(1);
        }
    }

    match serde_yaml::to_string(&book) {
        Ok(yaml) => print!("{yaml}"),
        Err(e) => eprintln!("failed to print sketch: {e}"),
    }
}

/// The file config (or the default), with the command-line threshold applied.
fn resolve_config(
    loaded: Option<RecognizerConfig>,
    threshold: Option<f64>,
) -> Result<RecognizerConfig, std::io::Error> {
    match threshold {
        Some(t) => RecognizerConfig::try_with_threshold(t),
        None => Ok(loaded.unwrap_or_default()),
    }
}

fn load_sketch(path: &std::path::Path) -> Result<SketchBook, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_yaml::from_str(&content).map_err(|e| e.to_string())
}
