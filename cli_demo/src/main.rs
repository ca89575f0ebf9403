extern crate gesture_cloud;
extern crate serde_derive;

use clap::Parser;
use gesture_cloud::{points_from_strokes, Point, Recognizer, Result};
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Replays recorded gestures through the recognizer and reports timing and hit count
#[derive(Parser, Debug)]
#[command(name = "cli_demo")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON-lines file of recorded gestures
    #[arg(default_value = "data/gestures.jsonl")]
    input: PathBuf,

    /// Number of passes over the whole input set
    #[arg(default_value_t = 1_000)]
    iters: usize,
}

// One recorded gesture: the action the user meant, and the strokes they drew
#[derive(Serialize, Deserialize)]
struct Input {
    action: String,
    strokes: Vec<Vec<(f64, f64)>>,
}

fn read_inputs(path: &Path) -> Result<Vec<Input>> {
    let mut res: Vec<Input> = Vec::new();
    let file = File::open(path)?;
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match serde_json::from_str::<Input>(line) {
            Ok(input) => res.push(input),
            Err(err) => warn!(line = line_no + 1, error = %err, "skipping malformed input"),
        }
    }
    Ok(res)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let iters = args.iters;

    info!(file = %args.input.display(), "loading evaluation data");
    let inputs = read_inputs(&args.input)?;
    let gestures: Vec<(String, Vec<Point>)> = inputs
        .into_iter()
        .map(|input| (input.action, points_from_strokes(&input.strokes)))
        .collect();
    let recognizer = Recognizer::new();
    info!(inputs = gestures.len(), iters, "starting evaluation");

    let start = Instant::now();
    let mut guessed = 0;
    for _ in 0..iters {
        for (action, points) in &gestures {
            if let Some(res) = recognizer.recognize(points) {
                if &res.action == action {
                    guessed += 1;
                }
            }
        }
    }
    let duration = start.elapsed();
    info!(?duration, guessed, "finished");

    // One more pass to show what each gesture resolved to
    for (action, points) in &gestures {
        match recognizer.recognize(points) {
            Some(res) => println!(
                "{:<14} -> {:<14} {:<16} {:.3}",
                action, res.action, res.name, res.score
            ),
            None => println!("{:<14} -> (no match)", action),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["cli_demo"]).unwrap();
        assert_eq!(args.input, PathBuf::from("data/gestures.jsonl"));
        assert_eq!(args.iters, 1_000);
    }

    #[test]
    fn test_args_explicit() {
        let args = Args::try_parse_from(["cli_demo", "other.jsonl", "25"]).unwrap();
        assert_eq!(args.input, PathBuf::from("other.jsonl"));
        assert_eq!(args.iters, 25);
    }

    #[test]
    fn test_args_rejects_bad_iteration_count() {
        assert!(Args::try_parse_from(["cli_demo", "data/gestures.jsonl", "10x"]).is_err());
    }

    #[test]
    fn test_read_inputs_skips_comments_and_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gestures.jsonl");
        std::fs::write(
            &path,
            "# header\n\n{\"action\": \"delete\", \"strokes\": [[[0, 0], [10, 10]]]}\nnot json\n",
        )
        .unwrap();
        let inputs = read_inputs(&path).unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].action, "delete");
        assert_eq!(inputs[0].strokes[0], vec![(0.0, 0.0), (10.0, 10.0)]);
    }
}
