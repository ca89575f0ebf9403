extern crate bincode;
extern crate gesture_cloud;

use clap::Parser;
use gesture_cloud::{builtin_templates, Result, TemplateSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Converts a JSON gesture template set into the bincode form the recognizer loads
#[derive(Parser, Debug)]
#[command(name = "template_json_convert")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON template set to read
    #[arg(default_value = "./data/templates.json")]
    input: PathBuf,

    /// Binary template set to write
    #[arg(default_value = "./data/templates.bin")]
    output: PathBuf,

    /// Convert the compiled-in templates instead of reading the input file
    #[arg(long)]
    builtin: bool,
}

fn parse_json_templates(path: &Path) -> Result<TemplateSet> {
    let file = File::open(path)?;
    let set: TemplateSet = serde_json::from_reader(BufReader::new(file))?;
    Ok(set)
}

// Writes only the entries the library would accept; returns how many were written
fn convert(mut set: TemplateSet, output: &Path) -> Result<usize> {
    let read = set.templates.len();
    let dropped = set.retain_valid();
    info!(read, dropped, "parsed templates");

    let mut f = File::create(output)?;
    bincode::serialize_into(&mut f, &set)?;
    Ok(set.templates.len())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let set = if args.builtin {
        TemplateSet {
            templates: builtin_templates(),
        }
    } else {
        parse_json_templates(&args.input)?
    };

    let written = convert(set, &args.output)?;
    info!(file = %args.output.display(), written, "wrote binary template set");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesture_cloud::{GestureTemplate, Point, TemplateLibrary};

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["template_json_convert"]).unwrap();
        assert_eq!(args.input, PathBuf::from("./data/templates.json"));
        assert_eq!(args.output, PathBuf::from("./data/templates.bin"));
        assert!(!args.builtin);

        let args = Args::try_parse_from(["template_json_convert", "--builtin", "in.json", "out.bin"]).unwrap();
        assert!(args.builtin);
        assert_eq!(args.output, PathBuf::from("out.bin"));
        assert!(Args::try_parse_from(["template_json_convert", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_convert_drops_invalid_entries() {
        let set = TemplateSet {
            templates: vec![
                GestureTemplate::new(
                    "check",
                    "complete",
                    vec![Point::new(0.0, 10.0), Point::new(5.0, 20.0), Point::new(20.0, 0.0)],
                ),
                GestureTemplate::new("empty", "nothing", Vec::new()),
            ],
        };
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("templates.bin");
        assert_eq!(convert(set, &output).unwrap(), 1);

        let bytes = std::fs::read(&output).unwrap();
        let written: TemplateSet = bincode::deserialize(&bytes).unwrap();
        assert_eq!(written.templates.len(), 1);
        assert_eq!(written.templates[0].name, "check");
        // Raw points are stored; normalization happens when the library loads them
        assert_eq!(written.templates[0].points.len(), 3);
        assert_eq!(TemplateLibrary::load_file(&output).unwrap().len(), 1);
    }

    #[test]
    fn test_convert_builtin_set() {
        let set = TemplateSet {
            templates: builtin_templates(),
        };
        let count = set.templates.len();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("builtin.bin");
        assert_eq!(convert(set, &output).unwrap(), count);
        assert_eq!(TemplateLibrary::load_file(&output).unwrap().len(), count);
    }
}
