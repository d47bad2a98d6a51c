use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use plainfmt::{DocumentParser, OutputFormat, ParsedInput, Realise, TextFormatter, TextLeaf};
use std::fs;
use std::io::{self, Read, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read document tree from stdin")?;
            Ok(buffer)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
    }
}

fn render_output(input: &ParsedInput, format: OutputFormat) -> Result<String> {
    let formatter = TextFormatter::new();

    match input {
        ParsedInput::Single(root) => {
            let leaf = formatter.realise(root.as_ref());
            match format {
                OutputFormat::Text => Ok(leaf.into_string()),
                OutputFormat::Json => Ok(serde_json::to_string(&leaf)?),
            }
        }
        ParsedInput::Batch(roots) => {
            let leaves = formatter.realise_all(roots);
            info!(count = leaves.len(), "realised batch");
            match format {
                OutputFormat::Text => Ok(leaves.iter().map(TextLeaf::text).collect()),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&leaves)?),
            }
        }
    }
}

fn main() -> Result<()> {
    let matches = Command::new("plainfmt")
        .about("Render a JSON document tree as plain text")
        .arg(
            Arg::new("input")
                .help("Input JSON file; reads stdin when omitted or '-'")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: text or json")
                .default_value("text"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write to a file instead of stdout"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text")
        .parse()?;

    let json_content = read_input(matches.get_one::<String>("input").map(String::as_str))?;
    let parsed = DocumentParser::new().parse_str(&json_content)?;
    debug!(?format, "parsed document tree");

    let output = render_output(&parsed, format)?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write {}", path))?;
            info!(path = %path, bytes = output.len(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
