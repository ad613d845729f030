//! sastopo CLI
//!
//! Developer tooling around the panel engine:
//! - `inspect`: derive and print the property panel for one vertex record
//!   (the same JSON shape the presentation layer hands to the engine)
//! - `rates`: print the link-rate code table
//!
//! Diagram rendering, highlighting and topology-document loading live in the
//! presentation layer, not here.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use sastopo_panel::panel::PanelBuilder;
use sastopo_panel::schema::SchemaVersion;
use sastopo_panel::vertex::Vertex;

mod render;

#[derive(Parser)]
#[command(name = "sastopo")]
#[command(author, version, about = "Inspect SAS-fabric topology vertices")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the property panel for a vertex record (JSON) and print it.
    Inspect {
        /// Input vertex JSON file
        input: PathBuf,
        /// Display schema revision (v1|v2)
        #[arg(short, long, default_value = "v2")]
        schema: String,
        /// Emit the derived panel as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the link-rate code table.
    Rates,
}

fn parse_schema(s: &str) -> Result<SchemaVersion> {
    match s.trim().to_ascii_lowercase().as_str() {
        "v1" => Ok(SchemaVersion::V1),
        "v2" => Ok(SchemaVersion::V2),
        other => Err(anyhow!("unknown schema revision `{other}` (expected v1|v2)")),
    }
}

fn cmd_inspect(input: &Path, schema: &str, json: bool) -> Result<()> {
    let schema = parse_schema(schema)?;
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let vertex: Vertex = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid vertex record", input.display()))?;

    let panel = PanelBuilder::new(schema)
        .build(&vertex)
        .with_context(|| format!("failed to derive panel for `{}`", vertex.fmri))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&panel)?);
    } else {
        render::print_panel(&vertex, &panel);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Inspect {
            input,
            schema,
            json,
        } => cmd_inspect(&input, &schema, json),
        Commands::Rates => {
            render::print_rates();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_revision_parsing() {
        assert_eq!(parse_schema("v1").unwrap(), SchemaVersion::V1);
        assert_eq!(parse_schema(" V2 ").unwrap(), SchemaVersion::V2);
        assert!(parse_schema("v3").is_err());
    }
}
