//! Print the OpenAPI document.

use std::io::Write;

use clap::Parser;
use exam_backend::doc::ApiDoc;
use utoipa::OpenApi;

/// Command-line options for the dump.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the OpenAPI document")]
struct Cli {
    /// Emit YAML instead of JSON.
    #[arg(long)]
    yaml: bool,
    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let rendered = if cli.yaml {
        doc.to_yaml()?
    } else if cli.pretty {
        doc.to_pretty_json()?
    } else {
        doc.to_json()?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
