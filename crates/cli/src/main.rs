mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use pipeline::{generate, ScanConfig};
use scriptdoc_render::{HtmlRenderer, JsonRenderer, RenderOptions, Renderer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Generate the scripting reference from the annotated game sources.
#[derive(Parser, Debug)]
#[command(name = "scriptdoc", version, about)]
struct Cli {
    /// File to write; `.json` selects JSON output. Writes HTML to stdout when
    /// omitted.
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    fn for_path(path: Option<&Path>) -> Self {
        let is_json = path
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::Json
        } else {
            Self::Html
        }
    }

    fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer::new(RenderOptions::default())),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout may carry the document, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let output = cli.output.as_deref();
    let mut out = open_output(output)?;

    let generated = generate(&ScanConfig::default());
    if !generated.diagnostics.is_empty() {
        log::info!("{} diagnostics raised", generated.diagnostics.len());
    }

    OutputFormat::for_path(output)
        .renderer()
        .render(&generated.docs, &mut out)
        .context("Failed to write documentation")?;
    out.flush().context("Failed to write documentation")?;
    Ok(())
}
