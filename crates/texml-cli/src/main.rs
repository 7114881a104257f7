use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use texml::{RenderConfig, Verb};

#[derive(Debug, Parser)]
#[command(
    name = "texml",
    version,
    about = "Render TeXML documents from JSON/YAML verb scripts"
)]
struct Args {
    /// Verb script (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Script format (json, yaml); inferred from the file extension
    #[arg(short, long, value_enum)]
    from: Option<ScriptFormat>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Indent nested verbs
    #[arg(short, long)]
    pretty: bool,
    /// Spaces per level with --pretty
    #[arg(long, default_value_t = 2, requires = "pretty", value_parser = clap::value_parser!(u8))]
    indent: u8,
    /// Omit the XML declaration
    #[arg(long)]
    no_declaration: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScriptFormat {
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        let config = if self.pretty {
            RenderConfig::pretty(usize::from(self.indent))
        } else {
            RenderConfig::compact()
        };
        config.with_declaration(!self.no_declaration)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(err) = run(Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let script = read_input(&args.input)?;
    let format = args
        .from
        .or_else(|| infer_format(&args.input))
        .unwrap_or(ScriptFormat::Json);
    debug!(?format, bytes = script.len(), "read script");

    let verbs = parse_script(&script, format)?;
    let document = texml::voice_with_config(&verbs, &args.render_config())
        .context("failed to render document")?;

    write_output(&args.output, document.as_bytes())
}

fn parse_script(script: &str, format: ScriptFormat) -> Result<Vec<Verb>> {
    let verbs = match format {
        ScriptFormat::Json => serde_json::from_str(script).context("invalid JSON verb script")?,
        ScriptFormat::Yaml => serde_yaml::from_str(script).context("invalid YAML verb script")?,
    };
    Ok(verbs)
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}

fn infer_format(path: &Option<PathBuf>) -> Option<ScriptFormat> {
    let path = path.as_ref()?;
    let ext = path.extension().and_then(|s| s.to_str())?;
    match ext {
        "json" => Some(ScriptFormat::Json),
        "yaml" | "yml" => Some(ScriptFormat::Yaml),
        _ => None,
    }
}
