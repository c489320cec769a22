use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use schemaprims::{CodecConfig, Schema};

use crate::exit::{io_error, schema_error, CliResult};
use crate::output::OutputFormat;

pub mod fmt;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a schema document and re-encode it.
    Fmt(FmtArgs),
    /// Summarize a schema document.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Fmt(args) => fmt::run(args),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Text encoding of a schema document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    Json,
    Yaml,
}

impl DocFormat {
    /// `.yaml` and `.yml` paths are YAML; everything else, stdin included, is JSON.
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Schema file to read (`-` for stdin).
    pub path: PathBuf,
    /// Input encoding. Default: inferred from the file extension.
    #[arg(long, value_name = "FORMAT")]
    pub from: Option<DocFormat>,
    /// Output encoding. Default: same as the input.
    #[arg(long, value_name = "FORMAT")]
    pub to: Option<DocFormat>,
    /// Re-emit keys in the order they appear in the input.
    #[arg(long)]
    pub preserve_order: bool,
    /// Single-line JSON output (ignored for YAML).
    #[arg(long)]
    pub compact: bool,
    /// Write to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Schema file to read (`-` for stdin).
    pub path: PathBuf,
    /// Input encoding. Default: inferred from the file extension.
    #[arg(long, value_name = "FORMAT")]
    pub from: Option<DocFormat>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

pub(crate) fn read_document(path: &Path) -> CliResult<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| io_error("failed to read stdin", err))?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed to read {}", path.display()), err))
}

pub(crate) fn decode_document(
    text: &str,
    format: DocFormat,
    config: &CodecConfig,
) -> CliResult<Schema> {
    let decoded = match format {
        DocFormat::Json => schemaprims::codec::from_json_str_with_config(text, config),
        DocFormat::Yaml => schemaprims::codec::from_yaml_str_with_config(text, config),
    };
    decoded.map_err(|err| schema_error("decode failed", err))
}

/// Read and decode `path`, returning the schema and the encoding it was read as.
pub(crate) fn load(
    path: &Path,
    from: Option<DocFormat>,
    config: &CodecConfig,
) -> CliResult<(Schema, DocFormat)> {
    let format = from.unwrap_or_else(|| DocFormat::infer(path));
    let text = read_document(path)?;
    tracing::debug!(path = %path.display(), ?format, bytes = text.len(), "decoding schema");
    let schema = decode_document(&text, format, config)?;
    Ok((schema, format))
}
