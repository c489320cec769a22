use schemaprims::codec::{
    to_json_string_pretty_with_config, to_json_string_with_config, to_yaml_string_with_config,
};
use schemaprims::{CodecConfig, KeyOrder, Schema};

use crate::cmd::{load, DocFormat, FmtArgs};
use crate::exit::{io_error, schema_error, CliResult, SUCCESS};
use crate::output::print_raw;

pub fn run(args: FmtArgs) -> CliResult<i32> {
    let config = CodecConfig {
        key_order: if args.preserve_order {
            KeyOrder::Preserve
        } else {
            KeyOrder::ModeledFirst
        },
        ..CodecConfig::default()
    };

    let (schema, input_format) = load(&args.path, args.from, &config)?;
    let to = args.to.unwrap_or(input_format);
    let text = render(&schema, to, args.compact, &config)?;

    tracing::debug!(
        variant = schema.kind(),
        ?to,
        nodes = schema.node_count(),
        "re-encoded schema"
    );

    match &args.output {
        Some(path) => std::fs::write(path, text.as_bytes())
            .map_err(|err| io_error(&format!("failed to write {}", path.display()), err))?,
        None => print_raw(text.as_bytes()),
    }
    Ok(SUCCESS)
}

/// Encode `schema` as a complete document ending in a newline.
fn render(schema: &Schema, to: DocFormat, compact: bool, config: &CodecConfig) -> CliResult<String> {
    let encoded = match to {
        DocFormat::Json if compact => to_json_string_with_config(schema, config),
        DocFormat::Json => to_json_string_pretty_with_config(schema, config),
        DocFormat::Yaml => to_yaml_string_with_config(schema, config),
    };
    let mut text = encoded.map_err(|err| schema_error("encode failed", err))?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
