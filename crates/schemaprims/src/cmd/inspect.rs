use schemaprims::{CodecConfig, Schema};
use serde::Serialize;

use crate::cmd::{load, InspectArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{field_table, print_json, print_raw, OutputFormat};

#[derive(Serialize, Debug)]
struct InspectOutput {
    schema_id: &'static str,
    variant: &'static str,
    /// Set for boolean schemas only.
    value: Option<bool>,
    dialect: Option<String>,
    title: Option<String>,
    #[serde(rename = "type")]
    instance_type: Vec<String>,
    properties: Vec<String>,
    required: Vec<String>,
    keywords: Vec<&'static str>,
    /// JSON pointers of every unrecognized key in the document.
    extras: Vec<String>,
    node_count: usize,
    depth: usize,
}

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let (schema, _) = load(&args.path, args.from, &CodecConfig::default())?;
    let out = summarize(&schema);
    print_inspect(&out, format);
    Ok(SUCCESS)
}

fn summarize(schema: &Schema) -> InspectOutput {
    let mut out = InspectOutput {
        schema_id: "https://schemas.3leaps.dev/schemaprims/cli/v1/inspect-report.schema.json",
        variant: schema.kind(),
        value: schema.as_bool().ok(),
        dialect: None,
        title: None,
        instance_type: Vec::new(),
        properties: Vec::new(),
        required: Vec::new(),
        keywords: Vec::new(),
        extras: extra_pointers(schema),
        node_count: schema.node_count(),
        depth: schema.depth(),
    };

    if let Ok(object) = schema.as_object() {
        out.dialect = Some(object.dialect().to_string());
        out.title = object.title.clone();
        out.instance_type = match &object.instance_type {
            Some(schemaprims::InstanceType::Single(name)) => vec![name.clone()],
            Some(schemaprims::InstanceType::Union(names)) => names.clone(),
            None => Vec::new(),
        };
        out.properties = object
            .properties
            .iter()
            .flat_map(|properties| properties.keys().cloned())
            .collect();
        out.required = object.required.clone().unwrap_or_default();
        out.keywords = object.present_keywords().collect();
    }
    out
}

fn extra_pointers(schema: &Schema) -> Vec<String> {
    let mut pointers = Vec::new();
    schema.walk(&mut |pointer, node| {
        if let Ok(object) = node.as_object() {
            for key in object.extras.keys() {
                pointers.push(format!(
                    "{pointer}/{}",
                    schemaprims::model::escape_pointer_segment(key)
                ));
            }
        }
    });
    pointers
}

fn print_inspect(out: &InspectOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let table = field_table([
                ("variant", describe_variant(out)),
                ("dialect", out.dialect.clone().unwrap_or_else(|| "-".to_string())),
                ("title", out.title.clone().unwrap_or_else(|| "-".to_string())),
                ("type", join_or_dash(&out.instance_type)),
                ("properties", join_or_dash(&out.properties)),
                ("required", join_or_dash(&out.required)),
                ("extras", join_or_dash(&out.extras)),
                ("nodes", out.node_count.to_string()),
                ("depth", out.depth.to_string()),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("Schema:");
            println!("  Variant:    {}", describe_variant(out));
            if let Some(dialect) = &out.dialect {
                println!("  Dialect:    {dialect}");
            }
            if let Some(title) = &out.title {
                println!("  Title:      {title}");
            }
            println!("  Type:       {}", join_or_dash(&out.instance_type));
            println!("  Properties: {}", join_or_dash(&out.properties));
            println!("  Required:   {}", join_or_dash(&out.required));
            println!("  Keywords:   {}", out.keywords.join(", "));
            println!("  Extras:     {}", join_or_dash(&out.extras));
            println!("  Nodes:      {} (depth {})", out.node_count, out.depth);
        }
        OutputFormat::Raw => {
            let mut text = out.properties.join("\n");
            text.push('\n');
            print_raw(text.as_bytes());
        }
    }
}

fn describe_variant(out: &InspectOutput) -> String {
    match out.value {
        Some(value) => format!("{} ({value})", out.variant),
        None => out.variant.to_string(),
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
