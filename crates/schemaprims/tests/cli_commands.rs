#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "schemaprims-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn schemaprims(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_schemaprims"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("schemaprims should run")
}

fn path_arg(path: &std::path::Path) -> &str {
    path.to_str().expect("temp path should be utf-8")
}

#[test]
fn fmt_keeps_property_order_and_extras() {
    let dir = unique_temp_dir("fmt");
    let input = dir.join("order.json");
    std::fs::write(
        &input,
        r#"{"x-owner":"payments","properties":{"b":{"minimum":0.30000000000000004},"a":true},"type":"object"}"#,
    )
    .expect("fixture should be writable");

    let output = schemaprims(&["fmt", path_arg(&input), "--compact"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"properties\":{\"b\":{\"minimum\":0.30000000000000004},\"a\":true},\"type\":\"object\",\"x-owner\":\"payments\"}\n"
    );

    let preserved = schemaprims(&["fmt", path_arg(&input), "--compact", "--preserve-order"]);
    assert!(preserved.status.success());
    assert_eq!(
        String::from_utf8_lossy(&preserved.stdout),
        "{\"x-owner\":\"payments\",\"properties\":{\"b\":{\"minimum\":0.30000000000000004},\"a\":true},\"type\":\"object\"}\n"
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn fmt_converts_json_to_yaml_file() {
    let dir = unique_temp_dir("yaml");
    let input = dir.join("flag.json");
    let target = dir.join("flag.yaml");
    std::fs::write(&input, r#"{"type":"boolean","default":false,"x-ui":{"widget":"toggle"}}"#)
        .expect("fixture should be writable");

    let output = schemaprims(&[
        "fmt",
        path_arg(&input),
        "--to",
        "yaml",
        "--output",
        path_arg(&target),
    ]);
    assert!(output.status.success());

    let yaml = std::fs::read_to_string(&target).expect("yaml output should exist");
    assert!(yaml.contains("type: boolean"));
    assert!(yaml.contains("default: false"));
    assert!(yaml.contains("widget: toggle"));

    let back = schemaprims(&["fmt", path_arg(&target), "--to", "json", "--compact"]);
    assert!(back.status.success());
    assert_eq!(
        String::from_utf8_lossy(&back.stdout),
        "{\"type\":\"boolean\",\"default\":false,\"x-ui\":{\"widget\":\"toggle\"}}\n"
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_schema_exits_60() {
    let dir = unique_temp_dir("malformed");
    let input = dir.join("bad.json");
    std::fs::write(&input, r#"{"required": "notAnArray"}"#).expect("fixture should be writable");

    let output = schemaprims(&["fmt", path_arg(&input)]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: decode failed"));
    assert!(stderr.contains("/required"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_exits_1() {
    let dir = unique_temp_dir("missing");
    let output = schemaprims(&["inspect", path_arg(&dir.join("absent.json"))]);

    assert_eq!(output.status.code(), Some(1));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn inspect_json_reports_structure() {
    let dir = unique_temp_dir("inspect");
    let input = dir.join("order.yaml");
    std::fs::write(
        &input,
        "title: Order\ntype: object\nproperties:\n  zeta:\n    type: string\n  id:\n    type: integer\nrequired: [id]\nx-owner: payments\n",
    )
    .expect("fixture should be writable");

    let output = schemaprims(&["--format", "json", "inspect", path_arg(&input)]);

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("inspect output should be JSON");
    assert_eq!(
        report["schema_id"],
        "https://schemas.3leaps.dev/schemaprims/cli/v1/inspect-report.schema.json"
    );
    assert_eq!(report["variant"], "object");
    assert_eq!(report["title"], "Order");
    assert_eq!(report["properties"], serde_json::json!(["zeta", "id"]));
    assert_eq!(report["required"], serde_json::json!(["id"]));
    assert_eq!(report["extras"], serde_json::json!(["/x-owner"]));
    assert_eq!(report["node_count"], 3);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_prints_package_version() {
    let output = schemaprims(&["version"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("schemaprims {}", env!("CARGO_PKG_VERSION"))
    );
}
