//! Running the `crd-manifests` binary
use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use serde_json::Value;

const CC_RUNTIME: &str = "k8s_confidentialcontainers_org_cc_runtime_v1beta1_manifest";

const EXAMPLE_YAML: &str = "\
metadata:
  name: example
spec:
  runtime_name: kata
  config:
    install_type: bundle
    payload_image: quay.io/example:v1
";

const EXAMPLE_MANIFEST: &str = "\
apiVersion: confidentialcontainers.org/v1beta1
kind: CcRuntime
metadata:
  name: example
spec:
  config:
    installType: bundle
    payloadImage: quay.io/example:v1
  runtimeName: kata
";

fn cli(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_crd-manifests"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut pipe = child.stdin.take().unwrap();
        pipe.write_all(stdin.unwrap_or_default().as_bytes()).unwrap();
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn lists_data_sources() {
    assert_eq!(stdout(&cli(&["list"], None)), format!("{CC_RUNTIME}\n"));
    assert_eq!(
        stdout(&cli(&["list", "--provider-name", "kubernetes"], None)),
        "kubernetes_confidentialcontainers_org_cc_runtime_v1beta1_manifest\n"
    );
}

#[test]
fn prints_schema_as_json() {
    let schema: Value = serde_json::from_str(&stdout(&cli(&["schema", CC_RUNTIME], None))).unwrap();
    let names = schema["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["id", "metadata", "spec", "yaml"]);
    assert_eq!(schema["attributes"][3]["presence"], "computed");
}

#[test]
fn renders_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(EXAMPLE_YAML.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap();
    assert_eq!(stdout(&cli(&["render", CC_RUNTIME, "-f", path], None)), EXAMPLE_MANIFEST);
}

#[test]
fn renders_json_from_stdin() {
    let config = r#"{
        "metadata": {"name": "example"},
        "spec": {"runtime_name": "kata", "config": {"install_type": "bundle", "payload_image": "quay.io/example:v1"}}
    }"#;
    assert_eq!(stdout(&cli(&["render", CC_RUNTIME], Some(config))), EXAMPLE_MANIFEST);
}

#[test]
fn prints_state() {
    let out = stdout(&cli(&["render", CC_RUNTIME, "--state"], Some(EXAMPLE_YAML)));
    let state: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(state["id"], "example");
    assert_eq!(state["yaml"], EXAMPLE_MANIFEST);
    assert_eq!(state["spec"]["runtime_name"], "kata");
}

#[test]
fn invalid_configuration_fails_without_output() {
    let config = EXAMPLE_YAML.replace("    payload_image: quay.io/example:v1\n", "");
    let output = cli(&["render", CC_RUNTIME], Some(&config));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("spec.config.payload_image: Missing required argument"), "{stderr}");
}

#[test]
fn unknown_data_source_fails() {
    let output = cli(&["schema", "k8s_nope"], None);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown data source: k8s_nope"));
}
