use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_euler-viz"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("euler-viz should launch")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("test file should be written");
}

#[test]
fn default_matrix_is_identity() {
    let output = run_cli(&["matrix"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output).trim_end(),
        "1.0000000, 0.0000000, 0.0000000 / 0.0000000, 1.0000000, 0.0000000 / 0.0000000, 0.0000000, 1.0000000"
    );
}

#[test]
fn matrix_literal_prints_quarter_turn() {
    let output = run_cli(&[
        "matrix",
        "--order",
        "XYZ",
        "--angles",
        "0",
        "0",
        "90",
        "--literal",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output).trim_end(),
        "[[0.0000000, -1.0000000, 0.0000000], [1.0000000, 0.0000000, 0.0000000], [0.0000000, 0.0000000, 1.0000000]]"
    );
}

#[test]
fn negative_angles_are_accepted_as_values() {
    let output = run_cli(&[
        "matrix", "--order", "ZYX", "--angles", "-90", "0", "0", "--json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let rows: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("matrix json should parse");
    let m01 = rows[0][1].as_f64().expect("entry should be a number");
    let m10 = rows[1][0].as_f64().expect("entry should be a number");
    assert!((m01 - 1.0).abs() < 1.0e-12);
    assert!((m10 + 1.0).abs() < 1.0e-12);
}

#[test]
fn invalid_axis_reports_input_error() {
    let output = run_cli(&["compose", "--order", "XYQ"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = stderr_of(&output);
    assert!(stderr.contains("ERROR: [INPUT.AXIS]"), "stderr: {stderr}");
    assert!(stderr.contains("FATAL EXIT CODE: 2"), "stderr: {stderr}");
    assert!(stdout_of(&output).is_empty());
    let output = run_cli(&["matrix", "--order", "zyx", "--handedness", "right"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("ERROR: [INPUT.AXIS] unknown rotation axis 'z'"));

    let output = run_cli(&["matrix", "--handedness", "r"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("ERROR: [INPUT.HANDEDNESS]"));
}

#[test]
fn unknown_order_and_wrong_angle_count_are_rejected() {
    let output = run_cli(&["matrix", "--order", "XXY"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("ERROR: [INPUT.ORDER]"));

    let output = run_cli(&["matrix", "--angles", "10", "20"]);
    assert_eq!(output.status.code(), Some(2));
    let expected = "ERROR: [INPUT.ANGLE_COUNT] expected exactly 3 angles, got 2";
    assert!(stderr_of(&output).contains(expected));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let temp = TempDir::new().expect("tempdir should be created");
    let missing = temp.path().join("absent.json");
    let missing = missing.to_str().expect("utf-8 path");
    let output = run_cli(&["derive", "--config", missing]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("ERROR: [IO.CONFIG_READ]"), "stderr: {stderr}");
    assert!(stderr.contains("FATAL EXIT CODE: 3"), "stderr: {stderr}");
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let output = run_cli(&["spin"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("ERROR: [INPUT.CLI_USAGE]"));
}

#[test]
fn help_exits_cleanly() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("derive"));
}

#[test]
fn flags_override_config_file_values() {
    let temp = TempDir::new().expect("tempdir should be created");
    let config_path = temp.path().join("visualizer.json");
    write_file(
        &config_path,
        r#"{"handedness": "left", "order": "ZXZ", "angles": [10, 20, 30]}"#,
    );

    let output = run_cli(&[
        "compose",
        "--config",
        config_path.to_str().expect("utf-8 path"),
        "--order",
        "XYZ",
        "--json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let sequence: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("sequence json should parse");
    assert_eq!(sequence["order"], "XYZ");
    assert_eq!(sequence["initialBasis"]["e2"], serde_json::json!([0.0, -1.0, 0.0]));
    assert_eq!(sequence["steps"].as_array().map(Vec::len), Some(3));
    assert_eq!(sequence["steps"][2]["angleDegrees"], 30.0);
    assert_eq!(sequence["steps"][0]["axisLabel"], "x");
}

#[test]
fn compose_text_walks_every_frame() {
    let output = run_cli(&["compose", "--angles", "30", "0", "0"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("ZYX rotation of the right-handed frame\n"));
    assert!(stdout.contains("step 1: about z by \\alpha = 30.0°"));
    assert!(stdout.contains("step 3: about x'' by \\gamma = 0.0°"));
    assert!(stdout.contains("  X   = ( 0.8660254,  0.5000000,  0.0000000)"));
}

#[test]
fn symbol_presets_resolve_to_latex() {
    let output = run_cli(&[
        "formula",
        "--order",
        "XYZ",
        "--symbols",
        "roll",
        "pitch",
        "yaw",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    let first_entry = "\\begin{pmatrix}\n\\cos \\textit{pitch} \\cos \\textit{yaw} &\n";
    assert!(stdout.starts_with(first_entry));
    assert!(stdout.trim_end().ends_with("\\end{pmatrix}"));

    let output = run_cli(&["formula", "--symbols", "a", "b"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("ERROR: [INPUT.SYMBOL_COUNT]"));
}

#[test]
fn derive_writes_block_to_output_file() {
    let temp = TempDir::new().expect("tempdir should be created");
    let output_path = temp.path().join("derivation.tex");

    let output = run_cli(&[
        "derive",
        "--handedness",
        "left",
        "--output",
        output_path.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).is_empty());

    let block = fs::read_to_string(&output_path).expect("derivation should be written");
    assert!(block.starts_with("\\begin{align*}\n"));
    assert!(block.contains("(0, -1, 0)^T"));
    assert!(block.trim_end().ends_with("\\end{align*}"));
}

#[test]
fn render_state_json_carries_every_output() {
    let output = run_cli(&["render", "--order", "ZXZ", "--angles", "15", "25", "35"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let state: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("render json should parse");
    assert_eq!(state["config"]["order"], "ZXZ");
    assert_eq!(state["stepInfos"].as_array().map(Vec::len), Some(3));
    assert_eq!(state["stepInfos"][1]["axisLabel"], "x'");
    assert_eq!(state["scenes"]["scenes"].as_array().map(Vec::len), Some(4));
    assert_eq!(state["scenes"]["grid"].as_array().map(Vec::len), Some(22));
    assert!(
        state["clipboardText"]
            .as_str()
            .is_some_and(|text| text.starts_with("[[") && text.ends_with("]]"))
    );
    assert!(
        state["derivation"]
            .as_str()
            .is_some_and(|text| text.contains("R_z(\\alpha)\nR_x(\\beta)\nR_z(\\gamma)"))
    );
}

#[test]
fn scene_json_tags_step_and_overall_views() {
    let output = run_cli(&["scene", "--angles", "0", "45", "0"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let set: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("scene json should parse");
    assert_eq!(set["camera"]["position"], serde_json::json!([2.5, 2.5, 2.5]));
    assert_eq!(set["scenes"][0]["kind"]["kind"], "step");
    assert_eq!(set["scenes"][0]["kind"]["step"], 1);
    assert_eq!(set["scenes"][3]["kind"]["kind"], "overall");
    assert_eq!(set["scenes"][3]["after"]["axes"][0]["label"], "X");
    assert_eq!(set["scenes"][3]["after"]["labelMargin"], 0.25);
}

#[test]
fn listings_cover_orders_and_presets() {
    let output = run_cli(&["orders", "--json"]);
    assert!(output.status.success());
    let orders: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("orders json should parse");
    assert_eq!(orders.as_array().map(Vec::len), Some(12));
    assert_eq!(orders[0]["name"], "XYX");
    assert_eq!(orders[0]["family"], "proper-euler");
    assert_eq!(orders[11]["name"], "ZYX");
    assert_eq!(orders[11]["family"], "tait-bryan");

    let output = run_cli(&["symbols"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 15);
    assert!(stdout.contains("roll     \\textit{roll}"));
}

#[test]
fn debug_log_level_writes_trace_to_stderr() {
    let output = run_cli(&["--log-level", "debug", "matrix"]);
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("resolved command-line configuration"));

    let output = run_cli(&["matrix", "--angles", "400", "0", "0"]);
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("outside the nominal"));
}
