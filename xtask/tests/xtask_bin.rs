use std::process::Command;

fn xtask(arg: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg(arg)
        .output()
        .expect("run xtask")
}

#[test]
fn xtask_help_runs() {
    let output = xtask("help");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
}

#[test]
fn explain_coverage_passes() {
    let output = xtask("explain-coverage");
    assert!(output.status.success(), "{output:?}");
}

#[test]
fn fixtures_validate_against_schemas() {
    let output = xtask("validate-fixtures");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn print_schema_ids_lists_report_schema() {
    let output = xtask("print-schema-ids");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plateguard.report.v1"));
    assert!(stdout.contains("plateguard.catalog.v1"));
}
