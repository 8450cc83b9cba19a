//! Developer tasks (schema generation, fixture checks, explain coverage).
//!
//! Kept separate from the end-user CLI.

use anyhow::{Context, bail};
use plateguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Project root: the parent of the xtask directory.
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask has no parent directory")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaTarget {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(plateguard_types::PlateguardReportV1)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(plateguard_settings::PlateguardConfigV1)
}

fn generate_catalog_schema() -> schemars::Schema {
    schema_for!(plateguard_catalog::CatalogV1)
}

fn schema_targets() -> Vec<SchemaTarget> {
    vec![
        SchemaTarget {
            filename: "plateguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaTarget {
            filename: "plateguard.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaTarget {
            filename: "plateguard.catalog.v1.json",
            generate: generate_catalog_schema,
        },
    ]
}

/// Pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("create schemas directory")?;

    for target in schema_targets() {
        let json = serialize_schema(&(target.generate)())?;
        let path = dir.join(target.filename);
        fs::write(&path, &json).with_context(|| format!("write schema {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Fails if schemas/ differs from what the types generate (for CI).
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut stale = Vec::new();

    for target in schema_targets() {
        let path = dir.join(target.filename);
        let expected = serialize_schema(&(target.generate)())?;
        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => {}
            Ok(_) => stale.push(format!("{} (out of date)", target.filename)),
            Err(_) => stale.push(format!("{} (missing)", target.filename)),
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    for name in &stale {
        eprintln!("  - {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("schema validation failed")
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {} as JSON", path.display()))
}

fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let dir = fixtures_dir()?;
    let mut out = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() && path.join("expected.report.json").exists() {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

fn fixture_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Validate every fixture's inputs and golden report against the generated schemas.
fn validate_fixtures() -> anyhow::Result<()> {
    let report_schema = serde_json::to_value(generate_report_schema())?;
    let catalog_schema = serde_json::to_value(generate_catalog_schema())?;
    let report_validator = jsonschema::validator_for(&report_schema)
        .map_err(|e| anyhow::anyhow!("compile report schema: {e}"))?;
    let catalog_validator = jsonschema::validator_for(&catalog_schema)
        .map_err(|e| anyhow::anyhow!("compile catalog schema: {e}"))?;

    let mut errors = Vec::new();
    let fixtures = fixture_dirs()?;
    for dir in &fixtures {
        let name = fixture_name(dir);

        let config_path = dir.join("plateguard.toml");
        if config_path.exists() {
            let text = fs::read_to_string(&config_path)?;
            let resolved = plateguard_settings::parse_config_toml(&text).and_then(|cfg| {
                plateguard_settings::resolve_config(cfg, Default::default())
            });
            if let Err(err) = resolved {
                errors.push(format!("{name}: plateguard.toml: {err:#}"));
            }
        }

        let catalog = read_json(&dir.join("catalog.json"))?;
        for err in catalog_validator.iter_errors(&catalog) {
            errors.push(format!("{name}: catalog.json: {err}"));
        }

        let report = read_json(&dir.join("expected.report.json"))?;
        for err in report_validator.iter_errors(&report) {
            errors.push(format!("{name}: expected.report.json: {err}"));
        }
    }

    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("fixture validation failed with {} errors", errors.len());
    }
    println!("{} fixtures validate", fixtures.len());
    Ok(())
}

/// Run the built CLI over every fixture and compare with the golden report.
fn check_fixtures() -> anyhow::Result<()> {
    let bin = project_root()?.join("target").join("debug").join("plateguard");
    #[cfg(target_os = "windows")]
    let bin = bin.with_extension("exe");

    if !bin.exists() {
        bail!(
            "plateguard binary not found at {}.\nRun `cargo build -p plateguard-cli` first.",
            bin.display()
        );
    }

    let mut errors = Vec::new();
    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);
        let temp = tempfile::tempdir().context("create temp dir")?;
        let report_out = temp.path().join("report.json");

        let output = std::process::Command::new(&bin)
            .arg("--config")
            .arg(dir.join("plateguard.toml"))
            .arg("check")
            .arg("--catalog")
            .arg(dir.join("catalog.json"))
            .arg("--report-out")
            .arg(&report_out)
            .output()
            .with_context(|| format!("run plateguard on fixture '{name}'"))?;

        if output.status.code() == Some(1) || !report_out.exists() {
            errors.push(format!(
                "{name}: tool error: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        let actual = normalize_nondeterministic(read_json(&report_out)?);
        let expected = normalize_nondeterministic(read_json(&dir.join("expected.report.json"))?);
        if actual == expected {
            println!("  ok {name}");
        } else {
            errors.push(format!("{name}: output differs from expected.report.json"));
        }
    }

    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("fixture check failed with {} errors", errors.len());
    }
    Ok(())
}

/// Every rule id and code must have a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    use plateguard_types::explain::{all_codes, all_rule_ids, lookup_explanation};

    let mut errors = Vec::new();
    for (kind, ids) in [("rule id", all_rule_ids()), ("code", all_codes())] {
        for id in ids {
            let Some(exp) = lookup_explanation(id) else {
                errors.push(format!("{kind} '{id}' has no explanation"));
                continue;
            };
            for (field, value) in [
                ("title", exp.title),
                ("description", exp.description),
                ("remediation", exp.remediation),
                ("examples.before", exp.examples.before),
                ("examples.after", exp.examples.after),
            ] {
                if value.trim().is_empty() {
                    errors.push(format!("{kind} '{id}' has empty {field}"));
                }
            }
        }
    }

    if errors.is_empty() {
        println!(
            "{} rule ids and {} codes have explanations",
            all_rule_ids().len(),
            all_codes().len()
        );
        return Ok(());
    }
    for error in &errors {
        eprintln!("  - {error}");
    }
    bail!("explain coverage failed with {} errors", errors.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help               Show this message");
    eprintln!("  emit-schemas       Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas   Check that schemas/ matches generated output (for CI)");
    eprintln!("  validate-fixtures  Validate fixture inputs and golden reports against schemas");
    eprintln!("  check-fixtures     Run the built CLI on fixtures and diff with golden reports");
    eprintln!("  explain-coverage   Check that every rule id and code is explained");
    eprintln!("  print-schema-ids   Print known schema IDs");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "validate-fixtures" => validate_fixtures(),
        "check-fixtures" => check_fixtures(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for target in schema_targets() {
                println!("{}", target.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
