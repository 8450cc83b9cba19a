//! CLI entry point for plateguard.
//!
//! This module is thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `plateguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use plateguard_app::{
    CheckInput, ExplainOutput, ItemOutcome, format_explanation, format_not_found,
    parse_report_json, render_badges, render_markdown, resolve_from_text, run_check,
    run_explain, run_food_check, run_recipe_check, runtime_error_report, to_renderable,
    verdict_exit_code, write_report, write_text,
};
use plateguard_settings::Overrides;
use plateguard_types::ALLERGEN_CATALOG;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "plateguard",
    version,
    about = "Dietary eligibility and allergen filtering for foods and recipes"
)]
struct Cli {
    /// Path to plateguard config TOML (a missing file means defaults).
    #[arg(long, default_value = "plateguard.toml", global = true)]
    config: Utf8PathBuf,

    /// Override profile (strict|warn|allergy_first).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override dietary preference (vegetarian|eggtarian|non-vegetarian).
    #[arg(long, global = true)]
    diet: Option<String>,

    /// Add an allergy label (repeatable).
    #[arg(long = "allergy", global = true)]
    allergies: Vec<String>,

    /// Override maximum findings to emit.
    #[arg(long, global = true)]
    max_findings: Option<u32>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a catalog and write artifacts.
    Check {
        /// Catalog JSON file (defaults to the built-in sample catalog).
        #[arg(long)]
        catalog: Option<Utf8PathBuf>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/plateguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/plateguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Decide a single food by its display name.
    Food {
        /// Food display name, e.g. "Cheese Quesadilla".
        name: String,

        /// Ingredient of the food (repeatable; recorded, not used for the decision).
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },

    /// Decide a single recipe by its ingredients and allergen tags.
    Recipe {
        /// Ingredient (repeatable).
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        /// Allergen tag declared on the recipe (repeatable).
        #[arg(long = "allergen")]
        allergens: Vec<String>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/plateguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Print one `[ok]`/`[!!]` badge line per item of an existing JSON report.
    Badges {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/plateguard/report.json")]
        report: Utf8PathBuf,
    },

    /// Explain a rule id or code with remediation guidance.
    Explain {
        /// The rule id (e.g., "allergen.ingredient") or code (e.g., "egg_food") to explain.
        identifier: String,
    },

    /// List the allergen labels users can pick from.
    Allergens,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match &cli.cmd {
        Commands::Check {
            catalog,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(
            &cli,
            catalog.as_deref(),
            report_out,
            *write_markdown,
            markdown_out,
        ),
        Commands::Food { name, ingredients } => cmd_food(&cli, name, ingredients),
        Commands::Recipe {
            ingredients,
            allergens,
        } => cmd_recipe(&cli, ingredients, allergens),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Badges { report } => cmd_badges(report),
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Allergens => {
            for label in ALLERGEN_CATALOG {
                println!("{label}");
            }
            Ok(())
        }
    }
}

/// Logs go to stderr; stdout is reserved for command output.
fn init_logging(default_level: &str) -> anyhow::Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directive) => EnvFilter::new(directive),
        Err(_) => EnvFilter::new(default_level),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        dietary_preference: cli.diet.clone(),
        allergies: cli.allergies.clone(),
        max_findings: cli.max_findings,
    }
}

/// Missing config file is allowed (defaults apply); any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "config file not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn cmd_check(
    cli: &Cli,
    catalog: Option<&Utf8Path>,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;

        let output = run_check(CheckInput {
            config_text: &cfg_text,
            overrides: overrides(cli),
            catalog_path: catalog,
        })?;

        write_report(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report(report_out, &report);
            eprintln!("plateguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_food(cli: &Cli, name: &str, ingredients: &[String]) -> anyhow::Result<()> {
    let resolved = resolve_from_text(&read_config(&cli.config)?, overrides(cli))?;
    let outcome = run_food_check(&resolved, name, ingredients);
    print_outcome(&outcome, name);
    exit_for(&outcome);
    Ok(())
}

fn cmd_recipe(cli: &Cli, ingredients: &[String], allergens: &[String]) -> anyhow::Result<()> {
    let resolved = resolve_from_text(&read_config(&cli.config)?, overrides(cli))?;
    let outcome = run_recipe_check(&resolved, ingredients, allergens);
    print_outcome(&outcome, "recipe");
    exit_for(&outcome);
    Ok(())
}

fn print_outcome(outcome: &ItemOutcome, label: &str) {
    if outcome.eligible {
        println!("eligible: {label}");
        return;
    }
    println!("not eligible: {label} (may not be safe for you)");
    for f in &outcome.findings {
        let sev = match f.severity {
            plateguard_types::Severity::Info => "info",
            plateguard_types::Severity::Warning => "warning",
            plateguard_types::Severity::Error => "error",
        };
        println!("  - [{sev}] {}/{}: {}", f.rule_id, f.code, f.message);
    }
}

fn exit_for(outcome: &ItemOutcome) {
    if !outcome.eligible {
        std::process::exit(2);
    }
}

fn read_report(report_path: &Utf8Path) -> anyhow::Result<plateguard_types::PlateguardReportV1> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    parse_report_json(&report_text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text(out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_badges(report_path: &Utf8Path) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    for line in render_badges(&to_renderable(&report)) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_rule_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
