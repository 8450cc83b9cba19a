//! Use case orchestration for plateguard.
//!
//! This crate is the application layer: use cases that coordinate the settings, catalog,
//! domain, and render layers. It stays thin and delegates the decisions to the domain.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod evaluate;
mod explain;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, resolve_from_text, run_check, verdict_exit_code};
pub use evaluate::{ItemOutcome, run_food_check, run_recipe_check};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_badges, render_markdown, write_report, write_text};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
