//! Rendering utilities for human-facing surfaces (Markdown, item badges).

#![forbid(unsafe_code)]

mod badges;
mod markdown;
mod model;

pub use badges::render_badges;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableItem, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
