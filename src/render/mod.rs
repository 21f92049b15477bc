//! Report rendering
//!
//! Per-level templates are precomputed once per option set; the printer then
//! substitutes runtime values while traversing the annotated tree.

pub mod options;
pub mod printer;
pub mod templates;

pub use options::RenderOptions;
pub use printer::Printer;
pub use templates::LevelTemplates;
