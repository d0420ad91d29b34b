//! confgen-compiler
//!
//! This crate implements:
//!  1) A lenient XML reader + extraction of `<input-field>` records,
//!  2) A model builder (dedup by key, sorting, text normalization),
//!  3) Code generation (`render_constants` → `String`),
//!  4) A pipeline driver (`run`) wiring validate → parse → build → render → emit,
//!  5) Error types (`GenError`).

pub mod error;
pub mod idents;
pub mod parser;
pub mod model;
pub mod gen_php;
pub mod pipeline;

pub use error::GenError;
pub use gen_php::render_constants;
pub use gen_php::RenderOptions;
pub use model::SchemaModel;
pub use pipeline::run;
pub use pipeline::GenerateOutcome;
pub use pipeline::GenerateRequest;
