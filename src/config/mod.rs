//! Settings form module
//!
//! The form schema, the Arc Diem form itself, and the tooling around it:
//! validation, document rendering and parsing, and loading from disk.

pub mod arc_diem;
pub mod loader;
pub mod render;
pub mod schema;
pub mod validation;

pub use arc_diem::arc_diem_form;
pub use loader::{FormLoader, LoadResult, LoadWarning, LoaderOptions};
pub use render::FormFormat;
pub use schema::*;
pub use validation::{ValidationResult, Validator};
