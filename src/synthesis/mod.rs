//! Badge document synthesis.
//!
//! Pure and deterministic: `(selection, config, metadata)` in, one complete
//! self-contained HTML document out. Business rules live in
//! [`view_model`]; string assembly lives in [`document`]; logo resolution
//! in [`logo`].

pub mod document;
pub mod logo;
pub mod view_model;

pub use document::synthesize;
pub use view_model::{BadgeViewModel, SynthesisError, showcase_count};
