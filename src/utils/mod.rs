//! Shared utility functions.

pub mod derive_domain;

pub use derive_domain::derive_domain;
