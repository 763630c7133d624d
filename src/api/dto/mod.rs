//! Request/response DTOs for the REST API.

pub mod badge;
pub mod health;
pub mod outlet;
