//! HTTP request handlers.

pub mod badges;
pub mod embed;
pub mod health;
pub mod outlets;

pub use badges::{
    delete_badge_handler, discover_badge_handler, generate_badge_handler, get_badge_handler,
    list_badges_handler, regenerate_badge_handler,
};
pub use embed::{embed_script_handler, preview_handler};
pub use health::health_handler;
pub use outlets::catalog_handler;
