//! Core business entities.

pub mod badge;
pub mod outlet;
pub mod selection;

pub use badge::{Badge, BadgeConfig, BadgePatch, BadgeWebsite, InvalidConfig, Layout, LogoSize, NewBadge, Spacing};
pub use outlet::Outlet;
pub use selection::{MAX_SELECTION, MIN_SELECTION, Selection, SelectionStatus};
