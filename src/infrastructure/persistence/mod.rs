//! PostgreSQL-backed repository implementations.

pub mod pg_badge_store;
pub mod pg_report_store;

pub use pg_badge_store::PgBadgeStore;
pub use pg_report_store::PgReportStore;
