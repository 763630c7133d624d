//! Repository traits decoupling the domain from persistence.

pub mod badge_store;
pub mod report_store;

pub use badge_store::{BadgeStore, StoreError};
pub use report_store::ReportStore;

#[cfg(test)]
pub use badge_store::MockBadgeStore;
#[cfg(test)]
pub use report_store::MockReportStore;
