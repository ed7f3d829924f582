//! Record store, submission inputs, add notifications and seed data.

pub mod input;
pub mod notifications;
pub mod seed;
pub mod store;

pub use input::{CashFlowInput, ClientInput, ExpenseInput};
pub use notifications::{Notification, NotificationKind, NotificationLog, NotificationSink};
pub use seed::seeded_store;
pub use store::RecordStore;
