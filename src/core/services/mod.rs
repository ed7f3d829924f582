pub mod budget_service;
pub mod client_service;
pub mod schedule_service;
pub mod scope_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use client_service::{ClientService, TaxProfile};
pub use schedule_service::ScheduleService;
pub use scope_service::ScopeService;
pub use summary_service::SummaryService;
