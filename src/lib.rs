pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod format;
pub mod planner;
pub mod schedule;
pub mod storage;
pub mod types;
pub mod views;

// re-export key types
pub use config::{PlannerConfig, TotalsMethod};
pub use decimal::{Money, Rate};
pub use errors::{PlannerError, Result};
pub use events::{Event, EventStore};
pub use format::{format_currency, format_grouped, parse_grouped};
pub use planner::Planner;
pub use schedule::{compute_schedule, AmortizationCalculator};
pub use storage::{FileStore, KeyValueStore, MemoryStore, PlanBook, PlanRepository};
pub use types::{CalculationResult, LoanRequest, PaymentScheduleEntry, PlanId, SavedPlan};
pub use views::{SavedPlanView, ScheduleView, SummaryView};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
