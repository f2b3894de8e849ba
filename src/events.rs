use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::PlanId;

/// notifications raised by the planner for a UI to surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ScheduleCalculated {
        item_name: String,
        monthly_payment: Money,
        term_months: u32,
    },
    CalculationReset,
    PlanSaved {
        plan_id: PlanId,
        item_name: String,
        timestamp: DateTime<Utc>,
    },
    PlanDeleted {
        plan_id: PlanId,
    },
}

impl Event {
    /// short user-facing message
    pub fn message(&self) -> &'static str {
        match self {
            Event::ScheduleCalculated { .. } => "Payment schedule calculated",
            Event::CalculationReset => "Calculation cleared",
            Event::PlanSaved { .. } => "Plan saved successfully!",
            Event::PlanDeleted { .. } => "Plan deleted successfully!",
        }
    }
}

/// event store for collecting events during operations. nothing is dropped until
/// `take_events`
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
