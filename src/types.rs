use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for a saved plan
pub type PlanId = Uuid;

/// loan parameters as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub item_name: String,
    pub item_price: Money,
    pub down_payment: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
}

impl LoanRequest {
    pub fn new(
        item_name: impl Into<String>,
        item_price: Money,
        down_payment: Money,
        annual_rate: Rate,
        term_months: u32,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            item_price,
            down_payment,
            annual_rate,
            term_months,
        }
    }

    /// principal being borrowed, None when the subtraction overflows
    pub fn financed_amount(&self) -> Option<Money> {
        self.item_price.checked_sub(self.down_payment)
    }
}

/// one period of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    pub period_number: u32,
    pub due_date: NaiveDate,
    pub payment_amount: Money,
    pub principal_component: Money,
    pub interest_component: Money,
    pub remaining_balance: Money,
}

/// summary totals and the full schedule for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub item_name: String,
    pub item_price: Money,
    pub down_payment: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub start_date: NaiveDate,
    pub financed_amount: Money,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub schedule: Vec<PaymentScheduleEntry>,
}

impl CalculationResult {
    /// get entry for a 1-based period number
    pub fn entry(&self, period_number: u32) -> Option<&PaymentScheduleEntry> {
        period_number
            .checked_sub(1)
            .and_then(|idx| self.schedule.get(idx as usize))
    }

    /// date of the last scheduled payment
    pub fn final_due_date(&self) -> Option<NaiveDate> {
        self.schedule.last().map(|e| e.due_date)
    }

    /// sum of the payments actually scheduled, including the close-out adjustment
    pub fn scheduled_payment_sum(&self) -> Money {
        self.schedule.iter().map(|e| e.payment_amount).sum()
    }

    /// sum of the scheduled interest components
    pub fn scheduled_interest_sum(&self) -> Money {
        self.schedule.iter().map(|e| e.interest_component).sum()
    }
}

/// a calculation the user chose to keep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: PlanId,
    pub saved_at: DateTime<Utc>,
    pub calculation: CalculationResult,
}

impl SavedPlan {
    pub fn new(calculation: CalculationResult, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            saved_at,
            calculation,
        }
    }
}
