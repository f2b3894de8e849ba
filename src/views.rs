//! Display-ready views of calculations and saved plans.

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::format::{format_currency, format_rate, format_term};
use crate::types::{CalculationResult, PaymentScheduleEntry, PlanId, SavedPlan};

/// summary panel of a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub item_name: String,
    pub item_price: String,
    pub down_payment: String,
    pub financed_amount: String,
    pub interest_rate: String,
    pub term: String,
    pub monthly_payment: String,
    pub total_payment: String,
    pub total_interest: String,
}

impl SummaryView {
    pub fn from_result(result: &CalculationResult, config: &PlannerConfig) -> Self {
        let symbol = config.currency_symbol.as_str();
        SummaryView {
            item_name: result.item_name.clone(),
            item_price: format_currency(result.item_price.as_decimal(), symbol),
            down_payment: format_currency(result.down_payment.as_decimal(), symbol),
            financed_amount: format_currency(result.financed_amount.as_decimal(), symbol),
            interest_rate: format_rate(result.annual_rate),
            term: format_term(result.term_months),
            monthly_payment: format_currency(result.monthly_payment.as_decimal(), symbol),
            total_payment: format_currency(result.total_payment.as_decimal(), symbol),
            total_interest: format_currency(result.total_interest.as_decimal(), symbol),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// one row of the schedule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRowView {
    pub period_number: u32,
    pub due_date: String,
    pub payment: String,
    pub principal: String,
    pub interest: String,
    pub balance: String,
}

impl ScheduleRowView {
    pub fn from_entry(entry: &PaymentScheduleEntry, symbol: &str) -> Self {
        ScheduleRowView {
            period_number: entry.period_number,
            due_date: entry.due_date.format("%Y-%m-%d").to_string(),
            payment: format_currency(entry.payment_amount.as_decimal(), symbol),
            principal: format_currency(entry.principal_component.as_decimal(), symbol),
            interest: format_currency(entry.interest_component.as_decimal(), symbol),
            balance: format_currency(entry.remaining_balance.as_decimal(), symbol),
        }
    }
}

/// the schedule table with its item count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub item_count: String,
    pub rows: Vec<ScheduleRowView>,
}

impl ScheduleView {
    pub fn from_result(result: &CalculationResult, config: &PlannerConfig) -> Self {
        ScheduleView {
            item_count: schedule_count_label(result.schedule.len()),
            rows: result
                .schedule
                .iter()
                .map(|e| ScheduleRowView::from_entry(e, &config.currency_symbol))
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// card shown in the saved plans list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlanView {
    pub id: PlanId,
    pub item_name: String,
    pub item_price: String,
    pub down_payment: String,
    pub monthly_payment: String,
    pub term: String,
    pub saved_on: String,
}

impl SavedPlanView {
    pub fn from_plan(plan: &SavedPlan, config: &PlannerConfig) -> Self {
        let symbol = config.currency_symbol.as_str();
        let calc = &plan.calculation;
        SavedPlanView {
            id: plan.id,
            item_name: calc.item_name.clone(),
            item_price: format_currency(calc.item_price.as_decimal(), symbol),
            down_payment: format_currency(calc.down_payment.as_decimal(), symbol),
            monthly_payment: format_currency(calc.monthly_payment.as_decimal(), symbol),
            term: format_term(calc.term_months),
            saved_on: plan.saved_at.format("%Y-%m-%d").to_string(),
        }
    }
}

pub fn schedule_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

pub fn plan_count_label(count: usize) -> String {
    if count == 1 {
        "1 plan".to_string()
    } else {
        format!("{} plans", count)
    }
}
