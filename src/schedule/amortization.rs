use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use log::{debug, trace};
use rust_decimal::Decimal;

use crate::config::{PlannerConfig, TotalsMethod};
use crate::decimal::{Money, Rate};
use crate::errors::{PlannerError, Result};
use crate::schedule::dates::add_months;
use crate::types::{CalculationResult, LoanRequest, PaymentScheduleEntry};

/// equal-installment amortization calculator
#[derive(Debug, Clone)]
pub struct AmortizationCalculator {
    balance_tolerance: Money,
    totals_method: TotalsMethod,
}

impl Default for AmortizationCalculator {
    fn default() -> Self {
        Self::new(&PlannerConfig::default())
    }
}

impl AmortizationCalculator {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            balance_tolerance: config.balance_tolerance,
            totals_method: config.totals_method,
        }
    }

    /// compute the full schedule with payments due monthly after `start_date`
    pub fn compute_schedule(
        &self,
        request: &LoanRequest,
        start_date: NaiveDate,
    ) -> Result<CalculationResult> {
        let term_months = request.term_months;
        if term_months == 0 {
            return Err(PlannerError::InvalidTerm { term_months });
        }

        let financed_amount = request
            .financed_amount()
            .ok_or_else(|| overflow("financed amount"))?;
        let monthly_rate = request.annual_rate.monthly_rate();
        let monthly_payment = calculate_monthly_payment(financed_amount, monthly_rate, term_months)?;

        let (mut schedule, residual) = self.build_schedule(
            financed_amount,
            monthly_rate,
            monthly_payment,
            term_months,
            start_date,
        )?;
        close_out_final_period(&mut schedule, residual);

        let instalments = match self.totals_method {
            TotalsMethod::Theoretical => monthly_payment.checked_mul(Decimal::from(term_months)),
            TotalsMethod::ScheduleSum => schedule
                .iter()
                .try_fold(Money::ZERO, |acc, e| acc.checked_add(e.payment_amount)),
        };
        let total_payment = instalments
            .and_then(|sum| request.down_payment.checked_add(sum))
            .ok_or_else(|| overflow("total payment"))?;
        let total_interest = total_payment
            .checked_sub(request.item_price)
            .ok_or_else(|| overflow("total interest"))?;

        debug!(
            "computed {}-month schedule for {:?}: financed {}, monthly payment {}, residual {}",
            term_months, request.item_name, financed_amount, monthly_payment, residual
        );

        Ok(CalculationResult {
            item_name: request.item_name.clone(),
            item_price: request.item_price,
            down_payment: request.down_payment,
            annual_rate: request.annual_rate,
            term_months,
            start_date,
            financed_amount,
            monthly_payment,
            total_payment,
            total_interest,
            schedule,
        })
    }

    /// compute the schedule starting from today's date on the given clock
    pub fn compute_schedule_now(
        &self,
        request: &LoanRequest,
        time_provider: &SafeTimeProvider,
    ) -> Result<CalculationResult> {
        self.compute_schedule(request, time_provider.now().date_naive())
    }

    /// run the period loop, returning the entries and the unretired balance
    fn build_schedule(
        &self,
        financed_amount: Money,
        monthly_rate: Rate,
        monthly_payment: Money,
        term_months: u32,
        start_date: NaiveDate,
    ) -> Result<(Vec<PaymentScheduleEntry>, Money)> {
        let mut schedule = Vec::with_capacity(term_months as usize);
        let mut balance = financed_amount;

        for period_number in 1..=term_months {
            let due_date = add_months(start_date, period_number)?;
            let interest_component = balance
                .checked_mul(monthly_rate.as_decimal())
                .ok_or_else(|| overflow("period interest"))?;
            let principal_component = monthly_payment
                .checked_sub(interest_component)
                .ok_or_else(|| overflow("period principal"))?;
            balance = balance
                .checked_sub(principal_component)
                .ok_or_else(|| overflow("balance"))?;

            // the running balance keeps its noise, only the reported one snaps
            let remaining_balance = if balance.abs() < self.balance_tolerance {
                Money::ZERO
            } else {
                balance
            };

            trace!(
                "period {}: interest {}, principal {}, balance {}",
                period_number, interest_component, principal_component, balance
            );

            schedule.push(PaymentScheduleEntry {
                period_number,
                due_date,
                payment_amount: monthly_payment,
                principal_component,
                interest_component,
                remaining_balance,
            });
        }

        Ok((schedule, balance))
    }
}

/// compute a schedule with the default configuration
pub fn compute_schedule(request: &LoanRequest, start_date: NaiveDate) -> Result<CalculationResult> {
    AmortizationCalculator::default().compute_schedule(request, start_date)
}

/// fold the leftover balance into the last period so the schedule ends at zero
///
/// The residual may be positive or negative; it is added to both the final
/// payment and its principal component.
pub fn close_out_final_period(schedule: &mut [PaymentScheduleEntry], residual: Money) {
    if let Some(last) = schedule.last_mut() {
        last.payment_amount += residual;
        last.principal_component += residual;
        last.remaining_balance = Money::ZERO;
    }
}

/// constant monthly payment that retires `principal` in `months` periods
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), or P / n when r is zero.
pub fn calculate_monthly_payment(principal: Money, monthly_rate: Rate, months: u32) -> Result<Money> {
    if months == 0 {
        return Err(PlannerError::InvalidTerm { term_months: months });
    }

    if monthly_rate.is_zero() {
        return principal
            .checked_div(Decimal::from(months))
            .ok_or_else(|| overflow("straight-line payment"));
    }

    let r = monthly_rate.as_decimal();
    let compound = compound_factor(r, months)?;
    let denominator = compound - Decimal::ONE;
    if denominator.is_zero() {
        return Err(PlannerError::CalculationError {
            message: format!("annuity factor is zero for monthly rate {r} over {months} months"),
        });
    }

    let numerator = principal
        .as_decimal()
        .checked_mul(r)
        .and_then(|v| v.checked_mul(compound))
        .ok_or_else(|| overflow("payment numerator"))?;

    numerator
        .checked_div(denominator)
        .map(Money::from_decimal)
        .ok_or_else(|| overflow("payment"))
}

/// (1 + r)^n
fn compound_factor(r: Decimal, n: u32) -> Result<Decimal> {
    let base = Decimal::ONE
        .checked_add(r)
        .ok_or_else(|| overflow("compound base"))?;
    let mut compound = Decimal::ONE;
    for _ in 0..n {
        compound = compound
            .checked_mul(base)
            .ok_or_else(|| overflow("compound factor"))?;
    }
    Ok(compound)
}

fn overflow(what: &str) -> PlannerError {
    PlannerError::CalculationError {
        message: format!("{what} overflowed"),
    }
}
