pub mod amortization;
pub mod dates;

pub use amortization::{
    calculate_monthly_payment, close_out_final_period, compute_schedule, AmortizationCalculator,
};
pub use dates::add_months;
