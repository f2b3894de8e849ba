//! Display formatting for amounts, rates and terms.
//!
//! Amounts use the South-Asian digit grouping: the last three integer digits
//! form one group and every two digits to their left form another, so
//! `1234567.5` renders as `12,34,567.50`.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::decimal::Rate;
use crate::errors::{PlannerError, Result};

/// format with two fraction digits and south-asian grouping
pub fn format_grouped(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;

    let fixed = format!("{:.2}", rounded.abs());
    let (integer_part, fraction_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + integer_part.len() / 2 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_integer_digits(integer_part));
    out.push('.');
    out.push_str(fraction_part);
    out
}

/// prefix a grouped amount with a currency glyph
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, format_grouped(amount))
}

/// annual rate as a percentage with two decimals, e.g. 12.00%
pub fn format_rate(rate: Rate) -> String {
    let percent = rate
        .as_percentage()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", percent)
}

pub fn format_term(months: u32) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{} months", months)
    }
}

/// parse a grouped amount such as `-12,34,567.50` back into a decimal
pub fn parse_grouped(input: &str) -> Result<Decimal> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() || cleaned.chars().any(char::is_whitespace) {
        return Err(PlannerError::InvalidAmount {
            input: input.to_string(),
        });
    }

    Decimal::from_str(&cleaned).map_err(|_| PlannerError::InvalidAmount {
        input: input.to_string(),
    })
}

/// parse an amount that may carry a currency glyph in front
pub fn parse_currency(input: &str, symbol: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    let unprefixed = if symbol.is_empty() {
        trimmed
    } else {
        trimmed.strip_prefix(symbol).unwrap_or(trimmed)
    };
    parse_grouped(unprefixed)
}

fn group_integer_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + head.len() / 2 + 1);

    // leading group holds one digit when the head has an odd length
    let mut idx = head.len() % 2;
    if idx == 1 {
        out.push_str(&head[..1]);
    }
    while idx < head.len() {
        if !out.is_empty() {
            out.push(',');
        }
        out.push_str(&head[idx..idx + 2]);
        idx += 2;
    }

    out.push(',');
    out.push_str(last_three);
    out
}
