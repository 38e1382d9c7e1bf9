//! Payment split validator
//!
//! Custom payment terms divide the order amount into down-payment,
//! delivery-payment and acceptance-payment components. Their percentages
//! must sum to 100 within a configurable tolerance; absent components
//! count as 0. Prepayment and custom terms are mutually exclusive flags
//! (the model's setters clear the other side; this validator catches
//! records that arrive inconsistent anyway).

use crate::config::EngineConfig;
use crate::error::OrderError;
use crate::pricing::{to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::models::PaymentTerm;

/// Validate the three-way split of a payment term.
///
/// Only applies when `has_custom_terms` is set; standard and prepayment
/// terms always pass. On mismatch the error reports the offending sum.
pub fn validate_split(term: &PaymentTerm, tolerance: f64) -> Result<(), OrderError> {
    if term.is_prepayment && term.has_custom_terms {
        return Err(OrderError::PrepaymentConflict);
    }
    if !term.has_custom_terms {
        return Ok(());
    }

    let sum = to_decimal(term.down_payment_percent.unwrap_or(0.0))
        + to_decimal(term.delivery_payment_percent.unwrap_or(0.0))
        + to_decimal(term.acceptance_payment_percent.unwrap_or(0.0));
    let deviation = (sum - Decimal::ONE_HUNDRED).abs();

    if deviation > to_decimal(tolerance) {
        return Err(OrderError::SplitMismatch {
            sum: to_f64(sum),
            tolerance,
        });
    }
    Ok(())
}

/// Validate with the engine's configured tolerance
pub fn validate_split_with_config(
    term: &PaymentTerm,
    config: &EngineConfig,
) -> Result<(), OrderError> {
    validate_split(term, config.split_tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.01;

    fn custom_term(down: f64, delivery: f64, acceptance: f64) -> PaymentTerm {
        PaymentTerm {
            name: "custom".into(),
            has_custom_terms: true,
            down_payment_percent: Some(down),
            delivery_payment_percent: Some(delivery),
            acceptance_payment_percent: Some(acceptance),
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_exact_hundred() {
        assert!(validate_split(&custom_term(40.0, 30.0, 30.0), TOLERANCE).is_ok());
    }

    #[test]
    fn test_rejects_ninety_nine_and_reports_sum() {
        let err = validate_split(&custom_term(40.0, 30.0, 29.0), TOLERANCE).unwrap_err();
        assert_eq!(
            err,
            OrderError::SplitMismatch {
                sum: 99.0,
                tolerance: TOLERANCE
            }
        );
    }

    #[test]
    fn test_accepts_within_tolerance() {
        // 33.34 + 33.33 + 33.33 = 100.00
        assert!(validate_split(&custom_term(33.34, 33.33, 33.33), TOLERANCE).is_ok());
    }

    #[test]
    fn test_absent_components_count_as_zero() {
        let mut term = custom_term(60.0, 40.0, 0.0);
        term.acceptance_payment_percent = None;
        assert!(validate_split(&term, TOLERANCE).is_ok());

        let mut short = custom_term(60.0, 0.0, 0.0);
        short.delivery_payment_percent = None;
        short.acceptance_payment_percent = None;
        let err = validate_split(&short, TOLERANCE).unwrap_err();
        assert!(matches!(err, OrderError::SplitMismatch { sum, .. } if sum == 60.0));
    }

    #[test]
    fn test_standard_terms_always_pass() {
        let term = PaymentTerm {
            name: "net 30".into(),
            payment_days: Some(30),
            ..Default::default()
        };
        assert!(validate_split(&term, TOLERANCE).is_ok());
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        let mut term = custom_term(40.0, 30.0, 30.0);
        term.is_prepayment = true;
        assert_eq!(
            validate_split(&term, TOLERANCE),
            Err(OrderError::PrepaymentConflict)
        );
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let term = custom_term(40.0, 30.0, 29.5);
        assert!(validate_split(&term, TOLERANCE).is_err());
        assert!(validate_split(&term, 0.5).is_ok());
    }

    #[test]
    fn test_default_config_tolerance() {
        let config = EngineConfig::default();
        assert!(validate_split_with_config(&custom_term(33.34, 33.33, 33.33), &config).is_ok());
        assert!(validate_split_with_config(&custom_term(40.0, 30.0, 29.0), &config).is_err());
    }
}
