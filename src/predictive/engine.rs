use crate::error::{PredictiveError, Result};
use crate::predictive::{PredictiveResult, Quantity, TestCharacteristics};

/// PPV and NPV for one prevalence.
///
/// Every input is a percentage in `[0, 100]`. Exact boundary prevalences are
/// accepted and computed when defined; a 0/0 case is reported as
/// [`PredictiveError::UndefinedValue`] instead of producing NaN.
pub fn compute_predictive_values(
    sensitivity: f64,
    specificity: f64,
    prevalence: f64,
) -> Result<PredictiveResult> {
    TestCharacteristics::new(sensitivity, specificity)?.evaluate(prevalence)
}

pub(crate) fn predictive_values(
    characteristics: &TestCharacteristics,
    prevalence: f64,
) -> Result<PredictiveResult> {
    let prev = check_percentage("prevalence", prevalence)?;
    let sens = characteristics.sensitivity();
    let spec = characteristics.specificity();

    let undefined = |quantity: Quantity| PredictiveError::UndefinedValue {
        quantity,
        sensitivity: sens,
        specificity: spec,
        prevalence: prev,
    };

    // Zero terms are decided from the inputs; the products may underflow.
    let no_true_pos = sens == 0.0 || prev == 0.0;
    let no_false_pos = spec == 100.0 || prev == 100.0;
    let no_false_neg = sens == 100.0 || prev == 0.0;
    let no_true_neg = spec == 0.0 || prev == 100.0;

    let ppv = match (no_true_pos, no_false_pos) {
        (true, true) => return Err(undefined(Quantity::Ppv)),
        (_, true) => 100.0,
        (true, false) => 0.0,
        (false, false) => {
            // Neither factor can be zero, so the product is never NaN.
            let fp_over_tp = ((100.0 - spec) / sens) * ((100.0 - prev) / prev);
            odds_to_percent(fp_over_tp)
        }
    };
    let npv = match (no_true_neg, no_false_neg) {
        (true, true) => return Err(undefined(Quantity::Npv)),
        (_, true) => 100.0,
        (true, false) => 0.0,
        (false, false) => {
            // The first factor is finite and non-zero, so the product is never NaN.
            let fn_over_tn = ((100.0 - sens) / (100.0 - prev)) * (prev / spec);
            odds_to_percent(fn_over_tn)
        }
    };

    Ok(PredictiveResult { ppv, npv })
}

// 100 * TP / (TP + FP) written as 100 / (1 + FP/TP). An infinite ratio gives 0.
fn odds_to_percent(wrong_over_right: f64) -> f64 {
    100.0 * (1.0 / (1.0 + wrong_over_right))
}

/// Validates a percentage and returns it with negative zero folded to `0.0`.
pub(crate) fn check_percentage(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(PredictiveError::invalid(format!(
            "{} must be a finite number, got {}",
            name, value
        )));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(PredictiveError::invalid(format!(
            "{} must be within [0, 100], got {}",
            name, value
        )));
    }
    Ok(value + 0.0)
}

pub(crate) fn check_interior(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value >= 100.0 {
        return Err(PredictiveError::invalid(format!(
            "{} must be strictly within (0, 100), got {}",
            name, value
        )));
    }
    Ok(())
}
