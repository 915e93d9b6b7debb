use crate::error::{PredictiveError, Result};
use crate::predictive::engine::check_interior;
use crate::predictive::{SummaryTable, TableRow, TestCharacteristics, input_label, percent_label};

/// Prevalences of the quick reference table, in percent.
pub const CANONICAL_PREVALENCES: [f64; 5] = [1.0, 5.0, 10.0, 20.0, 50.0];

pub fn validate_points(points: &[f64]) -> Result<()> {
    if points.is_empty() {
        return Err(PredictiveError::invalid("table needs at least one prevalence"));
    }
    for &p in points {
        check_interior("table prevalence", p)?;
    }
    if points.windows(2).any(|w| w[0] >= w[1]) {
        return Err(PredictiveError::invalid(
            "table prevalences must be strictly ascending",
        ));
    }
    Ok(())
}

pub fn sample_table(
    characteristics: &TestCharacteristics,
    points: &[f64],
) -> Result<SummaryTable> {
    validate_points(points)?;
    let mut rows = Vec::with_capacity(points.len());
    for &prevalence in points {
        let r = characteristics.evaluate(prevalence)?;
        rows.push(TableRow {
            prevalence,
            ppv: r.ppv,
            npv: r.npv,
            prevalence_label: input_label(prevalence),
            ppv_label: percent_label(r.ppv),
            npv_label: percent_label(r.npv),
        });
    }
    Ok(SummaryTable { rows })
}

pub fn sample_canonical_table(characteristics: &TestCharacteristics) -> Result<SummaryTable> {
    sample_table(characteristics, &CANONICAL_PREVALENCES)
}
