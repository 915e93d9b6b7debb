//! Worked clinical example: a test with 90% sensitivity and 85% specificity
//! applied to a population with 5% prevalence.

use crate::error::Result;
use crate::predictive::{PredictiveResult, TestCharacteristics, input_label};

pub const EXAMPLE_SENSITIVITY: f64 = 90.0;
pub const EXAMPLE_SPECIFICITY: f64 = 85.0;
pub const EXAMPLE_PREVALENCE: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct ClinicalExample {
    pub characteristics: TestCharacteristics,
    pub prevalence: f64,
    pub result: PredictiveResult,
}

impl ClinicalExample {
    pub fn lines(&self) -> Vec<String> {
        let ppv = format!("{:.0}%", self.result.ppv);
        let npv = format!("{:.0}%", self.result.npv);
        vec![
            "Consider a diagnostic test with:".to_string(),
            format!(
                "- {} sensitivity",
                input_label(self.characteristics.sensitivity())
            ),
            format!(
                "- {} specificity",
                input_label(self.characteristics.specificity())
            ),
            format!(
                "- {} disease prevalence in the population",
                input_label(self.prevalence)
            ),
            "Results:".to_string(),
            format!(
                "- PPV: {} - Only {} of positive test results would be correct",
                ppv, ppv
            ),
            format!(
                "- NPV: {} - {} of negative test results would be correct",
                npv, npv
            ),
        ]
    }
}

pub fn clinical_example() -> Result<ClinicalExample> {
    let characteristics = TestCharacteristics::new(EXAMPLE_SENSITIVITY, EXAMPLE_SPECIFICITY)?;
    let result = characteristics.evaluate(EXAMPLE_PREVALENCE)?;
    Ok(ClinicalExample {
        characteristics,
        prevalence: EXAMPLE_PREVALENCE,
        result,
    })
}
