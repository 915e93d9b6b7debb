//! Predictive values of a binary diagnostic test.
//!
//! All quantities are on the percentage scale: sensitivity, specificity,
//! prevalence, PPV and NPV are values in `[0, 100]`, never probabilities in
//! `[0, 1]`.

pub mod curve;
pub mod engine;
pub mod example;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::error::{PredictiveError, Result};

pub use curve::{CurveSpec, linspace, sample_curve, sample_curve_over};
pub use engine::compute_predictive_values;
pub use table::{CANONICAL_PREVALENCES, sample_canonical_table, sample_table};

pub const DEFAULT_SENSITIVITY: f64 = 98.0;
pub const DEFAULT_SPECIFICITY: f64 = 85.0;

pub const PPV_FORMULA: &str = "PPV = (Sensitivity × Prevalence) / [(Sensitivity × Prevalence) + (100 - Specificity) × (100 - Prevalence)]";
pub const NPV_FORMULA: &str = "NPV = [Specificity × (100 - Prevalence)] / [(100 - Sensitivity) × Prevalence + Specificity × (100 - Prevalence)]";

/// Which predictive value a series or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Ppv,
    Npv,
}

impl Quantity {
    pub const ALL: [Quantity; 2] = [Quantity::Ppv, Quantity::Npv];

    pub fn id(self) -> &'static str {
        match self {
            Quantity::Ppv => "ppv",
            Quantity::Npv => "npv",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Ppv => "Positive Predictive Value (PPV)",
            Quantity::Npv => "Negative Predictive Value (NPV)",
        }
    }

    pub fn value_at(self, point: &CurvePoint) -> f64 {
        match self {
            Quantity::Ppv => point.ppv,
            Quantity::Npv => point.npv,
        }
    }

    /// Hover text for one chart point, values rounded to one decimal.
    pub fn hover_text(self, point: &CurvePoint) -> String {
        format!(
            "Prevalence: {:.1}%, {}: {:.1}%",
            point.prevalence,
            self,
            self.value_at(point)
        )
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Ppv => write!(f, "PPV"),
            Quantity::Npv => write!(f, "NPV"),
        }
    }
}

/// Sensitivity and specificity of a test, both validated percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestCharacteristics {
    sensitivity: f64,
    specificity: f64,
}

impl TestCharacteristics {
    pub fn new(sensitivity: f64, specificity: f64) -> Result<Self> {
        let sensitivity = engine::check_percentage("sensitivity", sensitivity)?;
        let specificity = engine::check_percentage("specificity", specificity)?;
        Ok(Self {
            sensitivity,
            specificity,
        })
    }

    /// Builds characteristics from possibly absent inputs. A missing value
    /// means the inputs are not yet computable.
    pub fn from_inputs(sensitivity: Option<f64>, specificity: Option<f64>) -> Result<Self> {
        let sensitivity =
            sensitivity.ok_or_else(|| PredictiveError::invalid("sensitivity is missing"))?;
        let specificity =
            specificity.ok_or_else(|| PredictiveError::invalid("specificity is missing"))?;
        Self::new(sensitivity, specificity)
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn specificity(&self) -> f64 {
        self.specificity
    }

    pub fn evaluate(&self, prevalence: f64) -> Result<PredictiveResult> {
        engine::predictive_values(self, prevalence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictiveResult {
    pub ppv: f64,
    pub npv: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub prevalence: f64,
    pub ppv: f64,
    pub npv: f64,
}

/// Predictive values over an ascending prevalence grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub points: Vec<CurvePoint>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prevalences(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.prevalence).collect()
    }

    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub prevalence: f64,
    pub ppv: f64,
    pub npv: f64,
    pub prevalence_label: String,
    pub ppv_label: String,
    pub npv_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub rows: Vec<TableRow>,
}

impl SummaryTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats an input percentage the way it was entered: `5%`, `97.5%`.
pub fn input_label(value: f64) -> String {
    let value = value + 0.0;
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{}%", value)
    }
}

/// Formats a computed percentage to one decimal: `25.6%`.
pub fn percent_label(value: f64) -> String {
    format!("{:.1}%", value + 0.0)
}
