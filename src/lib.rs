pub mod cli;
pub mod ctx;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod predictive;
pub mod schema;

pub use error::{PredictiveError, Result};
pub use predictive::{
    Curve, CurvePoint, PredictiveResult, Quantity, SummaryTable, TableRow, TestCharacteristics,
    compute_predictive_values, sample_curve, sample_table,
};
