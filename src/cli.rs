use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::predictive::curve::{
    CURVE_PREVALENCE_MAX, CURVE_PREVALENCE_MIN, DEFAULT_CURVE_SAMPLES,
};
use crate::predictive::{DEFAULT_SENSITIVITY, DEFAULT_SPECIFICITY};

#[derive(Debug, Parser)]
#[command(
    name = "kira-predval",
    version,
    about = "Positive and negative predictive values across disease prevalence"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the prevalence curve and the quick reference table
    Run(RunArgs),
    /// Compute PPV and NPV at a single prevalence
    Point(PointArgs),
    /// Check test characteristics without computing anything
    Validate(ValidateArgs),
    /// Print the worked clinical example and the formulas
    Example,
}

#[derive(Debug, Args)]
pub struct TestArgs {
    #[arg(long, default_value_t = DEFAULT_SENSITIVITY, help = "Sensitivity (%)")]
    pub sensitivity: f64,

    #[arg(long, default_value_t = DEFAULT_SPECIFICITY, help = "Specificity (%)")]
    pub specificity: f64,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub test: TestArgs,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = DEFAULT_CURVE_SAMPLES, help = "Number of curve points")]
    pub samples: usize,

    #[arg(long, default_value_t = CURVE_PREVALENCE_MIN, help = "Lowest curve prevalence (%)")]
    pub prevalence_min: f64,

    #[arg(long, default_value_t = CURVE_PREVALENCE_MAX, help = "Highest curve prevalence (%)")]
    pub prevalence_max: f64,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Table prevalences (%), ascending [default: 1,5,10,20,50]"
    )]
    pub points: Option<Vec<f64>>,
}

#[derive(Debug, Args)]
pub struct PointArgs {
    #[command(flatten)]
    pub test: TestArgs,

    #[arg(long, help = "Prevalence (%)")]
    pub prevalence: f64,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub test: TestArgs,
}
