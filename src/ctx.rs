use std::path::PathBuf;

use tracing::warn;

use crate::predictive::curve::CurveSpec;
use crate::predictive::{CANONICAL_PREVALENCES, Curve, SummaryTable, TestCharacteristics};
use crate::schema::v1::PredValV1;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub sensitivity: Option<f64>,
    pub specificity: Option<f64>,
    pub curve_spec: CurveSpec,
    pub table_points: Vec<f64>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub characteristics: Option<TestCharacteristics>,
    pub curve: Option<Curve>,
    pub table: Option<SummaryTable>,
    pub not_computable: Option<String>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: PredValV1,
}

impl Ctx {
    pub fn new(
        sensitivity: Option<f64>,
        specificity: Option<f64>,
        out_dir: PathBuf,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("predval.json");
        let tsv_path = out_dir.join("predval_curve.tsv");
        let report = PredValV1::empty(tool_version, sensitivity, specificity);
        Self {
            sensitivity,
            specificity,
            curve_spec: CurveSpec::default(),
            table_points: CANONICAL_PREVALENCES.to_vec(),
            write_json,
            write_tsv,
            characteristics: None,
            curve: None,
            table: None,
            not_computable: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }

    pub fn is_computable(&self) -> bool {
        self.not_computable.is_none() && self.characteristics.is_some()
    }

    /// Drops every computed result and records why nothing can be shown.
    pub fn mark_not_computable(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(reason = %reason, "inputs not computable");
        self.curve = None;
        self.table = None;
        self.warnings.push(reason.clone());
        self.not_computable = Some(reason);
    }
}
