use serde::{Deserialize, Serialize};

pub use crate::predictive::TableRow;

use crate::predictive::Quantity;
use crate::predictive::curve::{
    CURVE_PREVALENCE_MAX, CURVE_PREVALENCE_MIN, DEFAULT_CURVE_SAMPLES,
};

pub const X_AXIS_TITLE: &str = "Disease Prevalence (%)";
pub const Y_AXIS_TITLE: &str = "Predictive Value (%)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    NotComputable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inputs {
    pub sensitivity: Option<f64>,
    pub specificity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveMeta {
    pub samples: usize,
    pub prevalence_min: f64,
    pub prevalence_max: f64,
    pub tsv_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    pub x_title: String,
    pub y_title: String,
    pub series: Vec<ChartSeries>,
}

impl Chart {
    pub fn predictive_values() -> Self {
        Self {
            x_title: X_AXIS_TITLE.to_string(),
            y_title: Y_AXIS_TITLE.to_string(),
            series: Quantity::ALL
                .iter()
                .map(|q| ChartSeries {
                    id: q.id().to_string(),
                    name: q.name().to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredValV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub status: Status,
    pub reason: Option<String>,
    pub inputs: Inputs,
    pub curve: CurveMeta,
    pub table: Vec<TableRow>,
    pub chart: Chart,
    pub warnings: Vec<String>,
}

impl PredValV1 {
    pub fn empty(tool_version: &str, sensitivity: Option<f64>, specificity: Option<f64>) -> Self {
        Self {
            tool: "kira-predval".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            status: Status::Ok,
            reason: None,
            inputs: Inputs {
                sensitivity,
                specificity,
            },
            curve: CurveMeta {
                samples: DEFAULT_CURVE_SAMPLES,
                prevalence_min: CURVE_PREVALENCE_MIN,
                prevalence_max: CURVE_PREVALENCE_MAX,
                tsv_path: None,
            },
            table: Vec::new(),
            chart: Chart::predictive_values(),
            warnings: Vec::new(),
        }
    }
}
