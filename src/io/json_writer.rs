use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;
use crate::schema::v1::{CurveMeta, Inputs, PredValV1, Status};

pub fn build_report(ctx: &Ctx) -> Result<PredValV1> {
    let (status, reason, table) = match (&ctx.not_computable, &ctx.table) {
        (Some(reason), _) => (Status::NotComputable, Some(reason.clone()), Vec::new()),
        (None, Some(table)) => (Status::Ok, None, table.rows.clone()),
        (None, None) => bail!("summary table missing"),
    };

    let tsv_path = if ctx.write_tsv {
        Some(
            ctx.output
                .tsv_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        )
    } else {
        None
    };

    let curve = CurveMeta {
        samples: ctx.curve_spec.samples,
        prevalence_min: ctx.curve_spec.prevalence_min,
        prevalence_max: ctx.curve_spec.prevalence_max,
        tsv_path,
    };

    Ok(PredValV1 {
        tool: ctx.report.tool.clone(),
        version: ctx.report.version.clone(),
        schema_version: "v1".to_string(),
        status,
        reason,
        inputs: Inputs {
            sensitivity: ctx.sensitivity,
            specificity: ctx.specificity,
        },
        curve,
        table,
        chart: ctx.report.chart.clone(),
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
