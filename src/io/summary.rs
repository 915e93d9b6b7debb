use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::predictive::{Quantity, input_label};

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let mut out = String::new();
    out.push_str(&format!("kira-predval v{}\n", version));
    out.push_str(&format!(
        "Based on Sensitivity: {} and Specificity: {}\n",
        optional_label(ctx.sensitivity),
        optional_label(ctx.specificity)
    ));

    if let Some(reason) = &ctx.not_computable {
        out.push_str(&format!("No result: {}\n", reason));
        return Ok(out);
    }

    let table = ctx.table.as_ref().context("summary table missing")?;
    out.push_str("Prevalence\tPPV\tNPV\n");
    for row in &table.rows {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            row.prevalence_label, row.ppv_label, row.npv_label
        ));
    }

    let curve = ctx.curve.as_ref().context("curve missing")?;
    if let (Some(first), Some(last)) = (curve.first(), curve.last()) {
        out.push_str(&format!(
            "Curve: {} points, prevalence {:.1}%..{:.1}%\n",
            curve.len(),
            first.prevalence,
            last.prevalence
        ));
        for q in Quantity::ALL {
            out.push_str(&format!(
                "{}: {} -> {}\n",
                q,
                q.hover_text(first),
                q.hover_text(last)
            ));
        }
    }

    Ok(out)
}

fn optional_label(value: Option<f64>) -> String {
    value.map(input_label).unwrap_or_else(|| "-".to_string())
}
