use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;

/// Writes the curve as `prevalence\tPPV\tNPV`. A run with nothing to display
/// produces the header alone.
pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "prevalence\tPPV\tNPV")?;

    if ctx.not_computable.is_some() {
        w.flush()?;
        return Ok(());
    }
    let curve = ctx.curve.as_ref().context("curve missing")?;

    for p in &curve.points {
        if p.ppv.is_nan() || p.npv.is_nan() {
            bail!("NaN encountered at prevalence {}", p.prevalence);
        }
        writeln!(w, "{:.6}\t{:.6}\t{:.6}", p.prevalence, p.ppv, p.npv)?;
    }
    w.flush()?;

    Ok(())
}
