use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::predictive::sample_curve_over;

pub struct Stage2Curve;

impl Stage2Curve {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Curve {
    fn name(&self) -> &'static str {
        "stage2_curve"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.is_computable() {
            return Ok(());
        }
        let Some(characteristics) = ctx.characteristics else {
            return Ok(());
        };
        match sample_curve_over(&characteristics, &ctx.curve_spec) {
            Ok(curve) => {
                info!(points = curve.len(), "curve_ready");
                ctx.curve = Some(curve);
            }
            Err(err) => ctx.mark_not_computable(err.to_string()),
        }
        Ok(())
    }
}
