use anyhow::Result;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_input;
pub mod stage2_curve;
pub mod stage3_table;
pub mod stage4_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Scaffold, input, curve, table and output stages in order.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_input::Stage1Input::new()),
            Box::new(stage2_curve::Stage2Curve::new()),
            Box::new(stage3_table::Stage3Table::new()),
            Box::new(stage4_output::Stage4Output::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            debug!(stage = stage.name(), "stage started");
            let outcome = stage.run(ctx);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            if let Err(err) = outcome {
                warn!(stage = stage.name(), elapsed_ms, error = %err, "stage failed");
                return Err(err);
            }
            info!(
                stage = stage.name(),
                elapsed_ms,
                computable = ctx.not_computable.is_none(),
                curve_points = ctx.curve.as_ref().map_or(0, |c| c.len()),
                table_rows = ctx.table.as_ref().map_or(0, |t| t.len()),
                "stage finished"
            );
        }
        Ok(())
    }
}
