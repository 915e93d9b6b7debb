use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::predictive::sample_table;

pub struct Stage3Table;

impl Stage3Table {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Table {
    fn name(&self) -> &'static str {
        "stage3_table"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.is_computable() {
            return Ok(());
        }
        let Some(characteristics) = ctx.characteristics else {
            return Ok(());
        };
        match sample_table(&characteristics, &ctx.table_points) {
            Ok(table) => {
                info!(rows = table.len(), "table_ready");
                ctx.table = Some(table);
            }
            Err(err) => ctx.mark_not_computable(err.to_string()),
        }
        Ok(())
    }
}
