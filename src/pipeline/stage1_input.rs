use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::predictive::TestCharacteristics;

/// Validates the test characteristics. Bad or missing values only mean there
/// is nothing to display.
pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        match TestCharacteristics::from_inputs(ctx.sensitivity, ctx.specificity) {
            Ok(characteristics) => {
                info!(
                    sensitivity = characteristics.sensitivity(),
                    specificity = characteristics.specificity(),
                    "characteristics_ready"
                );
                ctx.characteristics = Some(characteristics);
            }
            Err(err) => ctx.mark_not_computable(err.to_string()),
        }
        Ok(())
    }
}
