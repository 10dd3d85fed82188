use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{metadata, results};
use crate::pipeline::Stage;

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
        info!(
            metadata = %ctx.metadata_path.display(),
            results = %ctx.results_path.display(),
            "input_files"
        );

        ctx.subjects = metadata::read_metadata(&ctx.metadata_path)?;
        ctx.observations = results::read_results(&ctx.results_path)?;

        ctx.report.input_meta.metadata_path = ctx.metadata_path.display().to_string();
        ctx.report.input_meta.results_path = ctx.results_path.display().to_string();
        ctx.report.input_meta.metadata_rows = ctx.subjects.len() as u64;
        ctx.report.input_meta.result_rows = ctx.observations.len() as u64;

        info!(
            subjects = ctx.subjects.len(),
            observations = ctx.observations.len(),
            "inputs_loaded"
        );
        Ok(())
    }
}
