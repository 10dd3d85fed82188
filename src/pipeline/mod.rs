use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_input;
pub mod stage2_merge;
pub mod stage3_views;
pub mod stage4_charts;
pub mod stage5_output;

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

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(stages = self.stages.len(), "pipeline started");
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}

/// Load, merge, compute the selected views and write every output.
pub fn full() -> Pipeline {
    Pipeline::new(vec![
        Box::new(stage0_scaffold::Stage0Scaffold::new()),
        Box::new(stage1_input::Stage1Input::new()),
        Box::new(stage2_merge::Stage2Merge::new()),
        Box::new(stage3_views::Stage3Views::new()),
        Box::new(stage4_charts::Stage4Charts::new()),
        Box::new(stage5_output::Stage5Output::new()),
    ])
}

/// Load and merge only.
pub fn load_only() -> Pipeline {
    Pipeline::new(vec![
        Box::new(stage1_input::Stage1Input::new()),
        Box::new(stage2_merge::Stage2Merge::new()),
    ])
}
