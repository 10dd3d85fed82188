use anyhow::Result;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::study::StudyData;

pub struct Stage2Merge;

impl Stage2Merge {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Merge {
    fn name(&self) -> &'static str {
        "stage2_merge"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let study = StudyData::new(&ctx.subjects, &ctx.observations);
        let stats = study.stats();

        ctx.warnings.extend(stats.warnings.iter().cloned());
        if !stats.unmatched_subjects.is_empty() {
            ctx.warnings.push(format!(
                "{} mouse id(s) in results have no metadata: {}",
                stats.unmatched_subjects.len(),
                stats.unmatched_subjects.join(", ")
            ));
        }

        let meta = &mut ctx.report.input_meta;
        meta.joined_rows = stats.joined_rows as u64;
        meta.duplicates_dropped = stats.duplicates_dropped as u64;
        meta.kept_rows = study.rows().len() as u64;
        meta.subjects = study.subject_count() as u64;
        meta.unmatched_subjects = stats.unmatched_subjects.clone();

        ctx.study = Some(study);
        Ok(())
    }
}
