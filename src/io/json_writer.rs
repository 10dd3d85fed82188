use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::CategoryCount;
use crate::ctx::Ctx;
use crate::schema::v1::{
    BoxSummary, CountEntry, FinalVolume, FinalVolumeRow, SubjectPoint, SummaryRow, TumorStudyV1,
    Views, WeightVolume,
};
use crate::views::ViewOutput;

fn count_entries(counts: &[CategoryCount]) -> Vec<CountEntry> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    counts
        .iter()
        .map(|c| CountEntry {
            label: c.label.clone(),
            count: c.count as u64,
            fraction: c.fraction_of(total),
        })
        .collect()
}

pub fn build_views(outputs: &[&ViewOutput]) -> Views {
    let mut views = Views::default();
    for output in outputs {
        match output {
            ViewOutput::Summary(rows) => {
                views.summary = Some(
                    rows.iter()
                        .map(|r| SummaryRow {
                            drug_regimen: r.drug_regimen.clone(),
                            n: r.count as u64,
                            mean: r.mean,
                            median: r.median,
                            variance: r.variance,
                            std_dev: r.std_dev,
                            std_err: r.std_err,
                        })
                        .collect(),
                );
            }
            ViewOutput::MicePerRegimen(counts) => {
                views.mice_per_regimen = Some(count_entries(counts));
            }
            ViewOutput::SexDistribution(counts) => {
                views.sex_distribution = Some(count_entries(counts));
            }
            ViewOutput::FinalVolume { rows, boxes } => {
                views.final_volume = Some(FinalVolume {
                    rows: rows
                        .iter()
                        .map(|r| FinalVolumeRow {
                            mouse_id: r.mouse_id.clone(),
                            drug_regimen: r.drug_regimen.clone(),
                            timepoint: r.timepoint,
                            tumor_volume: r.tumor_volume,
                        })
                        .collect(),
                    boxes: boxes
                        .iter()
                        .map(|b| BoxSummary {
                            drug_regimen: b.drug_regimen.clone(),
                            n: b.volumes.len() as u64,
                            q1: b.stats.as_ref().map(|s| s.q1),
                            median: b.stats.as_ref().map(|s| s.median),
                            q3: b.stats.as_ref().map(|s| s.q3),
                            whisker_low: b.stats.as_ref().map(|s| s.whisker_low),
                            whisker_high: b.stats.as_ref().map(|s| s.whisker_high),
                            outliers: b
                                .stats
                                .as_ref()
                                .map(|s| s.outliers.clone())
                                .unwrap_or_default(),
                        })
                        .collect(),
                });
            }
            ViewOutput::WeightVsVolume(wv) => {
                views.weight_vs_volume = Some(WeightVolume {
                    drug_regimen: wv.drug_regimen.clone(),
                    correlation: wv.correlation,
                    slope: wv.fit.slope,
                    intercept: wv.fit.intercept,
                    r_value: wv.fit.r_value,
                    p_value: wv.fit.p_value,
                    slope_stderr: wv.fit.slope_stderr,
                    intercept_stderr: wv.fit.intercept_stderr,
                    mean_subject_volume: wv.mean_subject_volume,
                    subjects: wv
                        .subjects
                        .iter()
                        .map(|s| SubjectPoint {
                            mouse_id: s.mouse_id.clone(),
                            avg_weight_g: s.avg_weight_g,
                            avg_tumor_volume: s.avg_tumor_volume,
                        })
                        .collect(),
                });
            }
        }
    }
    views
}

pub fn build_report(ctx: &Ctx) -> Result<TumorStudyV1> {
    let outputs: Vec<&ViewOutput> = ctx.rendered.iter().map(|r| &r.output).collect();
    let mut report = ctx.report.clone();
    report.views = build_views(&outputs);
    report.warnings = ctx.warnings.clone();
    Ok(report)
}

pub fn write_json(path: &Path, report: &TumorStudyV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
