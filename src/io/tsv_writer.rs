use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::analysis::{FinalObservationRow, SummaryRow, WeightVolume};
use crate::ctx::OutputPaths;
use crate::views::{RenderedView, ViewOutput};

fn create(path: &Path) -> Result<BufWriter<std::fs::File>> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

pub fn write_summary_tsv(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut w = create(path)?;
    writeln!(
        w,
        "Drug Regimen\tMean Tumor Volume\tMedian Tumor Volume\tTumor Volume Variance\tTumor Volume Std. Dev.\tTumor Volume Std. Err."
    )?;
    for r in rows {
        writeln!(
            w,
            "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            r.drug_regimen, r.mean, r.median, r.variance, r.std_dev, r.std_err
        )?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_final_volume_tsv(path: &Path, rows: &[FinalObservationRow]) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "Mouse ID\tDrug Regimen\tTimepoint\tTumor Volume (mm3)")?;
    for r in rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{:.6}",
            r.mouse_id, r.drug_regimen, r.timepoint, r.tumor_volume
        )?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_weight_volume_tsv(path: &Path, wv: &WeightVolume) -> Result<()> {
    let mut w = create(path)?;
    writeln!(
        w,
        "Mouse ID\tAverage Weight (g)\tAverage Tumor Volume (mm3)\tFitted Tumor Volume (mm3)"
    )?;
    for s in &wv.subjects {
        writeln!(
            w,
            "{}\t{:.6}\t{:.6}\t{:.6}",
            s.mouse_id,
            s.avg_weight_g,
            s.avg_tumor_volume,
            wv.fit.predict(s.avg_weight_g)
        )?;
    }
    w.flush()?;
    Ok(())
}

/// Writes the tabular part of a view. Chart-only views produce no file.
pub fn write_view_tsv(paths: &OutputPaths, rendered: &RenderedView) -> Result<Option<PathBuf>> {
    let path = match &rendered.output {
        ViewOutput::Summary(rows) => {
            let path = paths.tsv_path("summary");
            write_summary_tsv(&path, rows)?;
            path
        }
        ViewOutput::FinalVolume { rows, .. } => {
            let path = paths.tsv_path("final_volume");
            write_final_volume_tsv(&path, rows)?;
            path
        }
        ViewOutput::WeightVsVolume(wv) => {
            let path = paths.tsv_path("weight_vs_volume");
            write_weight_volume_tsv(&path, wv)?;
            path
        }
        ViewOutput::MicePerRegimen(_) | ViewOutput::SexDistribution(_) => return Ok(None),
    };
    Ok(Some(path))
}
