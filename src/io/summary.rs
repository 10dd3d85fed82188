use std::fmt::Write;

use anyhow::Result;

use crate::analysis::{CategoryCount, RegimenBox, SummaryRow, WeightVolume};
use crate::ctx::Ctx;
use crate::views::{RenderedView, View, ViewOptions, ViewOutput};

/// Display rounding for the correlation coefficient.
pub fn correlation_sentence(r: f64) -> String {
    format!(
        "The correlation between mouse weight and the average tumor volume is {:.2}",
        r
    )
}

pub fn format_view(rendered: &RenderedView) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", rendered.title)?;
    writeln!(out, "{}", "-".repeat(rendered.title.len()))?;
    match &rendered.output {
        ViewOutput::Summary(rows) => format_summary_table(&mut out, rows)?,
        ViewOutput::MicePerRegimen(counts) => format_counts(&mut out, counts, false)?,
        ViewOutput::SexDistribution(counts) => format_counts(&mut out, counts, true)?,
        ViewOutput::FinalVolume { rows, boxes } => {
            writeln!(out, "{} mice at their final timepoint", rows.len())?;
            format_boxes(&mut out, boxes)?;
        }
        ViewOutput::WeightVsVolume(wv) => format_regression(&mut out, wv)?,
    }
    Ok(out)
}

fn format_summary_table(out: &mut String, rows: &[SummaryRow]) -> Result<()> {
    let width = rows
        .iter()
        .map(|r| r.drug_regimen.len())
        .max()
        .unwrap_or(0)
        .max("Drug Regimen".len());
    writeln!(
        out,
        "{:<width$}  {:>17}  {:>19}  {:>21}  {:>22}  {:>22}",
        "Drug Regimen",
        "Mean Tumor Volume",
        "Median Tumor Volume",
        "Tumor Volume Variance",
        "Tumor Volume Std. Dev.",
        "Tumor Volume Std. Err.",
    )?;
    for r in rows {
        writeln!(
            out,
            "{:<width$}  {:>17.6}  {:>19.6}  {:>21.6}  {:>22.6}  {:>22.6}",
            r.drug_regimen, r.mean, r.median, r.variance, r.std_dev, r.std_err,
        )?;
    }
    Ok(())
}

fn format_counts(out: &mut String, counts: &[CategoryCount], with_share: bool) -> Result<()> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    for c in counts {
        if with_share {
            writeln!(
                out,
                "{}\t{}\t{:.1}%",
                c.label,
                c.count,
                100.0 * c.fraction_of(total)
            )?;
        } else {
            writeln!(out, "{}\t{}", c.label, c.count)?;
        }
    }
    Ok(())
}

fn format_boxes(out: &mut String, boxes: &[RegimenBox]) -> Result<()> {
    for b in boxes {
        match &b.stats {
            Some(s) => {
                write!(
                    out,
                    "{}\tn={}\tQ1={:.2}\tmedian={:.2}\tQ3={:.2}\tIQR={:.2}",
                    b.drug_regimen, s.n, s.q1, s.median, s.q3, s.iqr
                )?;
                if s.outliers.is_empty() {
                    writeln!(out, "\toutliers=none")?;
                } else {
                    let list: Vec<String> = s.outliers.iter().map(|v| format!("{:.2}", v)).collect();
                    writeln!(out, "\toutliers={}", list.join(","))?;
                }
            }
            None => writeln!(out, "{}\tn=0", b.drug_regimen)?,
        }
    }
    Ok(())
}

fn format_regression(out: &mut String, wv: &WeightVolume) -> Result<()> {
    writeln!(out, "{}", correlation_sentence(wv.correlation))?;
    writeln!(
        out,
        "y = {:.2}x + {:.2}  (r^2={:.2}, p={:.3e}, n={})",
        wv.fit.slope,
        wv.fit.intercept,
        wv.fit.r_squared(),
        wv.fit.p_value,
        wv.subjects.len()
    )?;
    writeln!(
        out,
        "Average tumor volume for {}: {:.2}",
        wv.drug_regimen, wv.mean_subject_volume
    )?;
    Ok(())
}

pub fn format_validate(ctx: &Ctx) -> String {
    let meta = &ctx.report.input_meta;
    let mut out = String::new();
    out.push_str(&format!("kira-tumorstudy v{}\n", env!("CARGO_PKG_VERSION")));
    out.push_str(&format!(
        "metadata: {} rows, results: {} rows\n",
        meta.metadata_rows, meta.result_rows
    ));
    out.push_str(&format!(
        "joined: {} rows, duplicates dropped: {}, kept: {}\n",
        meta.joined_rows, meta.duplicates_dropped, meta.kept_rows
    ));
    out.push_str(&format!("mice: {}\n", meta.subjects));
    out
}

pub fn format_view_list(opts: &ViewOptions) -> String {
    let mut out = String::new();
    for view in View::ALL {
        out.push_str(&format!("{}\t{}\n", view.key(), view.title(opts)));
    }
    out
}
