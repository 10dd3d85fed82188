//! SVG charts for the chart views.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::analysis::{CategoryCount, RegimenBox, WeightVolume};
use crate::views::{RenderedView, ViewOutput};

fn caption_font() -> FontDesc<'static> {
    ("sans-serif", 22).into_font()
}

/// Draws the chart for `rendered`; table-only views are a no-op.
pub fn draw_view(path: &Path, rendered: &RenderedView) -> Result<()> {
    match &rendered.output {
        ViewOutput::MicePerRegimen(counts) => draw_bar(path, &rendered.title, counts),
        ViewOutput::SexDistribution(counts) => draw_pie(path, &rendered.title, counts),
        ViewOutput::FinalVolume { boxes, .. } => draw_boxes(path, &rendered.title, boxes),
        ViewOutput::WeightVsVolume(wv) => draw_regression(path, &rendered.title, wv),
        ViewOutput::Summary(_) => Ok(()),
    }
}

fn segment_label(labels: &[String], v: &SegmentValue<u32>) -> String {
    match v {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

pub fn draw_bar(path: &Path, title: &str, counts: &[CategoryCount]) -> Result<()> {
    let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();
    let n = counts.len().max(1) as u32;
    let y_max = counts.iter().map(|c| c.count).max().unwrap_or(1).max(1) as f64 * 1.1;

    let root = SVGBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, caption_font())
        .margin(15)
        .x_label_area_size(110)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..n).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Drug Regimen")
        .y_desc("Number of Mice Tested")
        .x_labels(labels.len().max(1))
        .x_label_formatter(&|v| segment_label(&labels, v))
        .x_label_style(
            ("sans-serif", 13)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, c)| {
        let i = i as u32;
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), c.count as f64),
            ],
            BLUE.mix(0.8).filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    root.present()?;
    Ok(())
}

pub fn draw_pie(path: &Path, title: &str, counts: &[CategoryCount]) -> Result<()> {
    let total: usize = counts.iter().map(|c| c.count).sum();

    let root = SVGBackend::new(path, (700, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let area = root.titled(title, caption_font())?;
    let (w, h) = area.dim_in_pixel();
    let (cx, cy) = (w as f64 / 2.0, h as f64 / 2.0);
    let radius = w.min(h) as f64 * 0.35;
    let at = |angle: f64, r: f64| -> (i32, i32) {
        (
            (cx + r * angle.cos()).round() as i32,
            (cy - r * angle.sin()).round() as i32,
        )
    };

    // Counter-clockwise from 3 o'clock.
    let mut start = 0.0f64;
    for (i, c) in counts.iter().enumerate() {
        let fraction = c.fraction_of(total);
        if fraction <= 0.0 {
            continue;
        }
        let sweep = 2.0 * PI * fraction;
        let steps = ((sweep / (2.0 * PI)) * 180.0).ceil().max(2.0) as usize;
        let mut points = vec![at(0.0, 0.0)];
        for s in 0..=steps {
            points.push(at(start + sweep * s as f64 / steps as f64, radius));
        }
        area.draw(&Polygon::new(points, Palette99::pick(i).filled()))?;

        let mid = start + sweep / 2.0;
        let (px, py) = at(mid, radius * 0.6);
        area.draw(&Text::new(
            format!("{:.1}%", 100.0 * fraction),
            (px - 18, py - 7),
            ("sans-serif", 15).into_font().color(&BLACK),
        ))?;
        let (lx, ly) = at(mid, radius * 1.12);
        area.draw(&Text::new(
            c.label.clone(),
            (lx - 20, ly - 7),
            ("sans-serif", 16).into_font().color(&BLACK),
        ))?;
        start += sweep;
    }

    root.present()?;
    Ok(())
}

pub fn draw_boxes(path: &Path, title: &str, boxes: &[RegimenBox]) -> Result<()> {
    let labels: Vec<String> = boxes.iter().map(|b| b.drug_regimen.clone()).collect();
    let n = boxes.len().max(1) as u32;
    let all = boxes.iter().flat_map(|b| b.volumes.iter().copied());
    let (lo, hi) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let (lo, hi) = if lo.is_finite() { (lo, hi) } else { (0.0, 1.0) };
    let pad = ((hi - lo) * 0.08).max(1.0);

    let root = SVGBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, caption_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..n).into_segmented(), (lo - pad)..(hi + pad))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Drug Regimen")
        .y_desc("Final Tumor Volume (mm3)")
        .x_labels(labels.len().max(1))
        .x_label_formatter(&|v| segment_label(&labels, v))
        .draw()?;

    for (i, b) in boxes.iter().enumerate() {
        let Some(s) = &b.stats else {
            continue;
        };
        let i = i as u32;
        let span = |y0: f64, y1: f64, inset: u32| {
            let mut r = Rectangle::new(
                [(SegmentValue::Exact(i), y0), (SegmentValue::Exact(i + 1), y1)],
                BLACK.stroke_width(1),
            );
            r.set_margin(0, 0, inset, inset);
            r
        };
        chart.draw_series([
            span(s.q1, s.q3, 40),
            span(s.whisker_low, s.whisker_low, 60),
            span(s.whisker_high, s.whisker_high, 60),
        ])?;
        chart.draw_series(std::iter::once({
            let mut m = Rectangle::new(
                [
                    (SegmentValue::Exact(i), s.median),
                    (SegmentValue::Exact(i + 1), s.median),
                ],
                RGBColor(255, 127, 14).stroke_width(2),
            );
            m.set_margin(0, 0, 40, 40);
            m
        }))?;
        chart.draw_series([
            PathElement::new(
                vec![
                    (SegmentValue::CenterOf(i), s.whisker_low),
                    (SegmentValue::CenterOf(i), s.q1),
                ],
                BLACK,
            ),
            PathElement::new(
                vec![
                    (SegmentValue::CenterOf(i), s.q3),
                    (SegmentValue::CenterOf(i), s.whisker_high),
                ],
                BLACK,
            ),
        ])?;
        chart.draw_series(
            s.outliers
                .iter()
                .map(|v| Circle::new((SegmentValue::CenterOf(i), *v), 4, BLACK.stroke_width(1))),
        )?;
    }

    root.present()?;
    Ok(())
}

pub fn draw_regression(path: &Path, title: &str, wv: &WeightVolume) -> Result<()> {
    let xs = wv.weights();
    let ys = wv.volumes();
    let (x_lo, x_hi) = bounds(&xs);
    let (y_lo, y_hi) = bounds(&ys);
    let x_pad = ((x_hi - x_lo) * 0.08).max(0.5);
    let y_pad = ((y_hi - y_lo) * 0.08).max(0.5);

    let root = SVGBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((x_lo - x_pad)..(x_hi + x_pad), (y_lo - y_pad)..(y_hi + y_pad))?;

    chart
        .configure_mesh()
        .x_desc("Average Weight (g)")
        .y_desc("Average Tumor Volume (mm3)")
        .draw()?;

    chart.draw_series(
        xs.iter()
            .zip(&ys)
            .map(|(x, y)| Circle::new((*x, *y), 4, BLUE.filled())),
    )?;
    chart
        .draw_series(LineSeries::new(
            [x_lo, x_hi].into_iter().map(|x| (x, wv.fit.predict(x))),
            RED.stroke_width(2),
        ))?
        .label(format!(
            "y = {:.2}x + {:.2}, r = {:.2}",
            wv.fit.slope, wv.fit.intercept, wv.correlation
        ))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo.is_finite() { (lo, hi) } else { (0.0, 1.0) }
}
