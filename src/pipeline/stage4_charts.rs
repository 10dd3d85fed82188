use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::svg;
use crate::pipeline::Stage;

pub struct Stage4Charts;

impl Stage4Charts {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Charts {
    fn name(&self) -> &'static str {
        "stage4_charts"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.write_charts {
            return Ok(());
        }
        let mut charts = Vec::new();
        for rendered in &ctx.rendered {
            let Some(stem) = rendered.view.entry().chart else {
                continue;
            };
            let path = ctx.output.chart_path(stem);
            svg::draw_view(&path, rendered)?;
            info!(view = rendered.view.key(), path = %path.display(), "chart_written");
            charts.push(path);
        }
        ctx.report.charts = charts
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect();
        ctx.charts = charts;
        Ok(())
    }
}
