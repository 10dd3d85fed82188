use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::views;

pub struct Stage3Views;

impl Stage3Views {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Views {
    fn name(&self) -> &'static str {
        "stage3_views"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let study = ctx.study()?;
        let mut rendered = Vec::with_capacity(ctx.views.len());
        for &view in &ctx.views {
            let out = views::render(view, study, &ctx.options)
                .with_context(|| format!("view '{}' failed", view.key()))?;
            info!(view = view.key(), "view_computed");
            rendered.push(out);
        }
        ctx.rendered = rendered;
        Ok(())
    }
}
