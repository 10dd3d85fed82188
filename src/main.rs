use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_tumorstudy::cli::{Cli, Commands, InputArgs, OutputArgs};
use kira_tumorstudy::ctx::Ctx;
use kira_tumorstudy::io::summary;
use kira_tumorstudy::pipeline;
use kira_tumorstudy::views::{View, ViewOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::View(args) => {
            let mut ctx = build_ctx(args.input, args.output, vec![args.view.into()]);
            pipeline::full().run(&mut ctx)?;
            print_views(&ctx)?;
        }
        Commands::Report(args) => {
            let mut ctx = build_ctx(args.input, args.output, View::ALL.to_vec());
            pipeline::full().run(&mut ctx)?;
            print_views(&ctx)?;
        }
        Commands::Validate(input) => {
            let mut ctx = Ctx::new(
                input.metadata,
                input.results,
                std::path::PathBuf::from("."),
                Vec::new(),
                env!("CARGO_PKG_VERSION"),
            );
            ctx.write_charts = false;
            pipeline::load_only().run(&mut ctx)?;
            print!("{}", summary::format_validate(&ctx));
            print_warnings(&ctx);
        }
        Commands::Views => {
            print!("{}", summary::format_view_list(&ViewOptions::default()));
        }
    }

    Ok(())
}

fn build_ctx(input: InputArgs, output: OutputArgs, views: Vec<View>) -> Ctx {
    let mut ctx = Ctx::new(
        input.metadata,
        input.results,
        output.out,
        views,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.write_json = output.json;
    ctx.write_tsv = output.tsv;
    ctx.write_charts = !output.no_charts;
    ctx.options.regression_regimen = output.regimen;
    ctx
}

fn print_views(ctx: &Ctx) -> Result<()> {
    for (i, rendered) in ctx.rendered.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", summary::format_view(rendered)?);
    }
    if !ctx.charts.is_empty() {
        println!();
        println!("charts:");
        for path in &ctx.charts {
            println!("- {}", path.display());
        }
    }
    print_warnings(ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
