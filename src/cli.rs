use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::ctx::{DEFAULT_METADATA_PATH, DEFAULT_RESULTS_PATH};
use crate::views::View;

#[derive(Debug, Parser)]
#[command(
    name = "kira-tumorstudy",
    version,
    about = "Cancer treatment study explorer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render one view
    View(ViewArgs),
    /// Render every view
    Report(ReportArgs),
    /// Load and merge the inputs without rendering
    Validate(InputArgs),
    /// List the available views
    Views,
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    #[arg(long, default_value = DEFAULT_METADATA_PATH, help = "Mouse metadata CSV/TSV (optionally .gz)")]
    pub metadata: PathBuf,

    #[arg(long, default_value = DEFAULT_RESULTS_PATH, help = "Study results CSV/TSV (optionally .gz)")]
    pub results: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    #[arg(long, default_value = "out")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Skip writing SVG charts")]
    pub no_charts: bool,

    #[arg(
        long,
        default_value = crate::analysis::DEFAULT_REGRESSION_REGIMEN,
        help = "Regimen for the weight vs. tumor volume regression"
    )]
    pub regimen: String,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    #[arg(long, value_enum)]
    pub view: ViewArg,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Summary,
    MicePerRegimen,
    SexDistribution,
    FinalVolume,
    WeightVsVolume,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Summary => View::Summary,
            ViewArg::MicePerRegimen => View::MicePerRegimen,
            ViewArg::SexDistribution => View::SexDistribution,
            ViewArg::FinalVolume => View::FinalVolume,
            ViewArg::WeightVsVolume => View::WeightVsVolume,
        }
    }
}
