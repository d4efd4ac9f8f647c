//! Subcommands and their execution

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use color_eyre::eyre::WrapErr;
use finmodel_core::export::{Sheet, sheet_table, to_json, write_csv};
use finmodel_core::{
    MonthlyProjection, ProjectionConfig, ScenarioType, aggregate_metrics, compare_scenarios, fiscal_year_summaries,
    infer_assumptions, run_projection, validate,
};
use jiff::civil::Date;

use crate::model_file::{ModelFile, load_history, load_model, to_yaml};
use crate::report;
use crate::util::io::atomic_write;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Project one scenario month by month
    Project(ProjectArgs),
    /// Compare the best, base and worst scenarios
    Compare(CompareArgs),
    /// Suggest assumptions from historical revenue and COGS
    Infer(InferArgs),
}

/// Run settings that override the model file's `projection:` section
#[derive(Args, Debug, Clone, Default)]
pub struct RunOverrides {
    /// Projection horizon in months (12-60)
    #[arg(short, long)]
    pub months: Option<u32>,

    /// First day of month 1, as YYYY-MM-DD
    #[arg(short, long)]
    pub start: Option<Date>,
}

impl RunOverrides {
    pub fn apply(&self, mut config: ProjectionConfig) -> ProjectionConfig {
        if let Some(months) = self.months {
            config.months = months;
        }
        if let Some(start) = self.start {
            config.start_date = Some(start);
        }
        config
    }
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Model file (.yaml, .yml or .json)
    pub file: PathBuf,

    #[command(flatten)]
    pub run: RunOverrides,

    /// Scenario to apply (base, best, worst, custom)
    #[arg(long)]
    pub scenario: Option<ScenarioType>,

    /// Write every column as CSV
    #[arg(long, value_name = "OUT")]
    pub csv: Option<PathBuf>,

    /// Write every column as JSON
    #[arg(long, value_name = "OUT")]
    pub json: Option<PathBuf>,

    /// Write the cash flow, income statement and key metrics sheets as CSV
    /// files into this directory
    #[arg(long, value_name = "DIR")]
    pub sheets: Option<PathBuf>,

    /// Also print fiscal-year totals
    #[arg(long)]
    pub annual: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Model file (.yaml, .yml or .json)
    pub file: PathBuf,

    #[command(flatten)]
    pub run: RunOverrides,
}

#[derive(Args, Debug, Clone)]
pub struct InferArgs {
    /// History file with `revenue` and `cogs` series
    pub file: PathBuf,
}

/// Execute a command, writing the report to `out`
pub fn execute(command: &Command, out: &mut dyn Write) -> color_eyre::Result<()> {
    match command {
        Command::Project(args) => project(args, out),
        Command::Compare(args) => compare(args, out),
        Command::Infer(args) => infer(args, out),
    }
}

fn load(path: &Path) -> color_eyre::Result<ModelFile> {
    load_model(path).wrap_err_with(|| format!("Failed to load model {}", path.display()))
}

fn project(args: &ProjectArgs, out: &mut dyn Write) -> color_eyre::Result<()> {
    let model = load(&args.file)?;
    let assumptions = validate(model.assumptions).wrap_err("Invalid assumptions")?;

    let mut config = args.run.apply(model.projection);
    if let Some(scenario) = args.scenario {
        config.scenario = scenario;
    }

    let projections =
        run_projection(&assumptions, &config).wrap_err("Projection could not be run")?;
    tracing::info!(
        file = %args.file.display(),
        scenario = %config.scenario,
        months = projections.len(),
        "projection complete"
    );

    writeln!(
        out,
        "{} scenario, {} months",
        config.scenario.label(),
        projections.len()
    )?;
    writeln!(out)?;
    write!(out, "{}", report::projection_table(&projections))?;

    if let Some(metrics) = aggregate_metrics(&projections) {
        writeln!(out)?;
        write!(out, "{}", report::metrics_summary(&metrics))?;
    }

    if args.annual {
        writeln!(out)?;
        write!(
            out,
            "{}",
            report::annual_table(&fiscal_year_summaries(&projections))
        )?;
    }

    if let Some(path) = &args.csv {
        let mut buf = Vec::new();
        write_csv(&projections, &mut buf).wrap_err("Failed to encode CSV")?;
        atomic_write(path, &buf)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote CSV export");
        writeln!(out, "\nWrote {}", path.display())?;
    }

    if let Some(path) = &args.json {
        let json = to_json(&projections).wrap_err("Failed to encode JSON")?;
        atomic_write(path, json.as_bytes())
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote JSON export");
        writeln!(out, "\nWrote {}", path.display())?;
    }

    if let Some(dir) = &args.sheets {
        write_sheets(dir, &projections)?;
        writeln!(out, "\nWrote {} sheets to {}", Sheet::ALL.len(), dir.display())?;
    }

    Ok(())
}

/// One CSV per standard sheet, named after the sheet
fn write_sheets(dir: &Path, projections: &[MonthlyProjection]) -> color_eyre::Result<()> {
    fs::create_dir_all(dir).wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
    for sheet in Sheet::ALL {
        let path = dir.join(format!("{}.csv", sheet.file_stem()));
        let mut buf = Vec::new();
        sheet_table(sheet, projections)
            .write_csv(&mut buf)
            .wrap_err_with(|| format!("Failed to encode {} sheet", sheet.name()))?;
        atomic_write(&path, &buf)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(sheet = sheet.name(), path = %path.display(), "wrote sheet export");
    }
    Ok(())
}

fn compare(args: &CompareArgs, out: &mut dyn Write) -> color_eyre::Result<()> {
    let model = load(&args.file)?;
    let assumptions = validate(model.assumptions).wrap_err("Invalid assumptions")?;
    let config = args.run.apply(model.projection);

    let comparison =
        compare_scenarios(&assumptions, &config).wrap_err("Scenario comparison failed")?;

    writeln!(out, "Scenario comparison, {} months", config.months)?;
    writeln!(out)?;
    write!(out, "{}", report::comparison_table(&comparison.summary()))?;
    Ok(())
}

fn infer(args: &InferArgs, out: &mut dyn Write) -> color_eyre::Result<()> {
    let history = load_history(&args.file)
        .wrap_err_with(|| format!("Failed to load history {}", args.file.display()))?;
    let inferred = infer_assumptions(&history);
    if inferred.is_empty() {
        tracing::warn!(file = %args.file.display(), "history too short to infer anything");
    }

    let model = ModelFile {
        assumptions: inferred.apply(Default::default()),
        projection: ProjectionConfig::default(),
    };
    write!(out, "{}", to_yaml(&model)?)?;
    Ok(())
}
