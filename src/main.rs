use simple_charts::charts::keyed_measures;
use simple_charts::description::ChartsDescription;
use simple_charts::graph::fileio::read_csv_file;
use simple_charts::graph::graph::generate_graphics;
use simple_charts::graph::preprocess::{prepare_data, RawColumns};
use simple_charts::report::print_summaries;
use simple_charts::summarize;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;

use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the five-number summary of a measure per group
    Summary(#[clap(flatten)] SummaryArg),
    /// Derive the averaged tables the bar and line charts read
    Prepare(#[clap(flatten)] PrepareArg),
    /// Render the charts to SVG (and an HTML page)
    Render(#[clap(flatten)] RenderArg),
    /// Write the built-in chart description as JSON for editing
    Describe(#[clap(flatten)] DescribeArg),
}

#[derive(Debug, Clone, Args)]
struct SummaryArg {
    /// CSV file with a header row
    csv: PathBuf,
    /// Column holding the group key
    #[arg(long, default_value = "Platform")]
    group: String,
    /// Column holding the numeric measure
    #[arg(long, default_value = "Likes")]
    measure: String,
}

#[derive(Debug, Clone, Args)]
struct PrepareArg {
    /// Raw per-post CSV file
    raw_csv: PathBuf,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    #[arg(long, default_value = "Platform")]
    group: String,
    #[arg(long, default_value = "PostType")]
    subgroup: String,
    #[arg(long, default_value = "Date")]
    date: String,
    #[arg(long, default_value = "Likes")]
    measure: String,
}

#[derive(Debug, Clone, Args)]
struct RenderArg {
    /// JSON chart description; the three built-in charts when omitted
    #[arg(long)]
    description: Option<PathBuf>,
    /// Directory the description's data files are relative to
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct DescribeArg {
    /// Where to write the JSON description
    path: PathBuf,
}

fn run_summary(arg: &SummaryArg) -> Result<()> {
    let table = read_csv_file(&arg.csv)?;
    let points = keyed_measures(&table, &arg.group, &arg.measure)?;
    let summaries = summarize(&points, |p| p.0.clone(), |p| p.1)?;
    print_summaries(&format!("{} by {}", arg.measure, arg.group), &summaries);
    Ok(())
}

fn run_prepare(arg: &PrepareArg) -> Result<()> {
    let columns = RawColumns {
        group: arg.group.clone(),
        subgroup: arg.subgroup.clone(),
        date: arg.date.clone(),
        measure: arg.measure.clone(),
    };
    for path in prepare_data(&arg.raw_csv, &arg.out_dir, &columns)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_render(arg: &RenderArg) -> Result<()> {
    let description = match &arg.description {
        Some(path) => ChartsDescription::read(path)?,
        None => ChartsDescription::default(),
    };
    let written = generate_graphics(&description, &arg.data_dir, &arg.out_dir)?;
    info!("rendered {} files", written.len());
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summary(arg) => run_summary(&arg)?,
        Mode::Prepare(arg) => run_prepare(&arg)?,
        Mode::Render(arg) => run_render(&arg)?,
        Mode::Describe(arg) => ChartsDescription::default().write(&arg.path)?,
    }
    Ok(())
}
