use anvil::cli;
use anvil::core::DEFAULT_STRAIN_THRESHOLD;
use anvil::error::AnvilResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anvil")]
#[command(about = "Compression test analysis for .xlsx test records")]
#[command(long_about = "Anvil - Compression test analysis

Reads a test-machine .xlsx record, derives the stress-strain curve and
computes maximum stress, compression modulus and absorbed energy.

COMMANDS:
  analyze - Full pipeline: curve, properties, embedded chart
  derive  - Stress/strain columns only

SHEET LAYOUT:
  The sheet is scanned for labels; each value lives two rows beneath its
  label. Inputs: 'Length, L', 'Width, W', 'Thickness, T' (scalars) and
  'Force', 'Stroke' (columns). Results land beneath 'Stress', 'Strain',
  'Maximum Stress, σc', 'Comp. Modulus, Ec' and the energy label.

EXAMPLES:
  anvil analyze specimen_07.xlsx                 # full analysis, 40% cutoff
  anvil analyze specimen_07.xlsx -t 35           # custom energy cutoff
  anvil derive specimen_07.xlsx                  # curve only")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Run the full analysis pipeline.

Stages run in order, each reloading and saving the workbook:
  1. Derive stress/strain and save an 'updated_'-prefixed copy
  2. Maximum stress (re-read from the written Stress column)
  3. Compression modulus (best-fit 50-sample window)
  4. Energy up to the strain cutoff (Simpson's rule)
  5. Stress-strain chart embedded at the anchor cell

The original file is never modified; stages 2-5 update the copy in place.
A failing stage leaves the results of the stages before it on disk.")]
    /// Run the full analysis pipeline
    Analyze {
        /// Path to the test record (.xlsx)
        file: PathBuf,

        /// Strain cutoff for the absorbed-energy integral, in percent
        #[arg(short, long, default_value_t = DEFAULT_STRAIN_THRESHOLD)]
        threshold: f64,

        /// Skip embedding the stress-strain chart
        #[arg(long)]
        no_chart: bool,

        /// Show verbose stage progress
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Derive the stress/strain columns only.

Reads specimen geometry and the Force/Stroke columns, computes
stress = force / (length * width) and strain = stroke / thickness * 100,
writes both beneath the 'Stress'/'Strain' labels and saves an
'updated_'-prefixed copy next to the original.")]
    /// Derive the stress/strain columns only
    Derive {
        /// Path to the test record (.xlsx)
        file: PathBuf,

        /// Show verbose stage progress
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> AnvilResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            threshold,
            no_chart,
            verbose,
        } => cli::analyze(file, threshold, no_chart, verbose),

        Commands::Derive { file, verbose } => cli::derive(file, verbose),
    }
}
