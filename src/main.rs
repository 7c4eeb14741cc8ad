use anyhow::Context;
use clap::{Parser, Subcommand};
use staff_roster::{cli, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Convert staff roster spreadsheets to JSON, reorder fields, and export back to Excel.")]
#[command(long_about = "Staff Roster - Excel ↔ JSON converter

COMMANDS:
  extract    - Excel roster files to one JSON file
  rearrange  - Put JSON fields in canonical order (Email before Phone Number)
  to-excel   - JSON to Excel (.xlsx)

EXTRACTION RULES:
  Columns C, D, E, F, H, I, J map to:
    Full Name, Phone Number, School Name, Designation - Level,
    Email, Region, District
  The first two rows are treated as headers.
  Processing of a file stops at the first empty row.

EXAMPLES:
  roster extract north.xlsx south.xlsx            # Combined JSON
  roster extract north.xlsx --rearrange --excel   # JSON + reordered JSON + .xlsx
  roster rearrange staff_data.json --excel
  roster to-excel staff_data.json -o staff.xlsx")]
#[command(version)]
struct Cli {
    /// Show diagnostic logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert one or more Excel roster files to a single JSON file.

Files are processed in the order given and their records concatenated.
A file with fewer than 10 columns is skipped with a warning; an unreadable
file is reported and skipped. Other files are still processed.

OUTPUT:
  staff_data_<YYYYMMDD_HHMMSS>.json              (or --output)
  rearranged_staff_data_<YYYYMMDD_HHMMSS>.json   (with --rearrange)
  <same stem>.xlsx                               (with --excel)")]
    /// Convert Excel roster files to JSON
    Extract {
        /// Excel files (.xlsx, .xlsm, .xls, .ods)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Path of the JSON file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for timestamped output files
        #[arg(short = 'd', long, env = "ROSTER_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Also write the records in canonical field order
        #[arg(short, long)]
        rearrange: bool,

        /// Also write an Excel file of the final records
        #[arg(short, long)]
        excel: bool,

        /// Print the first records
        #[arg(short, long)]
        preview: bool,
    },

    #[command(long_about = "Rearrange JSON records into the canonical field order:

  1. Full Name
  2. Email
  3. Phone Number
  4. School Name
  5. Designation - Level
  6. Region
  7. District

Missing fields are filled with empty strings; other fields are dropped.")]
    /// Rearrange JSON fields (Email before Phone Number)
    Rearrange {
        /// JSON file: an array of objects
        input: PathBuf,

        /// Path of the JSON file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for timestamped output files
        #[arg(short = 'd', long, env = "ROSTER_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Also write an Excel file
        #[arg(short, long)]
        excel: bool,

        /// Print the first records
        #[arg(short, long)]
        preview: bool,
    },

    /// Convert JSON records to an Excel file
    ToExcel {
        /// JSON file: an array of objects
        input: PathBuf,

        /// Path of the Excel file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for timestamped output files
        #[arg(short = 'd', long, env = "ROSTER_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Extract {
            files,
            output,
            output_dir,
            rearrange,
            excel,
            preview,
        } => {
            cli::extract(files, output, output_dir, rearrange, excel, preview)
                .context("extract failed")?;
        }

        Commands::Rearrange {
            input,
            output,
            output_dir,
            excel,
            preview,
        } => {
            cli::rearrange(input, output, output_dir, excel, preview)
                .context("rearrange failed")?;
        }

        Commands::ToExcel {
            input,
            output,
            output_dir,
        } => {
            cli::to_excel(input, output, output_dir).context("to-excel failed")?;
        }
    }

    Ok(())
}
