use crate::core::{extract_files, reorder_records, ExtractionReport, Severity};
use crate::error::{RosterError, RosterResult};
use crate::excel::ExcelExporter;
use crate::json;
use crate::session::{MemorySession, SessionStore};
use crate::types::Record;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Number of records shown by `--preview`
pub const PREVIEW_LIMIT: usize = 5;

const STAFF_DATA: &str = "staff_data";
const REARRANGED_STAFF_DATA: &str = "rearranged_staff_data";

/// Generation timestamp used in output file names
fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// `<dir>/<stem>_<timestamp>.<ext>`
fn timestamped_path(dir: &Path, stem: &str, stamp: &str, ext: &str) -> PathBuf {
    dir.join(format!("{}_{}.{}", stem, stamp, ext))
}

fn print_report(report: &ExtractionReport) {
    for line in report.lines() {
        match line.severity {
            Severity::Success => println!("   {} {}", "✅".green(), line.text.green()),
            Severity::Info => println!("   {} {}", "ℹ️ ".cyan(), line.text.cyan()),
            Severity::Warning => println!("   {} {}", "⚠️ ".yellow(), line.text.yellow()),
            Severity::Error => println!("   {} {}", "❌".red(), line.text.red()),
        }
    }
}

fn print_preview(records: &[Record], limit: usize) -> RosterResult<()> {
    let shown = &records[..records.len().min(limit)];
    println!(
        "{}",
        format!("📋 Sample of converted data (first {} records):", shown.len()).cyan()
    );
    println!("{}\n", json::to_json_string(shown)?);
    Ok(())
}

fn load_json_input(input: &Path) -> RosterResult<Vec<Record>> {
    match json::load_records(input) {
        Ok(records) => {
            println!(
                "   {} JSON file loaded successfully with {} records",
                "✅".green(),
                records.len()
            );
            Ok(records)
        }
        Err(e) => {
            println!(
                "   {} {}",
                "❌".red(),
                format!("Error loading JSON file: {}", e).red()
            );
            Err(e)
        }
    }
}

fn write_json(path: &Path, records: &[Record], label: &str) -> RosterResult<()> {
    json::write_records(path, records)?;
    info!(path = %path.display(), records = records.len(), "wrote JSON");
    println!("   {} {}: {}", "💾".green(), label, path.display());
    Ok(())
}

fn write_excel(path: &Path, records: &[Record], label: &str) -> RosterResult<()> {
    ExcelExporter::new(records).export(path)?;
    info!(path = %path.display(), records = records.len(), "wrote workbook");
    println!("   {} {}: {}", "📊".green(), label, path.display());
    Ok(())
}

/// Execute the extract command: spreadsheets → JSON (optionally reordered / .xlsx)
///
/// Returns every file written, primary JSON first.
pub fn extract(
    files: Vec<PathBuf>,
    output: Option<PathBuf>,
    output_dir: PathBuf,
    rearrange: bool,
    excel: bool,
    preview: bool,
) -> RosterResult<Vec<PathBuf>> {
    println!("{}", "📖 Staff Roster - Excel to JSON".bold().green());
    println!("   {} files uploaded\n", files.len());

    let extraction = extract_files(&files);
    print_report(&extraction.report);
    println!();

    if extraction.records.is_empty() {
        println!(
            "{}",
            "❌ No data was converted. Please check the files and try again."
                .bold()
                .red()
        );
        return Err(RosterError::NoData(
            "no records were extracted from the input files".to_string(),
        ));
    }

    if preview {
        print_preview(&extraction.records, PREVIEW_LIMIT)?;
    }
    println!(
        "{}",
        format!(
            "✅ Successfully converted {} total records",
            extraction.records.len()
        )
        .bold()
        .green()
    );

    fs::create_dir_all(&output_dir)?;
    let stamp = timestamp();
    let mut written = Vec::new();

    let json_path =
        output.unwrap_or_else(|| timestamped_path(&output_dir, STAFF_DATA, &stamp, "json"));
    write_json(&json_path, &extraction.records, "JSON file")?;
    written.push(json_path);

    // Later stages pick the data up from the session, as an interactive shell would
    let mut session = MemorySession::new();
    session.set(extraction.records);

    let mut stem = STAFF_DATA;
    if rearrange {
        let rearranged = reorder_records(session.get().unwrap_or_default());
        debug!(records = rearranged.len(), "rearranged records");
        let path = timestamped_path(&output_dir, REARRANGED_STAFF_DATA, &stamp, "json");
        write_json(&path, &rearranged, "Rearranged JSON file")?;
        written.push(path);
        session.set(rearranged);
        stem = REARRANGED_STAFF_DATA;
    }

    if excel {
        let path = timestamped_path(&output_dir, stem, &stamp, "xlsx");
        write_excel(&path, session.get().unwrap_or_default(), "Excel file")?;
        written.push(path);
    }

    println!();
    Ok(written)
}

/// Execute the rearrange command: JSON → canonically ordered JSON (optionally .xlsx)
pub fn rearrange(
    input: PathBuf,
    output: Option<PathBuf>,
    output_dir: PathBuf,
    excel: bool,
    preview: bool,
) -> RosterResult<Vec<PathBuf>> {
    println!("{}", "🔀 Staff Roster - Rearrange JSON".bold().green());
    println!("   Input: {}\n", input.display());

    let records = load_json_input(&input)?;
    let rearranged = reorder_records(&records);

    if preview {
        print_preview(&rearranged, PREVIEW_LIMIT)?;
    }
    println!(
        "{}",
        format!("✅ Successfully rearranged {} records", rearranged.len())
            .bold()
            .green()
    );

    fs::create_dir_all(&output_dir)?;
    let stamp = timestamp();
    let mut written = Vec::new();

    let json_path = output.unwrap_or_else(|| {
        timestamped_path(&output_dir, REARRANGED_STAFF_DATA, &stamp, "json")
    });
    write_json(&json_path, &rearranged, "Rearranged JSON file")?;
    written.push(json_path);

    if excel {
        let path = timestamped_path(&output_dir, REARRANGED_STAFF_DATA, &stamp, "xlsx");
        write_excel(&path, &rearranged, "Rearranged Excel file")?;
        written.push(path);
    }

    println!();
    Ok(written)
}

/// Execute the to-excel command: JSON → .xlsx
pub fn to_excel(
    input: PathBuf,
    output: Option<PathBuf>,
    output_dir: PathBuf,
) -> RosterResult<PathBuf> {
    println!("{}", "📊 Staff Roster - JSON to Excel".bold().green());
    println!("   Input: {}\n", input.display());

    let records = load_json_input(&input)?;

    if records.is_empty() {
        println!("{}", "❌ No records to convert.".bold().red());
        return Err(RosterError::NoData(format!(
            "{} contains no records",
            input.display()
        )));
    }

    if let Some(first) = records.first() {
        println!("{}", "📋 Sample record preview:".cyan());
        println!("{}\n", json::to_json_string(std::slice::from_ref(first))?);
    }

    let path = match output {
        Some(path) => path,
        None => {
            fs::create_dir_all(&output_dir)?;
            timestamped_path(&output_dir, STAFF_DATA, &timestamp(), "xlsx")
        }
    };
    write_excel(&path, &records, "Excel file")?;

    println!();
    Ok(path)
}
