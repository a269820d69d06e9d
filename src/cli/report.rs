//! CLI commands for reports

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::display::format_category_card;
use crate::error::{BudgetBookError, BudgetBookResult};
use crate::reports::MonthlyReport;
use crate::storage::Storage;

/// Export formats for reports
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Generate the spending-vs-budget report for a month
    #[command(alias = "month")]
    Monthly {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Export to a file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (with --output)
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },

    /// Show per-category dashboard cards for a month
    Cards {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a report subcommand
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> BudgetBookResult<()> {
    match cmd {
        ReportCommands::Monthly {
            month,
            output,
            format,
        } => {
            let month = super::parse_month(month.as_deref())?;
            let report = MonthlyReport::generate(storage, month)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        BudgetBookError::Export(format!(
                            "Failed to create {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let writer = BufWriter::new(file);

                    match format {
                        ExportFormat::Csv => report.export_csv(writer)?,
                        ExportFormat::Json => report.export_json(writer)?,
                    }

                    println!("Report for {} written to {}", month, path.display());
                }
                None => {
                    print!("{}", report.format_terminal());
                }
            }
        }
        ReportCommands::Cards { month } => {
            let month = super::parse_month(month.as_deref())?;
            let report = MonthlyReport::generate(storage, month)?;

            if report.report_data.is_empty() {
                println!("No categories yet. Create your first category with 'budgetbook category add'.");
                return Ok(());
            }

            println!("{}\n", month);
            for row in &report.report_data {
                println!("{}", format_category_card(row));
            }

            for warning in &report.warnings {
                println!("warning: {}", warning);
            }
        }
    }

    Ok(())
}
