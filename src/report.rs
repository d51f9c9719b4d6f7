/*!
 * Console summary for a generation run
 *
 * Prints the authoritative statistics computed from the scanned tree,
 * either as the plain `Statistics:` block or as a table rendered with the
 * tabled library.
 */

use std::time::Duration;

use clap::ValueEnum;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::stats::TreeStats;
use crate::utils::format_file_size;

/// Results of a generation run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to scan, render and write
    pub duration: Duration,
    /// Totals over the scanned tree
    pub stats: TreeStats,
}

/// Format of the report output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Indented `Statistics:` block
    #[default]
    Plain,
    /// Console table output
    Table,
}

/// Report generator for generation results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string based on run statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::Plain => self.generate_plain_report(report),
            ReportFormat::Table => self.create_summary_table(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn generate_plain_report(&self, report: &ScanReport) -> String {
        format!(
            "Statistics:\n  Files: {}\n  Directories: {}\n  Total Size: {}",
            report.stats.files,
            report.stats.directories,
            format_file_size(report.stats.total_size)
        )
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files".to_string(),
                value: report.stats.files.to_string(),
            },
            SummaryRow {
                key: "📁 Directories".to_string(),
                value: report.stats.directories.to_string(),
            },
            SummaryRow {
                key: "📦 Total Size".to_string(),
                value: format_file_size(report.stats.total_size),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        format!("Statistics:\n{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ScanReport {
        ScanReport {
            output_file: "directory/index.html".to_string(),
            duration: Duration::from_millis(12),
            stats: TreeStats {
                files: 2,
                directories: 1,
                total_size: 2010,
            },
        }
    }

    #[test]
    fn test_plain_report() {
        let text = Reporter::new(ReportFormat::Plain).generate_report(&report());
        assert_eq!(
            text,
            "Statistics:\n  Files: 2\n  Directories: 1\n  Total Size: 1.96 KB"
        );
    }

    #[test]
    fn test_table_report() {
        let text = Reporter::new(ReportFormat::Table).generate_report(&report());
        assert!(text.starts_with("Statistics:\n"));
        assert!(text.contains("Metric"));
        assert!(text.contains("directory/index.html"));
        assert!(text.contains("1.96 KB"));
        assert!(text.contains("📁 Directories"));
    }
}
