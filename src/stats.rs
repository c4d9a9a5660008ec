use crate::chart;
use crate::results::{PageRecord, REPORT_COLUMNS};
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::Path;

/// Accumulates page records for a run and exports them
#[derive(Debug, Default)]
pub struct StatsCollector {
    reports: Vec<PageRecord>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. No deduplication.
    pub fn add_report(&mut self, report: PageRecord) {
        self.reports.push(report);
    }

    /// Records in insertion order
    pub fn reports(&self) -> &[PageRecord] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Write all records as CSV to `path`, header row first
    pub fn export_to_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let file = File::create(path.as_ref())?;
        self.write_csv(file)?;

        ::log::info!("Reports exported to {}", path.as_ref().display());
        Ok(())
    }

    /// Write all records as CSV to any writer
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), Box<dyn Error>> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(REPORT_COLUMNS)?;
        for report in &self.reports {
            writer.write_record(report.to_row()?)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Display a horizontal bar chart of word count per URL
    pub fn visualize_word_counts(&self) -> io::Result<()> {
        chart::show_word_counts(&self.reports)
    }
}
