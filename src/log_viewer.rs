//! Daily log paging: keeps the selected log entry and its rendered sheet
//! on the same day.

use crate::cursor::DailyLogCursor;
use crate::error::{Result, ViewError};
use crate::trip::{DailyLogEntry, LogSheet, format_tenths};

/// Daily logs paired with their rendered sheets by position.
#[derive(Debug, Clone, PartialEq)]
pub struct LogViewer {
    logs: Vec<DailyLogEntry>,
    sheets: Vec<LogSheet>,
    cursor: DailyLogCursor,
}

impl LogViewer {
    /// Pairs logs with sheets. Both lists must have the same length.
    pub fn new(logs: Vec<DailyLogEntry>, sheets: Vec<LogSheet>) -> Result<Self> {
        if logs.len() != sheets.len() {
            return Err(ViewError::LogSheetMismatch {
                logs: logs.len(),
                sheets: sheets.len(),
            });
        }
        let cursor = DailyLogCursor::new(logs.len());
        Ok(Self {
            logs,
            sheets,
            cursor,
        })
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn cursor(&self) -> &DailyLogCursor {
        &self.cursor
    }

    pub fn previous(&mut self) {
        self.cursor.previous();
    }

    pub fn next(&mut self) {
        self.cursor.next();
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        self.cursor.select(index)
    }

    /// Previous/next controls are only shown for multi-day trips.
    pub fn shows_navigation(&self) -> bool {
        self.len() > 1
    }

    /// The selected day, or `None` when there are no logs.
    pub fn current(&self) -> Option<LogPage<'_>> {
        let index = self.cursor.index()?;
        Some(LogPage {
            index,
            total: self.len(),
            entry: self.logs.get(index)?,
            sheet: self.sheets.get(index)?,
        })
    }
}

/// One day's log entry and sheet, as displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogPage<'a> {
    pub index: usize,
    pub total: usize,
    pub entry: &'a DailyLogEntry,
    pub sheet: &'a LogSheet,
}

impl LogPage<'_> {
    pub fn title(&self) -> String {
        format!("Log {} of {}", self.index + 1, self.total)
    }

    pub fn day_label(&self) -> String {
        format!("Day {} of {}", self.index + 1, self.total)
    }

    pub fn download_file_name(&self) -> String {
        format!("eld-log-{}.png", self.entry.date)
    }

    pub fn stats(&self) -> LogStats {
        LogStats {
            driving_hours: format_tenths(self.entry.driving_hours),
            on_duty_hours: format_tenths(self.entry.on_duty_hours),
            off_duty_hours: format_tenths(self.entry.off_duty_hours),
            total_miles: format_tenths(self.entry.total_miles),
        }
    }
}

/// Display strings for a day's duty totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStats {
    pub driving_hours: String,
    pub on_duty_hours: String,
    pub off_duty_hours: String,
    pub total_miles: String,
}
