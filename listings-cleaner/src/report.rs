use std::collections::BTreeMap;

/// What a cleaning run did to the data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanReport {
    pub rows_read: usize,
    /// Rows removed by the coordinate filter.
    pub rows_dropped: usize,
    pub rows_written: usize,
    /// Missing cells per column, counted before any repair. Columns with none are omitted.
    pub missing_before_repair: BTreeMap<String, usize>,
    /// Non-empty date values that did not parse and were set to null.
    pub unparsed_dates: BTreeMap<String, usize>,
    /// Non-empty flag values that were neither `t` nor `f`.
    pub unmapped_booleans: BTreeMap<String, usize>,
}

impl CleanReport {
    pub fn total_missing_before_repair(&self) -> usize {
        self.missing_before_repair.values().sum()
    }
}
