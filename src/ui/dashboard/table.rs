//! Group table state and sort preservation
//!
//! Each alarm group renders from a `GroupTable`: the rows of the latest
//! snapshot plus per-column sort marks. The sort engine keeps the external
//! sortable-table contract: activating a header either sorts ascending or
//! reverses the current order, so a direct descending sort does not exist.
//! `apply_sort` hides that behind a direction argument, and `apply_snapshot`
//! re-asserts whatever order the viewer had chosen after the rows were
//! replaced wholesale.

use crate::alarms::{AlarmGroup, AlarmRecord};
use std::cmp::Ordering;

/// Fixed column count, data rows and placeholder alike.
pub const COLUMN_COUNT: usize = 9;

/// Column titles in render order. The leading marker column has no title.
pub const COLUMN_TITLES: [&str; COLUMN_COUNT] = [
    "",
    "PV",
    "Description",
    "Severity",
    "Message",
    "Time",
    "Value",
    "Current Severity",
    "Current Message",
];

/// Sort state of one header cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum HeaderMark {
    #[default]
    Unsorted,
    Sorted,
    SortedReverse,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Rendered body of a group table.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a> {
    /// Single centered row spanning all columns.
    Placeholder(String),
    Rows(&'a [AlarmRecord]),
}

/// Text content of one cell, also the sort key of its column.
pub fn cell_text(record: &AlarmRecord, column: usize) -> String {
    match column {
        0 => record.severity.marker().unwrap_or("").to_string(),
        1 => record.name.clone(),
        2 => record.description.clone(),
        3 => record.severity.to_string(),
        4 => record.message.clone(),
        5 => record.time.clone(),
        6 => record.value.clone(),
        7 => record.current_severity.to_string(),
        8 => record.current_message.clone(),
        _ => String::new(),
    }
}

/// All cells of one data row, in column order.
pub fn row_cells(record: &AlarmRecord) -> [String; COLUMN_COUNT] {
    std::array::from_fn(|column| cell_text(record, column))
}

/// Numeric-aware cell comparison: numbers compare as numbers, everything
/// else as strings.
fn cmp_cell_text(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// One alarm table: latest snapshot rows plus header sort marks.
#[derive(Debug, Clone)]
pub struct GroupTable {
    group: AlarmGroup,
    records: Vec<AlarmRecord>,
    marks: [HeaderMark; COLUMN_COUNT],
}

impl GroupTable {
    pub fn new(group: AlarmGroup) -> Self {
        Self {
            group,
            records: Vec::new(),
            marks: [HeaderMark::Unsorted; COLUMN_COUNT],
        }
    }

    pub fn group(&self) -> AlarmGroup {
        self.group
    }

    pub fn records(&self) -> &[AlarmRecord] {
        &self.records
    }

    pub fn mark(&self, column: usize) -> HeaderMark {
        self.marks[column]
    }

    /// Number of rows on screen: at least the placeholder.
    pub fn display_row_count(&self) -> usize {
        self.records.len().max(1)
    }

    pub fn body(&self) -> TableBody<'_> {
        if self.records.is_empty() {
            TableBody::Placeholder(format!("- There are no {} alarms -", self.group))
        } else {
            TableBody::Rows(&self.records)
        }
    }

    /// Header activation with external sort-library semantics: an unsorted
    /// column sorts ascending and becomes the only marked one; a marked
    /// column reverses the current row order and flips its mark.
    pub fn activate_header(&mut self, column: usize) {
        match self.marks[column] {
            HeaderMark::Sorted => {
                self.records.reverse();
                self.marks[column] = HeaderMark::SortedReverse;
            }
            HeaderMark::SortedReverse => {
                self.records.reverse();
                self.marks[column] = HeaderMark::Sorted;
            }
            HeaderMark::Unsorted => {
                // Stable sort: equal cells keep snapshot order.
                self.records
                    .sort_by(|a, b| cmp_cell_text(&cell_text(a, column), &cell_text(b, column)));
                self.marks = [HeaderMark::Unsorted; COLUMN_COUNT];
                self.marks[column] = HeaderMark::Sorted;
            }
        }
    }

    /// Direction-explicit sort. The underlying library only toggles, so
    /// descending is ascending plus one reversal; the workaround lives here
    /// and nowhere else. Returns the number of header activations issued.
    pub fn apply_sort(&mut self, column: usize, direction: SortDirection) -> usize {
        self.marks[column] = HeaderMark::Unsorted;
        self.activate_header(column);
        match direction {
            SortDirection::Ascending => 1,
            SortDirection::Descending => {
                self.activate_header(column);
                2
            }
        }
    }

    /// Replace all rows with a fresh snapshot, then re-assert the previous
    /// sort order. Rows were swapped wholesale, so any mark refers to stale
    /// ordering: clear it and re-activate (twice for reverse order, since
    /// activation of an unmarked header always sorts ascending). Returns the
    /// number of activations triggered.
    pub fn apply_snapshot(&mut self, records: Vec<AlarmRecord>) -> usize {
        self.records = records;
        let mut activations = 0;
        for column in 0..COLUMN_COUNT {
            match self.marks[column] {
                HeaderMark::Sorted => {
                    self.marks[column] = HeaderMark::Unsorted;
                    self.activate_header(column);
                    activations += 1;
                }
                HeaderMark::SortedReverse => {
                    self.marks[column] = HeaderMark::Unsorted;
                    self.activate_header(column);
                    self.activate_header(column);
                    activations += 2;
                }
                HeaderMark::Unsorted => {}
            }
        }
        activations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarms::Severity;

    fn record(name: &str, value: &str, severity: Severity) -> AlarmRecord {
        AlarmRecord {
            name: name.to_string(),
            description: format!("{} description", name),
            severity,
            message: "HIHI_ALARM".to_string(),
            time: "2024-03-05 09:07:13.201".to_string(),
            value: value.to_string(),
            current_severity: severity,
            current_message: "HIHI_ALARM".to_string(),
        }
    }

    fn names(table: &GroupTable) -> Vec<&str> {
        table.records().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    /// Empty or absent data renders exactly one placeholder row.
    fn test_empty_group_renders_placeholder() {
        let mut table = GroupTable::new(AlarmGroup::Active);
        table.apply_snapshot(vec![]);
        assert_eq!(table.display_row_count(), 1);
        assert_eq!(
            table.body(),
            TableBody::Placeholder("- There are no active alarms -".to_string())
        );

        let mut acked = GroupTable::new(AlarmGroup::Acknowledged);
        acked.apply_snapshot(vec![]);
        assert_eq!(
            acked.body(),
            TableBody::Placeholder("- There are no acknowledged alarms -".to_string())
        );
    }

    #[test]
    fn test_display_row_count_matches_records() {
        let mut table = GroupTable::new(AlarmGroup::Active);
        table.apply_snapshot(vec![
            record("PV1", "1", Severity::Minor),
            record("PV2", "2", Severity::Major),
        ]);
        assert_eq!(table.display_row_count(), 2);
        match table.body() {
            TableBody::Rows(rows) => assert_eq!(rows.len(), 2),
            TableBody::Placeholder(_) => panic!("expected rows"),
        }
    }

    #[test]
    /// Every data row has exactly the fixed column count.
    fn test_row_has_nine_columns() {
        let cells = row_cells(&record("PV1", "1", Severity::Major));
        assert_eq!(cells.len(), COLUMN_COUNT);
        assert_eq!(COLUMN_TITLES.len(), COLUMN_COUNT);
        assert_eq!(cells[1], "PV1");
        assert_eq!(cells[3], "MAJOR");
    }

    #[test]
    /// The marker cell is empty for OK and carries the glyph otherwise.
    fn test_marker_cell_content() {
        let ok = record("PV1", "1", Severity::Ok);
        assert_eq!(cell_text(&ok, 0), "");
        let major = record("PV2", "2", Severity::Major);
        assert_eq!(cell_text(&major, 0), "❌");
    }

    #[test]
    fn test_activate_header_sorts_then_reverses() {
        let mut table = GroupTable::new(AlarmGroup::Active);
        table.apply_snapshot(vec![
            record("PV3", "3", Severity::Minor),
            record("PV1", "1", Severity::Minor),
            record("PV2", "2", Severity::Minor),
        ]);

        table.activate_header(1);
        assert_eq!(names(&table), vec!["PV1", "PV2", "PV3"]);
        assert_eq!(table.mark(1), HeaderMark::Sorted);

        table.activate_header(1);
        assert_eq!(names(&table), vec!["PV3", "PV2", "PV1"]);
        assert_eq!(table.mark(1), HeaderMark::SortedReverse);

        table.activate_header(1);
        assert_eq!(names(&table), vec!["PV1", "PV2", "PV3"]);
        assert_eq!(table.mark(1), HeaderMark::Sorted);
    }

    #[test]
    /// Sorting one column clears the mark of any other.
    fn test_activation_clears_other_marks() {
        let mut table = GroupTable::new(AlarmGroup::Active);
        table.apply_snapshot(vec![
            record("PV2", "2", Severity::Minor),
            record("PV1", "1", Severity::Minor),
        ]);
        table.activate_header(1);
        table.activate_header(6);
        assert_eq!(table.mark(1), HeaderMark::Unsorted);
        assert_eq!(table.mark(6), HeaderMark::Sorted);
    }

    #[test]
    /// Value cells that parse as numbers compare numerically, not lexically.
    fn test_numeric_cells_sort_numerically() {
        let mut table = GroupTable::new(AlarmGroup::Active);
        table.apply_snapshot(vec![
            record("PV1", "10", Severity::Minor),
            record("PV2", "9", Severity::Minor),
        ]);
        table.activate_header(6);
        assert_eq!(names(&table), vec!["PV2", "PV1"]);
    }

    #[test]
    fn test_apply_sort_directions() {
        let mut table = GroupTable::new(AlarmGroup::Active);
        table.apply_snapshot(vec![
            record("PV2", "2", Severity::Minor),
            record("PV3", "3", Severity::Minor),
            record("PV1", "1", Severity::Minor),
        ]);

        let activations = table.apply_sort(1, SortDirection::Ascending);
        assert_eq!(activations, 1);
        assert_eq!(names(&table), vec!["PV1", "PV2", "PV3"]);
        assert_eq!(table.mark(1), HeaderMark::Sorted);

        let activations = table.apply_sort(1, SortDirection::Descending);
        assert_eq!(activations, 2);
        assert_eq!(names(&table), vec!["PV3", "PV2", "PV1"]);
        assert_eq!(table.mark(1), HeaderMark::SortedReverse);
    }

    #[test]
    /// Ascending mark on the old rows → exactly one resort of the new ones.
    fn test_apply_snapshot_restores_ascending_sort() {
        let mut table = GroupTable::new(AlarmGroup::Active);
        table.apply_snapshot(vec![record("PV1", "1", Severity::Minor)]);
        table.apply_sort(1, SortDirection::Ascending);

        let activations = table.apply_snapshot(vec![
            record("PV9", "9", Severity::Minor),
            record("PV4", "4", Severity::Minor),
        ]);
        assert_eq!(activations, 1);
        assert_eq!(names(&table), vec!["PV4", "PV9"]);
        assert_eq!(table.mark(1), HeaderMark::Sorted);
    }

    #[test]
    /// Descending mark → two activations (sort ascending, then reverse).
    fn test_apply_snapshot_restores_descending_sort() {
        let mut table = GroupTable::new(AlarmGroup::Active);
        table.apply_snapshot(vec![record("PV1", "1", Severity::Minor)]);
        table.apply_sort(1, SortDirection::Descending);

        let activations = table.apply_snapshot(vec![
            record("PV4", "4", Severity::Minor),
            record("PV9", "9", Severity::Minor),
        ]);
        assert_eq!(activations, 2);
        assert_eq!(names(&table), vec!["PV9", "PV4"]);
        assert_eq!(table.mark(1), HeaderMark::SortedReverse);
    }

    #[test]
    /// No marked header → no resort, rows stay in snapshot order.
    fn test_apply_snapshot_without_marks_keeps_order() {
        let mut table = GroupTable::new(AlarmGroup::Active);
        let activations = table.apply_snapshot(vec![
            record("PV9", "9", Severity::Minor),
            record("PV1", "1", Severity::Minor),
        ]);
        assert_eq!(activations, 0);
        assert_eq!(names(&table), vec!["PV9", "PV1"]);
    }
}
