use super::records::Record;

/// Names one of the four record fields for querying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Line,
    Period,
    Date,
    Punctuality,
}

impl Column {
    pub fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Column::Line => &record.line,
            Column::Period => &record.period,
            Column::Date => &record.date,
            Column::Punctuality => &record.punctuality,
        }
    }
}

/// A conjunction of exact-equality clauses over record fields.
///
/// `Selection::all()` matches every record, which is how the "both monthly and
/// yearly" choice is expressed without a special case at the call site.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    clauses: Vec<(Column, String)>,
}

impl Selection {
    /// The identity selection: no clauses, matches everything.
    pub fn all() -> Self {
        Selection::default()
    }

    /// Adds an exact-match clause. Matching is case-sensitive; values were
    /// already trimmed at load time.
    pub fn equals(mut self, column: Column, value: impl Into<String>) -> Self {
        self.clauses.push((column, value.into()));
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.clauses
            .iter()
            .all(|(column, value)| column.value(record) == value)
    }

    /// Returns the matching records in their original order. An empty result
    /// is an ordinary outcome, not an error.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Time granularity of the records to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Monthly,
    Yearly,
    Both,
}

impl Granularity {
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Monthly => "Monthly",
            Granularity::Yearly => "Yearly",
            Granularity::Both => "Both Monthly and Yearly",
        }
    }

    /// Narrows a selection to this granularity. `Both` leaves the selection
    /// untouched, so callers filter uniformly without branching.
    pub fn narrow(&self, selection: Selection) -> Selection {
        match self {
            Granularity::Monthly => selection.equals(Column::Period, "Month"),
            Granularity::Yearly => selection.equals(Column::Period, "Year"),
            Granularity::Both => selection,
        }
    }
}

/// Distinct values of one column in first-occurrence order.
pub fn distinct_values(records: &[Record], column: Column) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        let value = column.value(record);
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Records whose `column` equals `value` exactly, in their original order.
pub fn filter_equals(records: &[Record], column: Column, value: &str) -> Vec<Record> {
    Selection::all().equals(column, value).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str, period: &str, date: &str, punctuality: &str) -> Record {
        Record {
            line: line.to_string(),
            period: period.to_string(),
            date: date.to_string(),
            punctuality: punctuality.to_string(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("T1", "Month", "Jan 2024", "92.3%"),
            record("T1", "Year", "2024", "88.0%"),
            record("T2", "Month", "Jan 2024", "NA"),
            record("T1", "Month", "Feb 2024", "90.5%"),
        ]
    }

    #[test]
    fn test_distinct_values_first_occurrence_order() {
        let records = sample();
        assert_eq!(distinct_values(&records, Column::Line), vec!["T1", "T2"]);
        assert_eq!(
            distinct_values(&records, Column::Period),
            vec!["Month", "Year"]
        );
    }

    #[test]
    fn test_filter_equals_preserves_order() {
        let records = sample();
        let t1 = filter_equals(&records, Column::Line, "T1");
        assert_eq!(t1.len(), 3);
        assert_eq!(t1[0].date, "Jan 2024");
        assert_eq!(t1[1].date, "2024");
        assert_eq!(t1[2].date, "Feb 2024");
    }

    #[test]
    fn test_filter_equals_is_case_sensitive() {
        let records = sample();
        assert!(filter_equals(&records, Column::Line, "t1").is_empty());
    }

    #[test]
    fn test_filter_equals_idempotent() {
        let records = sample();
        let once = filter_equals(&records, Column::Line, "T1");
        let twice = filter_equals(&once, Column::Line, "T1");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_successive_filters_match_combined_selection() {
        let records = sample();
        let chained = filter_equals(
            &filter_equals(&records, Column::Line, "T1"),
            Column::Period,
            "Month",
        );
        let combined = Selection::all()
            .equals(Column::Line, "T1")
            .equals(Column::Period, "Month")
            .apply(&records);
        let swapped = Selection::all()
            .equals(Column::Period, "Month")
            .equals(Column::Line, "T1")
            .apply(&records);
        assert_eq!(chained, combined);
        assert_eq!(combined, swapped);
        assert_eq!(combined.len(), 2);
    }

    #[test]
    fn test_identity_selection_matches_everything() {
        let records = sample();
        assert_eq!(Selection::all().apply(&records), records);
    }

    #[test]
    fn test_granularity_narrowing() {
        let records = sample();
        let base = Selection::all().equals(Column::Line, "T1");
        let monthly = Granularity::Monthly.narrow(base.clone()).apply(&records);
        assert!(monthly.iter().all(|r| r.period == "Month"));
        assert_eq!(monthly.len(), 2);

        let both = Granularity::Both.narrow(base.clone()).apply(&records);
        assert_eq!(both, base.apply(&records));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let records = sample();
        assert!(filter_equals(&records, Column::Line, "T9").is_empty());
    }
}
