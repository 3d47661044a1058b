use serde::Serialize;
use std::path::Path;

/// Header line written by the upstream export; filtered out wherever it appears.
pub const HEADER: &str = "Line,Period,Date,Punctuality";

const SEPARATOR: char = ',';
const FIELD_COUNT: usize = 4;

/// One row of punctuality data, kept as text exactly as it appears in the
/// source file. Numeric interpretation of `punctuality` happens at plot time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    pub line: String,
    pub period: String,
    pub date: String,
    pub punctuality: String,
}

/// Reads a punctuality CSV and returns its records in file order.
///
/// Unreadable files are reported on stderr and yield an empty vec rather than
/// an error, so the caller can treat "no file" and "no rows" uniformly.
/// Rows with more than four fields are truncated to the first four; rows with
/// fewer, or with no separator at all, are skipped without a report. The
/// truncation is deliberate leniency for exports that append trailing columns.
pub fn load(path: &Path) -> Vec<Record> {
    let contents = match fs_err::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            return Vec::new();
        }
    };
    parse(&contents)
}

fn parse(contents: &str) -> Vec<Record> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != HEADER)
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Record> {
    if !line.contains(SEPARATOR) {
        return None;
    }
    let fields = line.split(SEPARATOR).collect::<Vec<&str>>();
    if fields.len() < FIELD_COUNT {
        return None;
    }
    Some(Record {
        line: fields[0].to_string(),
        period: fields[1].to_string(),
        date: fields[2].to_string(),
        punctuality: fields[3].to_string(),
    })
}
