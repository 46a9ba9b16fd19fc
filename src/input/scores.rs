use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::GradeError;
use crate::input::Benchmark;

const SEPARATOR: &str = " = ";

/// Splits a `<metric> = <value>` line. Anything else yields `None`.
pub fn parse_line(line: &str) -> Option<(String, f64)> {
    let line = line.trim();
    let mut parts = line.split(SEPARATOR);
    let key = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let value = value.trim().parse::<f64>().ok()?;
    Some((key.to_string(), value))
}

pub fn parse_scores<R: BufRead>(mut reader: R) -> std::io::Result<BTreeMap<String, f64>> {
    let mut scores = BTreeMap::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        if let Some((key, value)) = parse_line(&buf) {
            scores.insert(key, value);
        }
    }
    Ok(scores)
}

pub fn read_score_file(
    benchmark: Benchmark,
    path: &Path,
) -> Result<BTreeMap<String, f64>, GradeError> {
    let unreadable = |source: std::io::Error| match source.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => GradeError::MissingScoreFile {
            benchmark,
            path: path.to_path_buf(),
        },
        _ => GradeError::ScoreFileUnreadable {
            benchmark,
            path: path.to_path_buf(),
            source,
        },
    };

    let file = File::open(path).map_err(unreadable)?;
    parse_scores(BufReader::new(file)).map_err(unreadable)
}
