use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use uuid::Uuid;

use super::header::Header;
use crate::note::identifier;

/// One level of memo indentation.
const INDENT: &str = "    ";

/// A memo line holding only this stands for an empty line.
const BLANK_LINE_MARKER: &str = ";";

/// A `* tag: title` item and the memo lines following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub id: Uuid,
    pub namespace: String,
    pub timestamp: i64,
    pub tag: String,
    pub title: String,
    pub memo: String,
}

impl Entry {
    fn new(header: &Header, tag: &str, title: &str) -> Self {
        Self {
            id: identifier(&header.namespace, header.timestamp, tag, title),
            namespace: header.namespace.clone(),
            timestamp: header.timestamp,
            tag: tag.to_string(),
            title: title.to_string(),
            memo: String::new(),
        }
    }
}

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*\*\s+(.+?):\s+(.+)$").unwrap())
}

/// Splits a body section into entries, one per marker line.
pub(crate) fn parse_body(section: &[String], header: &Header) -> Vec<Entry> {
    let mut entries = vec![];
    let mut current: Option<Entry> = None;

    for line in section {
        if let Some(caps) = marker_pattern().captures(line) {
            entries.extend(current.take());
            current = Some(Entry::new(header, &caps[1], &caps[2]));
        } else if let Some(entry) = current.as_mut() {
            entry.memo.push_str(memo_line(line));
            entry.memo.push('\n');
        } else {
            debug!("Line before any entry marker: {line:?}. ignoring...");
        }
    }
    entries.extend(current);

    entries
}

/// Removes one indentation level (four spaces or a tab) and maps `;` to an empty line.
pub(crate) fn memo_line(line: &str) -> &str {
    let line = line
        .strip_prefix(INDENT)
        .or_else(|| line.strip_prefix('\t'))
        .unwrap_or(line);
    if line == BLANK_LINE_MARKER {
        ""
    } else {
        line
    }
}
