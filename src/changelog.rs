mod entry;
mod header;
mod section;

use log::{debug, warn};

pub(crate) use entry::Entry;
pub(crate) use header::Header;
use section::Sections;

use crate::context::Timezone;

/// Accumulator threaded through the sections of a ChangeLog.
///
/// `header` is the most recently seen date/author line; body sections inherit
/// its namespace and timestamp.
#[derive(Debug, Default)]
pub(crate) struct ParseState {
    pub header: Header,
    pub entries: Vec<Entry>,
}

impl ParseState {
    pub fn step(mut self, section: &[String], timezone: Timezone) -> Self {
        if let Some(header) = Header::classify(section, timezone) {
            debug!("Header: {header:?}");
            self.header = header;
            return self;
        }

        let entries = entry::parse_body(section, &self.header);
        if entries.is_empty() {
            warn!(
                "Section starting with {:?} has no `* tag: title` line. its memo is discarded (use `;` for blank lines inside an entry)",
                section.first().map(String::as_str).unwrap_or_default()
            );
        }
        self.entries.extend(entries);
        self
    }
}

/// Parses a whole ChangeLog into its entries, in input order.
pub(crate) fn parse(text: &str, timezone: Timezone) -> Vec<Entry> {
    Sections::new(text.lines(), section::is_blank)
        .fold(ParseState::default(), |state, section| {
            state.step(&section, timezone)
        })
        .entries
}
