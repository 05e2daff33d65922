use serde::Serialize;
use uuid::Uuid;

use crate::changelog::Entry;

pub(crate) const NOTEBOOK_NAME: &str = "ChangeLog Memo";
pub(crate) const NOTEBOOK_UUID: &str = "clmemo";

/// Derives the note identifier of an entry.
///
/// The name hashed into the UUID (v3, URL namespace) is
/// `https://{namespace}/{timestamp}/{tag}/{title}/`; notes written by earlier
/// runs keep their identifiers as long as this string does not change.
pub(crate) fn identifier(namespace: &str, timestamp: i64, tag: &str, title: &str) -> Uuid {
    let name = format!("https://{namespace}/{timestamp}/{tag}/{title}/");
    Uuid::new_v3(&Uuid::NAMESPACE_URL, name.as_bytes())
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct NotebookMetadata {
    pub name: &'static str,
    pub uuid: &'static str,
}

impl Default for NotebookMetadata {
    fn default() -> Self {
        Self {
            name: NOTEBOOK_NAME,
            uuid: NOTEBOOK_UUID,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct NoteMetadata {
    pub created_at: i64,
    pub tags: Vec<String>,
    pub title: String,
    pub updated_at: i64,
    pub uuid: Uuid,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CellType {
    Note,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cell {
    #[serde(rename = "type")]
    pub cell_type: CellType,
    pub data: String,
}

impl Cell {
    pub fn note(data: String) -> Self {
        Self {
            cell_type: CellType::Note,
            data,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct NoteContent {
    pub title: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Note {
    pub metadata: NoteMetadata,
    pub content: NoteContent,
}

impl From<Entry> for Note {
    fn from(entry: Entry) -> Self {
        Self {
            metadata: NoteMetadata {
                created_at: entry.timestamp,
                tags: vec![entry.tag],
                title: entry.title.clone(),
                updated_at: entry.timestamp,
                uuid: entry.id,
            },
            content: NoteContent {
                title: entry.title,
                cells: vec![Cell::note(entry.memo)],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn identifier_is_stable() {
        let id = identifier("bio.keio.ac.jp", 1_480_950_000, "sample.txt", "Example Entry");
        assert_eq!(id.to_string(), "74311251-4f31-3ed2-9755-d4228b53d820");
        assert_eq!(id.get_version_num(), 3);
        assert_eq!(
            identifier("", 0, "a", "b").to_string(),
            "cb35f388-fa01-39e9-acd3-d254ddd07044"
        );
    }

    #[test]
    fn identifier_depends_on_every_component() {
        let base = identifier("example.org", 100, "tag", "title");
        assert_eq!(base, identifier("example.org", 100, "tag", "title"));
        assert_ne!(base, identifier("example.com", 100, "tag", "title"));
        assert_ne!(base, identifier("example.org", 101, "tag", "title"));
        assert_ne!(base, identifier("example.org", 100, "tag2", "title"));
        assert_ne!(base, identifier("example.org", 100, "tag", "title2"));
    }

    #[test]
    fn note_from_entry_serializes() {
        let entry = Entry {
            id: identifier("example.org", 42, "file.c", "Title"),
            namespace: "example.org".to_string(),
            timestamp: 42,
            tag: "file.c".to_string(),
            title: "Title".to_string(),
            memo: "memo\n".to_string(),
        };
        let id = entry.id;
        let note = Note::from(entry);

        assert_eq!(
            serde_json::to_value(&note.metadata).unwrap(),
            json!({
                "created_at": 42,
                "tags": ["file.c"],
                "title": "Title",
                "updated_at": 42,
                "uuid": id.to_string(),
            })
        );
        assert_eq!(
            serde_json::to_value(&note.content).unwrap(),
            json!({
                "title": "Title",
                "cells": [{ "type": "note", "data": "memo\n" }],
            })
        );
        assert_eq!(
            serde_json::to_value(NotebookMetadata::default()).unwrap(),
            json!({ "name": "ChangeLog Memo", "uuid": "clmemo" })
        );
    }
}
