use std::collections::{btree_map, BTreeMap};

use log::{debug, warn};
use uuid::Uuid;

use crate::{
    changelog::Entry,
    note::{Cell, Note},
};

/// What happened to an entry handed to [`NoteAssembler::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Created,
    /// Same identifier, different memo: appended as a new cell.
    Merged,
    /// Same identifier and the same memo as the note's first cell.
    Unchanged,
}

/// Collects notes by identifier until they are flushed to a store.
#[derive(Debug, Default)]
pub(crate) struct NoteAssembler {
    notes: BTreeMap<Uuid, Note>,
    merged: usize,
}

impl NoteAssembler {
    pub fn add(&mut self, entry: Entry) -> Outcome {
        match self.notes.entry(entry.id) {
            btree_map::Entry::Vacant(vacant) => {
                debug!(
                    "New note {} [{}: {}] from {}",
                    entry.id, entry.tag, entry.title, entry.namespace
                );
                vacant.insert(Note::from(entry));
                Outcome::Created
            }
            btree_map::Entry::Occupied(occupied) => {
                let note = occupied.into_mut();
                if note.content.cells.first().is_some_and(|c| c.data == entry.memo) {
                    return Outcome::Unchanged;
                }
                warn!(
                    "Note {} already exists! ChangeLog might include a wrong format. will add\n{}\nto [{}]",
                    entry.id, entry.memo, note.content.title
                );
                note.content.cells.push(Cell::note(entry.memo));
                self.merged += 1;
                Outcome::Merged
            }
        }
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn merged(&self) -> usize {
        self.merged
    }
}

impl FromIterator<Entry> for NoteAssembler {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut assembler = Self::default();
        for entry in iter {
            assembler.add(entry);
        }
        assembler
    }
}
