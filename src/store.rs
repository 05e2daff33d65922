use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use filetime::FileTime;
use log::{debug, info};
use serde::Serialize;
use uuid::Uuid;

use crate::note::{NoteContent, NoteMetadata, NotebookMetadata};

pub(crate) const NOTEBOOK_DIR_NAME: &str = "ChangeLogMemo";
pub(crate) const NOTEBOOK_EXTENSION: &str = "qvnotebook";
pub(crate) const NOTE_EXTENSION: &str = "qvnote";

const META_FILE: &str = "meta.json";
const CONTENT_FILE: &str = "content.json";

/// Destination of assembled notes.
pub(crate) trait NoteStore {
    type Notebook;

    /// Creates the notebook container; calling it again on an existing notebook is fine.
    fn create_notebook(&mut self, metadata: &NotebookMetadata) -> anyhow::Result<Self::Notebook>;

    fn write_note(
        &mut self,
        notebook: &Self::Notebook,
        id: &Uuid,
        metadata: &NoteMetadata,
        content: &NoteContent,
        timestamp: i64,
    ) -> anyhow::Result<()>;
}

/// Writes a Quiver-style `.qvnotebook` directory under `root`.
#[derive(Debug)]
pub(crate) struct FsNoteStore {
    root: PathBuf,
}

impl FsNoteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn notebook_path(&self) -> PathBuf {
        let mut path = self.root.join(NOTEBOOK_DIR_NAME);
        path.set_extension(NOTEBOOK_EXTENSION);
        path
    }
}

impl NoteStore for FsNoteStore {
    type Notebook = PathBuf;

    fn create_notebook(&mut self, metadata: &NotebookMetadata) -> anyhow::Result<PathBuf> {
        let path = self.notebook_path();
        info!("Exporting notes to {path:?} ...");
        create_dir(&path)?;
        write_json(&path.join(META_FILE), metadata)?;
        Ok(path)
    }

    fn write_note(
        &mut self,
        notebook: &PathBuf,
        id: &Uuid,
        metadata: &NoteMetadata,
        content: &NoteContent,
        timestamp: i64,
    ) -> anyhow::Result<()> {
        let mut note_path = notebook.join(id.to_string());
        note_path.set_extension(NOTE_EXTENSION);
        debug!("Writing {note_path:?}");
        create_dir(&note_path)?;

        let meta_path = note_path.join(META_FILE);
        let content_path = note_path.join(CONTENT_FILE);
        write_json(&meta_path, metadata)?;
        write_json(&content_path, content)?;

        // the directory goes last: writing its files bumps its mtime
        for path in [&meta_path, &content_path, &note_path] {
            touch(path, timestamp)?;
        }
        Ok(())
    }
}

fn create_dir(path: &Path) -> anyhow::Result<()> {
    fs_extra::dir::create_all(path, false)
        .with_context(|| format!("while creating directory {path:?}"))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let fd = File::create(path).with_context(|| format!("while creating {path:?}"))?;
    let mut writer = BufWriter::new(fd);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("while writing {path:?}"))?;
    writer.flush()?;

    Ok(())
}

fn touch(path: &Path, timestamp: i64) -> anyhow::Result<()> {
    let time = FileTime::from_unix_time(timestamp, 0);
    filetime::set_file_times(path, time, time)
        .with_context(|| format!("while setting timestamp of {path:?}"))
}
