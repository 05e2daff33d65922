use anyhow::Context as _;
use log::info;

use crate::{
    assembler::NoteAssembler,
    changelog,
    context::{Context, Timezone},
    note::NotebookMetadata,
    store::{FsNoteStore, NoteStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub notes: usize,
    pub merged: usize,
}

pub(crate) fn assemble(text: &str, timezone: Timezone) -> NoteAssembler {
    changelog::parse(text, timezone).into_iter().collect()
}

/// Creates the notebook, then writes every note with its own timestamp.
pub(crate) fn export<S: NoteStore>(store: &mut S, notes: &NoteAssembler) -> anyhow::Result<()> {
    let notebook = store.create_notebook(&NotebookMetadata::default())?;
    for note in notes.notes() {
        let meta = &note.metadata;
        store
            .write_note(&notebook, &meta.uuid, meta, &note.content, meta.created_at)
            .with_context(|| format!("while exporting [{}]", meta.title))?;
    }

    Ok(())
}

pub(crate) fn convert(ctx: &Context) -> anyhow::Result<Summary> {
    let text = std::fs::read_to_string(&ctx.changelog_path)
        .with_context(|| format!("while reading {:?}", ctx.changelog_path))?;

    let notes = assemble(&text, ctx.timezone);
    let mut store = FsNoteStore::new(&ctx.out_dir);
    export(&mut store, &notes)?;

    let summary = Summary {
        notes: notes.len(),
        merged: notes.merged(),
    };
    info!(
        "Exported {} notes ({} merged duplicates).",
        summary.notes, summary.merged
    );
    Ok(summary)
}
