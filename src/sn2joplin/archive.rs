//! Reading the notes document out of a Simplenote export archive.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use log::debug;
use serde::{Serialize, Deserialize};
use zip::ZipArchive;

use crate::errors::{Error, ErrorKind, Result};
use crate::note::NoteRecord;

/// location of the notes document inside the export zip
pub const NOTES_DOCUMENT: &str = "source/notes.json";

/// Top level of `source/notes.json`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoteCollection {
    pub active_notes: Vec<NoteRecord>,
    #[serde(default)]
    pub trashed_notes: Vec<NoteRecord>,
}

impl NoteCollection {
    /// active notes in archive order, followed by trashed ones if asked for
    pub fn records(&self, include_trash: bool) -> Vec<&NoteRecord> {
        let trashed: &[NoteRecord] = if include_trash { &self.trashed_notes } else { &[] };
        self.active_notes.iter().chain(trashed.iter()).collect()
    }
}

/// open the export at `path` and parse its notes document
pub fn read_archive<P: AsRef<Path>>(path: P) -> Result<NoteCollection> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::ArchiveUnreadable,
                   format!("can't open {}", path.display()))
            .with_detail(e)
    })?;
    let collection = read_from(file)?;
    debug!("{}: {} active, {} trashed notes",
           path.display(),
           collection.active_notes.len(),
           collection.trashed_notes.len());
    Ok(collection)
}

/// parse the notes document from any seekable zip stream
pub fn read_from<R: Read + Seek>(reader: R) -> Result<NoteCollection> {
    let mut archive = ZipArchive::new(reader)?;
    let document = archive.by_name(NOTES_DOCUMENT).map_err(|e| {
        Error::new(ErrorKind::ArchiveUnreadable,
                   format!("{} not found in archive", NOTES_DOCUMENT))
            .with_detail(e)
    })?;
    let collection: NoteCollection = serde_json::from_reader(document)?;
    Ok(collection)
}
