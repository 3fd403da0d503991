//! Joplin front matter for a converted note.
//!
//! The header layout is fixed: Joplin's markdown + front matter importer
//! expects exactly these fields, in this order, with CRLF line endings.

use log::debug;

use crate::{specific_fail, specific_fail_str};
use crate::errors::{ErrorKind, Result};
use crate::note::{NoteRecord, OutputNote};
use crate::utils::{escape_single_quotes, extract_title, normalize_timestamp, sanitize_filename};

pub const FILE_EXTENSION: &str = "md";

/// Render the header block for an already escaped title and normalized dates
pub fn render_header(escaped_title: &str, updated: &str, created: &str) -> String {
    format!("---\r\n\
             title: '{}'\r\n\
             updated: {}\r\n\
             created: {}\r\n\
             latitude: 0.00000000\r\n\
             longitude: 0.00000000\r\n\
             altitude: 0.0000\r\n\
             ---\r\n\
             \r\n",
            escaped_title,
            updated,
            created)
}

/// Build the output file name and header for one note.
///
/// When the title sanitizes to nothing the note id is used as the file stem.
pub fn synthesize(record: &NoteRecord) -> Result<OutputNote> {
    let title = extract_title(&record.content)?;
    let mut stem = sanitize_filename(&title);
    if stem.is_empty() {
        stem = sanitize_filename(&record.id);
        if stem.is_empty() {
            return specific_fail_str!(ErrorKind::EmptyTitle,
                                      "note has neither a usable title nor id");
        }
        debug!("untitled note, falling back to id {}", stem);
    }
    let escaped = escape_single_quotes(&stem);

    let created = normalize_timestamp(&record.creation_date)?;
    let updated = normalize_timestamp(&record.last_modified)?;
    debug!("title = {} ; created = {} ; updated = {}", escaped, created, updated);

    Ok(OutputNote {
        filename: format!("{}.{}", stem, FILE_EXTENSION),
        header: render_header(&escaped, &updated, &created),
        body: record.content.clone(),
    })
}
