#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use sn2joplin::archive::NOTES_DOCUMENT;

pub const TWO_NOTES: &str = r##"{
  "activeNotes": [
    {
      "id": "0bb18b5d-a6d1-4fc3-9e2b-1829b31b60ad",
      "content": "# C & Cpp Language\r\n\r\n(keywords: c, c++)",
      "creationDate": "2022-08-24T18:32:58.089Z",
      "lastModified": "2022-09-03T15:33:44.948Z",
      "markdown": true
    },
    {
      "id": "8077b1d6-3fc1-40b9-9348-07841ec7bb02",
      "content": "# Wheeler's Delay\r\n\r\n## notes",
      "creationDate": "2022-06-27T14:25:14.903Z",
      "lastModified": "2022-09-03T17:20:26.931Z",
      "markdown": true
    }
  ],
  "trashedNotes": [
    {
      "id": "d5e0c1a2-0000-4000-8000-000000000000",
      "content": "Old idea\nnot needed",
      "creationDate": "2021-01-02T03:04:05.006Z",
      "lastModified": "2021-01-02T03:04:05.006Z",
      "markdown": false
    }
  ]
}"##;

/// write a zip holding `entries` (name, contents) under `dir`
pub fn make_zip(dir: &Path, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("notes.zip");
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, contents) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
    path
}

pub fn export_zip(dir: &Path, notes_json: &str) -> PathBuf {
    make_zip(dir, &[(NOTES_DOCUMENT, notes_json)])
}

/// sorted file names directly under `dir`
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => vec![],
    };
    names.sort();
    names
}
