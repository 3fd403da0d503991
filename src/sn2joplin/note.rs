use serde::{Serialize, Deserialize};

/// One note as stored in a Simplenote export
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    pub id: String,
    pub content: String,
    pub creation_date: String,
    pub last_modified: String,
    #[serde(default)]
    pub markdown: bool,
}

/// A converted note, ready to be written to disk
#[derive(Clone, Debug, PartialEq)]
pub struct OutputNote {
    pub filename: String,
    pub header: String,
    pub body: String,
}

impl OutputNote {
    /// header block followed by the untouched note content
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.header.len() + self.body.len());
        out.push_str(&self.header);
        out.push_str(&self.body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_export_field_names() {
        let json = r##"{
            "id": "0bb18b5d-a6d1-4fc3-9e2b-1829b31b60ad",
            "content": "# C & Cpp Language\r\n\r\nbody",
            "creationDate": "2022-08-24T18:32:58.089Z",
            "lastModified": "2022-09-03T15:33:44.948Z",
            "markdown": true
        }"##;
        let rec: NoteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.creation_date, "2022-08-24T18:32:58.089Z");
        assert_eq!(rec.last_modified, "2022-09-03T15:33:44.948Z");
        assert!(rec.markdown);
    }

    #[test]
    fn markdown_flag_defaults_to_false() {
        let json = r#"{"id": "x", "content": "hi", "creationDate": "a", "lastModified": "b"}"#;
        let rec: NoteRecord = serde_json::from_str(json).unwrap();
        assert!(!rec.markdown);
    }
}
