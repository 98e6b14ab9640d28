//! Raw listing rows and their normalization into [`FileItem`] records.

use serde::Deserialize;
use shelfpick_api_types::FileItem;

use crate::query::FOLDER_OBJECT_TYPE;

/// A principal descriptor attached to a row (editor, sharer, ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Principal {
    #[serde(default)]
    pub title: String,
}

/// One raw row of a listing response.
///
/// Every field is optional or defaulted: rows are heterogeneous (folders
/// carry no file type, some rows lack the friendly-modified variant) and
/// a missing field must degrade to a default, never fail the decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRow {
    #[serde(rename = "FileLeafRef", default)]
    pub file_leaf_ref: String,
    #[serde(rename = "DocIcon", default)]
    pub doc_icon: String,
    #[serde(rename = "FileRef", default)]
    pub file_ref: String,
    #[serde(rename = "Modified", default)]
    pub modified: String,
    /// Compound "friendly" variant, two segments separated by a pipe.
    #[serde(rename = "Modified.FriendlyDisplay", default)]
    pub modified_friendly: Option<String>,
    #[serde(rename = "File_x0020_Size", default)]
    pub file_size: String,
    #[serde(rename = "File_x0020_Type", default)]
    pub file_type: Option<String>,
    #[serde(rename = "Editor", default)]
    pub editors: Vec<Principal>,
    /// Object-type discriminator; the folder sentinel is `"1"`.
    #[serde(rename = "FSObjType", default)]
    pub fs_obj_type: String,
    #[serde(rename = "SortBehavior", default)]
    pub sort_behavior: String,
}

impl ListRow {
    /// Maps this row to a normalized record.
    ///
    /// `site_origin` is the container root locator prepended to the
    /// server-relative path. Rows missing identity fields still map,
    /// carrying whatever empty value the source provided; partial data
    /// is preferred over silently dropping rows.
    pub fn normalize(&self, site_origin: &str) -> FileItem {
        FileItem {
            name: self.file_leaf_ref.clone(),
            icon: self.doc_icon.clone(),
            path: self.file_ref.clone(),
            absolute_path: format!("{site_origin}{}", self.file_ref),
            modified: self.resolve_modified(),
            modified_by: self
                .editors
                .first()
                .map(|editor| editor.title.clone())
                .unwrap_or_default(),
            size: self.file_size.clone(),
            file_type: self.file_type.clone().unwrap_or_default(),
            is_folder: self.fs_obj_type == FOLDER_OBJECT_TYPE,
        }
    }

    /// Prefers the second segment of the pipe-compound friendly display
    /// when it has exactly two segments, else the raw modified field.
    fn resolve_modified(&self) -> String {
        if let Some(friendly) = &self.modified_friendly {
            let segments: Vec<&str> = friendly.split('|').collect();
            if segments.len() == 2 {
                return segments[1].to_string();
            }
        }
        self.modified.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://contoso.example.com";

    fn base_row() -> ListRow {
        ListRow {
            file_leaf_ref: "report.pdf".to_string(),
            doc_icon: "pdf".to_string(),
            file_ref: "/sites/team/Documents/report.pdf".to_string(),
            modified: "2026-03-03 14:02:11".to_string(),
            file_size: "48211".to_string(),
            file_type: Some("pdf".to_string()),
            editors: vec![Principal {
                title: "Dona Frost".to_string(),
            }],
            fs_obj_type: "0".to_string(),
            ..ListRow::default()
        }
    }

    #[test]
    fn friendly_modified_second_segment_wins() {
        let mut row = base_row();
        row.modified_friendly = Some("0|March 3".to_string());

        assert_eq!(row.normalize(ORIGIN).modified, "March 3");
    }

    #[test]
    fn raw_modified_is_the_fallback() {
        // No friendly variant at all.
        let row = base_row();
        assert_eq!(row.normalize(ORIGIN).modified, "2026-03-03 14:02:11");

        // Friendly variant without exactly two segments.
        let mut row = base_row();
        row.modified_friendly = Some("March 3".to_string());
        assert_eq!(row.normalize(ORIGIN).modified, "2026-03-03 14:02:11");

        let mut row = base_row();
        row.modified_friendly = Some("0|March 3|extra".to_string());
        assert_eq!(row.normalize(ORIGIN).modified, "2026-03-03 14:02:11");
    }

    #[test]
    fn absolute_path_is_origin_plus_path() {
        let item = base_row().normalize(ORIGIN);
        assert_eq!(
            item.absolute_path,
            "https://contoso.example.com/sites/team/Documents/report.pdf"
        );
    }

    #[test]
    fn is_folder_depends_only_on_the_object_type_discriminator() {
        let mut row = base_row();
        row.fs_obj_type = "1".to_string();
        // Contradictory secondary fields must not matter.
        row.file_type = Some("pdf".to_string());
        row.sort_behavior = "0".to_string();
        assert!(row.normalize(ORIGIN).is_folder);

        let mut row = base_row();
        row.fs_obj_type = "0".to_string();
        row.sort_behavior = "1".to_string();
        assert!(!row.normalize(ORIGIN).is_folder);
    }

    #[test]
    fn missing_editor_degrades_to_empty() {
        let mut row = base_row();
        row.editors.clear();
        assert_eq!(row.normalize(ORIGIN).modified_by, "");
    }

    #[test]
    fn first_editor_entry_is_used() {
        let mut row = base_row();
        row.editors.push(Principal {
            title: "Second Editor".to_string(),
        });
        assert_eq!(row.normalize(ORIGIN).modified_by, "Dona Frost");
    }

    #[test]
    fn row_with_missing_identity_fields_still_maps() {
        let row = ListRow::default();
        let item = row.normalize(ORIGIN);

        assert_eq!(item.name, "");
        assert_eq!(item.path, "");
        assert_eq!(item.absolute_path, ORIGIN);
        assert!(!item.is_folder);
    }

    #[test]
    fn rows_decode_from_remote_field_names() {
        let raw = r#"{
            "FileLeafRef": "notes.docx",
            "DocIcon": "docx",
            "FileRef": "/sites/team/Documents/notes.docx",
            "Modified": "2026-02-14 09:30:00",
            "Modified.FriendlyDisplay": "0|February 14",
            "File_x0020_Size": "1024",
            "File_x0020_Type": "docx",
            "Editor": [{"id": "7", "title": "Ming Qiu", "email": "ming@contoso.example.com"}],
            "FSObjType": "0",
            "SortBehavior": "0"
        }"#;

        let row: ListRow = serde_json::from_str(raw).expect("row should decode");
        let item = row.normalize(ORIGIN);

        assert_eq!(item.name, "notes.docx");
        assert_eq!(item.modified, "February 14");
        assert_eq!(item.modified_by, "Ming Qiu");
        assert_eq!(item.file_type, "docx");
        assert!(!item.is_folder);
    }
}
