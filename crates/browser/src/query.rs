//! View-definition builder for the remote listing endpoint.
//!
//! A listing request is an XML view definition: an optional condition
//! tree filtering by file type, a fixed field projection, and a page
//! size. Folder rows always pass the type filter so the hierarchy stays
//! navigable whatever the caller accepts.

use crate::row::ListRow;

/// Object-type discriminator value marking a container row.
pub const FOLDER_OBJECT_TYPE: &str = "1";
/// Sort-behavior discriminator value marking a container row.
pub const FOLDER_SORT_BEHAVIOR: &str = "1";

/// Rows returned per request. Pagination beyond the first page is not
/// implemented; requests matching more rows return only the first 100.
pub const ROW_LIMIT: u32 = 100;

/// A filtered listing request against one container.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    accepted_types: Vec<String>,
}

impl ListingQuery {
    /// Parses an optional comma-separated accepted-extensions string.
    ///
    /// Each entry has a single leading literal `.` stripped if present.
    /// Entries are otherwise passed through exactly: the remote filter
    /// compares raw values, so no trimming or case folding happens here.
    pub fn new(accepts: Option<&str>) -> Self {
        let accepted_types = match accepts {
            Some(raw) if !raw.is_empty() => raw
                .split(',')
                .map(|entry| entry.strip_prefix('.').unwrap_or(entry).to_string())
                .collect(),
            _ => Vec::new(),
        };

        Self { accepted_types }
    }

    /// The parsed accepted-extension set; empty means "no type filter".
    pub fn accepted_types(&self) -> &[String] {
        &self.accepted_types
    }

    /// Renders the full view definition sent to the listing endpoint.
    pub fn view_xml(&self) -> String {
        let condition = self.query_condition();

        format!(
            r#"<View>
  {condition}
  <ViewFields>
    <FieldRef Name="DocIcon"/>
    <FieldRef Name="LinkFilename"/>
    <FieldRef Name="Modified"/>
    <FieldRef Name="Editor"/>
    <FieldRef Name="FileSizeDisplay"/>
    <FieldRef Name="SharedWith"/>
    <FieldRef Name="MediaServiceFastMetadata"/>
    <FieldRef Name="MediaServiceOCR"/>
    <FieldRef Name="_ip_UnifiedCompliancePolicyUIAction"/>
    <FieldRef Name="ItemChildCount"/>
    <FieldRef Name="FolderChildCount"/>
    <FieldRef Name="SMTotalFileCount"/>
    <FieldRef Name="SMTotalSize"/>
  </ViewFields>
  <RowLimit Paged="TRUE">{ROW_LIMIT}</RowLimit>
</View>"#
        )
    }

    /// The `<Query>` condition tree, or an empty string when no type
    /// filter applies (every item type is returned).
    ///
    /// The condition is an OR of two branches: the row is a container
    /// (both discriminators equal the folder sentinel), or its file type
    /// is in the accepted set. Folders therefore always pass the filter.
    fn query_condition(&self) -> String {
        let values = self.type_filter_values();
        if values.is_empty() {
            return String::new();
        }

        format!(
            r#"<Query>
    <Where>
      <Or>
        <And>
          <Eq>
            <FieldRef Name="FSObjType" />
            <Value Type="Text">{FOLDER_OBJECT_TYPE}</Value>
          </Eq>
          <Eq>
            <FieldRef Name="SortBehavior" />
            <Value Type="Text">{FOLDER_SORT_BEHAVIOR}</Value>
          </Eq>
        </And>
        <In>
          <FieldRef Name="File_x0020_Type" />
          {values}
        </In>
      </Or>
    </Where>
  </Query>"#
        )
    }

    /// The `<Values>` inclusion set for the file-type field.
    fn type_filter_values(&self) -> String {
        if self.accepted_types.is_empty() {
            return String::new();
        }

        let mut values = String::from("<Values>");
        for file_type in &self.accepted_types {
            values.push_str(&format!(r#"<Value Type="Text">{file_type}</Value>"#));
        }
        values.push_str("</Values>");
        values
    }

    /// In-process equivalent of the condition tree, for one raw row.
    ///
    /// The remote system enforces the filter server-side; tests and mock
    /// endpoints use this predicate to realize the same OR semantics:
    /// container rows pass unconditionally, plain files pass when their
    /// type is in the accepted set, and an empty set accepts everything.
    pub fn matches_row(&self, row: &ListRow) -> bool {
        if self.accepted_types.is_empty() {
            return true;
        }

        let is_container = row.fs_obj_type == FOLDER_OBJECT_TYPE
            && row.sort_behavior == FOLDER_SORT_BEHAVIOR;
        if is_container {
            return true;
        }

        row.file_type
            .as_deref()
            .is_some_and(|file_type| self.accepted_types.iter().any(|t| t == file_type))
    }
}
