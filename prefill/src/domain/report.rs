//! Aggregate outcome of one prefill pass.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::ContentTypeName;
use crate::domain::ports::CreatedRecord;

/// Consolidated report over a heterogeneous batch of content types.
///
/// Each sub-map is keyed by content-type name and preserves processing
/// order. A name appears in at most one of the three maps: a type either
/// received records, failed terminally, or was skipped with an advisory
/// warning. Types that needed no work appear nowhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefillReport {
    created: IndexMap<ContentTypeName, Vec<CreatedRecord>>,
    errors: IndexMap<ContentTypeName, String>,
    warnings: IndexMap<ContentTypeName, String>,
}

impl PrefillReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records generated per content type.
    #[must_use]
    pub fn created(&self) -> &IndexMap<ContentTypeName, Vec<CreatedRecord>> {
        &self.created
    }

    /// Terminal failures per content type.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<ContentTypeName, String> {
        &self.errors
    }

    /// Advisory skip messages per content type.
    #[must_use]
    pub fn warnings(&self) -> &IndexMap<ContentTypeName, String> {
        &self.warnings
    }

    /// Returns `true` when the report holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Returns `true` when the report mentions the content type in any map.
    #[must_use]
    pub fn mentions(&self, content_type: &ContentTypeName) -> bool {
        self.created.contains_key(content_type)
            || self.errors.contains_key(content_type)
            || self.warnings.contains_key(content_type)
    }

    pub(crate) fn record_created(&mut self, content_type: ContentTypeName, records: Vec<CreatedRecord>) {
        self.created.insert(content_type, records);
    }

    pub(crate) fn record_error(&mut self, content_type: ContentTypeName, message: String) {
        self.errors.insert(content_type, message);
    }

    pub(crate) fn record_warning(&mut self, content_type: ContentTypeName, message: String) {
        self.warnings.insert(content_type, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_mentions_nothing() {
        let report = PrefillReport::new();
        assert!(report.is_empty());
        assert!(!report.mentions(&ContentTypeName::from("pages")));
    }

    #[test]
    fn sub_maps_preserve_insertion_order() {
        let mut report = PrefillReport::new();
        report.record_warning(ContentTypeName::from("zeta"), "skipped".to_owned());
        report.record_warning(ContentTypeName::from("alpha"), "skipped".to_owned());

        let keys: Vec<_> = report.warnings().keys().map(ContentTypeName::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn serializes_with_camel_case_top_level_keys() {
        let mut report = PrefillReport::new();
        report.record_error(ContentTypeName::from("pages"), "broken".to_owned());

        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("\"created\""));
        assert!(json.contains("\"errors\""));
        assert!(json.contains("\"warnings\""));
        assert!(json.contains("\"pages\":\"broken\""));
    }
}
