//! Generated record seed types.
//!
//! This module defines the output types from record generation. These types
//! are independent of any content-management domain to avoid circular
//! dependencies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parameters for one deterministic generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSpec {
    /// RNG seed value; the same seed always yields identical records.
    pub seed: u64,
    /// Number of records to generate.
    pub record_count: usize,
}

/// A generated placeholder record.
///
/// This type contains the fields a content-management backend typically needs
/// to create a draft record. It is designed to be converted into domain types
/// at the point of use.
///
/// # Example
///
/// ```
/// use demo_content::DemoRecordSeed;
/// use uuid::Uuid;
///
/// let record = DemoRecordSeed {
///     id: Uuid::new_v4(),
///     title: "Harbour Lantern".to_owned(),
///     slug: "harbour-lantern".to_owned(),
///     teaser: "The tide tables were wrong again.".to_owned(),
///     body: "Nobody checked the charts.".to_owned(),
///     author: "Ada Lovelace".to_owned(),
/// };
///
/// assert_eq!(record.slug, "harbour-lantern");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRecordSeed {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// Human-readable record title.
    pub title: String,
    /// URL-safe slug derived from the title.
    pub slug: String,
    /// Single-sentence teaser text.
    pub teaser: String,
    /// Multi-sentence body text.
    pub body: String,
    /// Attributed author name.
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_record_seed_serializes_to_camel_case() {
        let record = DemoRecordSeed {
            id: Uuid::nil(),
            title: "Test".to_owned(),
            slug: "test".to_owned(),
            teaser: "One.".to_owned(),
            body: "Two.".to_owned(),
            author: "Someone".to_owned(),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"slug\""));
        assert!(json.contains("\"teaser\""));
        assert!(json.contains("\"body\""));
        assert!(json.contains("\"author\""));
    }

    #[test]
    fn demo_record_seed_round_trips_through_json() {
        let record = DemoRecordSeed {
            id: Uuid::nil(),
            title: "Harbour Lantern".to_owned(),
            slug: "harbour-lantern".to_owned(),
            teaser: "One.".to_owned(),
            body: "Two. Three.".to_owned(),
            author: "Someone".to_owned(),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        let decoded: DemoRecordSeed = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, record);
    }
}
