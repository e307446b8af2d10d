//! Data model for the published eDNA Expeditions dataset.
//!
//! The dataset is a single JSON document with a `created` stamp plus the
//! site and sample lists. It is parsed once per page load and never
//! mutated afterwards; everything the dashboard shows is derived from it.

use serde::{Deserialize, Deserializer, Serialize};

/// Workflow stage of a sample. This is an ordered progression, not a free
/// string: a sample moves registered → collected → extracted → sequenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleStatus {
    Registered,
    Collected,
    Extracted,
    Sequenced,
}

impl SampleStatus {
    /// Canonical category order used by every chart and tally.
    pub const ALL: [SampleStatus; 4] = [
        SampleStatus::Registered,
        SampleStatus::Collected,
        SampleStatus::Extracted,
        SampleStatus::Sequenced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SampleStatus::Registered => "registered",
            SampleStatus::Collected => "collected",
            SampleStatus::Extracted => "extracted",
            SampleStatus::Sequenced => "sequenced",
        }
    }

    /// Badge class for the table; one entry per variant so a new status
    /// can't ship without a style decision.
    pub fn badge_class(self) -> &'static str {
        match self {
            SampleStatus::Registered => "bg-registered",
            SampleStatus::Collected => "bg-collected",
            SampleStatus::Extracted => "bg-extracted",
            SampleStatus::Sequenced => "bg-sequenced",
        }
    }

    /// Chart color, matching the original palette.
    pub fn chart_color(self) -> &'static str {
        match self {
            SampleStatus::Registered => "#85A389",
            SampleStatus::Collected => "#468B97",
            SampleStatus::Extracted => "#F3AA60",
            SampleStatus::Sequenced => "#EF6262",
        }
    }

    /// Position in [`SampleStatus::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One DNA extraction from a sample, with its measured concentration in
/// ng/μl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaExtract {
    pub plutof_id: u64,
    pub concentration: f64,
}

/// A UNESCO World Heritage marine site under which samples are collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Site key. Numeric in the published JSON; normalized to a string so
    /// it compares cleanly against URL parameters and sample fields.
    #[serde(deserialize_with = "key_as_string")]
    pub plutof_id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub article: Option<String>,
    /// Matched by name against the GeoJSON overlay by the map layer.
    #[serde(default)]
    pub simplified_name: Option<String>,
}

/// One physical eDNA collection event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Unique identifier.
    pub name: String,
    /// Parent site key, normalized to a string (see [`Site::plutof_id`]).
    #[serde(deserialize_with = "key_as_string")]
    pub parent_area_plutof_id: String,
    pub parent_area_name: String,
    /// Locality name; may be empty.
    #[serde(default)]
    pub area_name: String,
    #[serde(default)]
    pub area_latitude: Option<f64>,
    #[serde(default)]
    pub area_longitude: Option<f64>,
    /// Collection timestamp as published (ISO date or empty).
    #[serde(default)]
    pub event_begin: String,
    /// Filtered water volume in ml.
    #[serde(default)]
    pub size: Option<f64>,
    /// Control sample expected to show near-zero concentration.
    #[serde(default)]
    pub blank: bool,
    pub status: SampleStatus,
    #[serde(default)]
    pub dnas: Vec<DnaExtract>,
}

impl Sample {
    /// Whether the sample carries a mappable position.
    pub fn has_coordinates(&self) -> bool {
        self.area_latitude.is_some() && self.area_longitude.is_some()
    }
}

/// The dataset document as fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// ISO date the dataset was generated; shown in the footer.
    #[serde(default)]
    pub created: String,
    pub sites: Vec<Site>,
    pub samples: Vec<Sample>,
}

impl Dataset {
    pub fn from_json(body: &str) -> Result<Self, String> {
        serde_json::from_str(body).map_err(|err| format!("couldn't parse dataset: {err}"))
    }
}

/// Immutable holder for the raw dataset once loaded. Derived views
/// (visibility, sort order, aggregates) live elsewhere and never write
/// back into this.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    created: String,
    sites: Vec<Site>,
    samples: Vec<Sample>,
}

impl SampleStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            created: dataset.created,
            sites: dataset.sites,
            samples: dataset.samples,
        }
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn site(&self, key: &str) -> Option<&Site> {
        self.sites.iter().find(|site| site.plutof_id == key)
    }

    /// Sites in display-name order, for the selector.
    pub fn sites_by_name(&self) -> Vec<&Site> {
        let mut sites: Vec<&Site> = self.sites.iter().collect();
        sites.sort_by(|a, b| a.name.cmp(&b.name));
        sites
    }
}

/// Accepts either a JSON number or string and yields a string key. The
/// published dataset uses numeric ids while the URL layer hands around
/// strings; normalizing here keeps every comparison string-to-string.
fn key_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum KeyRepr {
        Number(i64),
        Text(String),
    }

    Ok(match KeyRepr::deserialize(deserializer)? {
        KeyRepr::Number(id) => id.to_string(),
        KeyRepr::Text(id) => id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_site_keys_parse_as_strings() {
        let json = r#"{
            "created": "2023-06-01",
            "sites": [
                {"plutof_id": 104197, "name": "Wadden Sea", "url": "https://whc.unesco.org/en/list/1314"}
            ],
            "samples": [
                {
                    "name": "EE0042",
                    "parent_area_plutof_id": 104197,
                    "parent_area_name": "Wadden Sea",
                    "area_name": "Pilsum",
                    "area_latitude": 53.49,
                    "area_longitude": 7.04,
                    "event_begin": "2022-09-18",
                    "size": 500,
                    "blank": false,
                    "status": "extracted",
                    "dnas": [{"plutof_id": 9001, "concentration": 1.53}]
                }
            ]
        }"#;

        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.sites[0].plutof_id, "104197");
        assert_eq!(dataset.samples[0].parent_area_plutof_id, "104197");
        assert_eq!(dataset.samples[0].status, SampleStatus::Extracted);
        assert_eq!(dataset.samples[0].dnas[0].concentration, 1.53);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "created": "",
            "sites": [],
            "samples": [
                {
                    "name": "EE0001",
                    "parent_area_plutof_id": "7",
                    "parent_area_name": "Banc d'Arguin",
                    "status": "registered"
                }
            ]
        }"#;

        let dataset = Dataset::from_json(json).unwrap();
        let sample = &dataset.samples[0];
        assert!(!sample.has_coordinates());
        assert!(sample.area_name.is_empty());
        assert!(sample.dnas.is_empty());
        assert!(!sample.blank);
    }

    #[test]
    fn unknown_status_is_a_parse_error() {
        let json = r#"{
            "created": "",
            "sites": [],
            "samples": [
                {
                    "name": "EE0001",
                    "parent_area_plutof_id": "7",
                    "parent_area_name": "x",
                    "status": "teleported"
                }
            ]
        }"#;

        assert!(Dataset::from_json(json).is_err());
    }

    #[test]
    fn status_order_is_the_workflow_progression() {
        assert!(SampleStatus::Registered < SampleStatus::Collected);
        assert!(SampleStatus::Collected < SampleStatus::Extracted);
        assert!(SampleStatus::Extracted < SampleStatus::Sequenced);
        assert_eq!(SampleStatus::ALL[SampleStatus::Sequenced.index()], SampleStatus::Sequenced);
    }

    #[test]
    fn sites_by_name_sorts_for_the_selector() {
        let store = SampleStore::new(Dataset {
            created: String::new(),
            sites: vec![
                Site {
                    plutof_id: "2".into(),
                    name: "Wadden Sea".into(),
                    url: String::new(),
                    article: None,
                    simplified_name: None,
                },
                Site {
                    plutof_id: "1".into(),
                    name: "Aldabra Atoll".into(),
                    url: String::new(),
                    article: None,
                    simplified_name: None,
                },
            ],
            samples: Vec::new(),
        });

        let names: Vec<&str> = store.sites_by_name().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Aldabra Atoll", "Wadden Sea"]);
    }
}
