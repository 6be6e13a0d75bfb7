use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Position;

/// Where a searched place lies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub constituency: String,
    pub county: String,
}

/// A leader as returned by the location search, with a flat party abbreviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLeader {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

/// Payload of `POST /location_search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSearch {
    pub location: Location,
    /// Keyed by position (`governor`, `mp`, ...).
    #[serde(default)]
    pub leaders: BTreeMap<String, SearchLeader>,
}

impl LocationSearch {
    /// "<query> is in <constituency> Constituency, <county> County"
    pub fn summary(&self, query: &str) -> String {
        format!(
            "{} is in {} Constituency, {} County",
            query.trim(), self.location.constituency, self.location.county,
        )
    }

    /// Leaders ordered by office (known offices first), then by key.
    pub fn leaders_in_order(&self) -> Vec<(&str, &SearchLeader)> {
        let mut leaders = self.leaders.iter()
            .map(|(key, leader)| (key.as_str(), leader))
            .collect::<Vec<_>>();
        // BTreeMap already orders by key, so a stable sort keeps that as the tie-break.
        leaders.sort_by_key(|(key, _)| Position::from_key(key).map_or(usize::MAX, |p| p as usize));
        leaders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocationSearch {
        serde_json::from_str(r#"{
            "location": { "constituency": "Kisumu Central", "county": "Kisumu" },
            "leaders": {
                "mp": { "name": "E", "abbreviation": "ODM" },
                "speaker": { "name": "S" },
                "governor": { "name": "G", "photo_url": "g.png", "abbreviation": "ODM" },
                "women_rep": { "name": "W" }
            }
        }"#).unwrap()
    }

    #[test]
    fn summary_sentence() {
        assert_eq!(sample().summary("  Kondele "), "Kondele is in Kisumu Central Constituency, Kisumu County");
    }

    #[test]
    fn leaders_are_ordered_by_office() {
        let search = sample();
        let keys: Vec<_> = search.leaders_in_order().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["governor", "women_rep", "mp", "speaker"]);
    }
}
