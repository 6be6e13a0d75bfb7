use serde::{Deserialize, Serialize};

use crate::{
    geom::{ViewBoxReport, fit_view_box},
    model::Position,
};

/// A county as listed by `GET /maps/counties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct County {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// SVG path outline; empty when the backend has no geometry for the county.
    #[serde(rename = "svgPath", default)]
    pub svg_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,
}

impl Leader {
    /// Party abbreviation, if any.
    pub fn party_abbreviation(&self) -> Option<&str> {
        self.party.as_ref()?.abbreviation.as_deref()
    }
}

/// County-wide office holders. Any office may be vacant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountyLeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governor: Option<Leader>,
    #[serde(default, alias = "dep_governor", skip_serializing_if = "Option::is_none")]
    pub deputy_governor: Option<Leader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senator: Option<Leader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub women_rep: Option<Leader>,
}

impl CountyLeaders {
    pub fn get(&self, position: Position) -> Option<&Leader> {
        match position {
            Position::Governor => self.governor.as_ref(),
            Position::DeputyGovernor => self.deputy_governor.as_ref(),
            Position::Senator => self.senator.as_ref(),
            Position::WomenRep => self.women_rep.as_ref(),
            Position::Mp => None,
        }
    }

    /// Filled offices in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Leader)> {
        Position::COUNTY.into_iter()
            .filter_map(|position| self.get(position).map(|leader| (position, leader)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constituency {
    pub id: u64,
    pub name: String,
    #[serde(rename = "svgPath", default)]
    pub svg_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp: Option<Leader>,
}

/// The county header inside a detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountySummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
}

/// Payload of `GET /maps/counties/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyDetail {
    pub county: CountySummary,
    #[serde(default)]
    pub leaders: CountyLeaders,
    #[serde(default)]
    pub constituencies: Vec<Constituency>,
}

impl CountyDetail {
    /// Fit the constituency outlines into one viewBox.
    pub fn view_box(&self) -> ViewBoxReport {
        fit_view_box(self.constituencies.iter().map(|c| c.svg_path.as_str()))
    }

    pub fn shapes(&self) -> Vec<MapShape> {
        self.constituencies.iter().map(MapShape::from).collect()
    }

    pub fn constituency(&self, name: &str) -> Option<&Constituency> {
        self.constituencies.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// One drawable outline on a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapShape {
    pub id: u64,
    pub name: String,
    pub path: String,
}

impl From<&County> for MapShape {
    fn from(county: &County) -> Self {
        Self { id: county.id, name: county.name.clone(), path: county.svg_path.clone() }
    }
}

impl From<&Constituency> for MapShape {
    fn from(constituency: &Constituency) -> Self {
        Self { id: constituency.id, name: constituency.name.clone(), path: constituency.svg_path.clone() }
    }
}

/// Shapes for the national county map.
pub fn county_shapes(counties: &[County]) -> Vec<MapShape> {
    counties.iter().map(MapShape::from).collect()
}
