//! National leader history and the table filters over it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Earliest year a leader query can meaningfully ask about.
pub const FIRST_VALID_YEAR: i32 = 1963;

/// Earliest year the roster data covers.
pub const FIRST_COVERED_YEAR: i32 = 2002;

/// Longest accepted name query, in characters.
pub const MAX_NAME_QUERY_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalLeader {
    pub name: String,
    pub position: String,
    pub start_year: i32,
    /// None while still in office.
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl NationalLeader {
    /// True if the leader held office at some point during `year`.
    pub fn served_in(&self, year: i32) -> bool {
        self.start_year <= year && self.end_year.is_none_or(|end| end >= year)
    }

    /// "2013 – 2022" or "2022 – Present".
    pub fn term(&self) -> String {
        match self.end_year {
            Some(end) => format!("{} – {}", self.start_year, end),
            None => format!("{} – Present", self.start_year),
        }
    }
}

/// Payload of `GET /presidents`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub all_leaders: Vec<NationalLeader>,
    #[serde(default)]
    pub current_leaders: Vec<NationalLeader>,
}

impl Roster {
    /// Leaders matching `filter`, in roster order.
    pub fn filter<'a>(&'a self, filter: &RosterFilter) -> Vec<&'a NationalLeader> {
        self.all_leaders.iter().filter(|leader| filter.matches(leader)).collect()
    }

    /// Distinct positions in first-seen order, for building a position picker.
    pub fn positions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for leader in &self.all_leaders {
            if !out.contains(&leader.position.as_str()) { out.push(&leader.position) }
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PositionFilter {
    #[default]
    All,
    Only(String),
}

impl PositionFilter {
    /// `""` and `"All Leaders"` select everything; anything else is an exact position.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "" | "All Leaders" => PositionFilter::All,
            other => PositionFilter::Only(other.to_string()),
        }
    }

    pub fn matches(&self, position: &str) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Only(p) => p == position,
        }
    }
}

/// Table filter state: name substring, position, serving year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub name: String,
    pub position: PositionFilter,
    pub year: Option<i32>,
}

impl RosterFilter {
    pub fn matches(&self, leader: &NationalLeader) -> bool {
        leader.name.to_lowercase().contains(&self.name.to_lowercase())
            && self.position.matches(&leader.position)
            && self.year.is_none_or(|year| leader.served_in(year))
    }

    /// Advisory problems with the current query. The filter applies regardless.
    pub fn validate(&self, current_year: i32) -> Vec<QueryIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() { issues.push(QueryIssue::EmptyName) }
        if self.name.chars().count() > MAX_NAME_QUERY_LEN { issues.push(QueryIssue::NameTooLong) }

        if let Some(year) = self.year {
            if year < FIRST_VALID_YEAR { issues.push(QueryIssue::InvalidYear) }
            if year > current_year { issues.push(QueryIssue::FutureYear) }
            if year < FIRST_COVERED_YEAR { issues.push(QueryIssue::BeforeCoverage) }
        }

        issues
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryIssue {
    EmptyName,
    NameTooLong,
    InvalidYear,
    FutureYear,
    BeforeCoverage,
}

impl fmt::Display for QueryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            QueryIssue::EmptyName => "Please enter a name to search",
            QueryIssue::NameTooLong => "Name is too long",
            QueryIssue::InvalidYear => "Please enter a valid year",
            QueryIssue::FutureYear => "Year cannot be in the future",
            QueryIssue::BeforeCoverage => "Data is only available from 2002 onwards",
        };
        f.write_str(msg)
    }
}
