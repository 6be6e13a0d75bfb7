/// Elected offices that appear in county and search payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Governor,
    DeputyGovernor,
    Senator,
    WomenRep,
    Mp,
}

impl Position {
    /// County-wide offices, in display order.
    pub const COUNTY: [Position; 4] = [
        Position::Governor,
        Position::DeputyGovernor,
        Position::Senator,
        Position::WomenRep,
    ];

    /// Parse a payload key. Both `deputy_governor` and `dep_governor` are in use.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "governor" => Some(Position::Governor),
            "deputy_governor" | "dep_governor" => Some(Position::DeputyGovernor),
            "senator" => Some(Position::Senator),
            "women_rep" => Some(Position::WomenRep),
            "mp" => Some(Position::Mp),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Position::Governor => "governor",
            Position::DeputyGovernor => "deputy_governor",
            Position::Senator => "senator",
            Position::WomenRep => "women_rep",
            Position::Mp => "mp",
        }
    }

    /// Human-readable title.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Governor => "Governor",
            Position::DeputyGovernor => "Deputy Governor",
            Position::Senator => "Senator",
            Position::WomenRep => "Women Representative",
            Position::Mp => "MP",
        }
    }
}

/// Label for a position key; unknown keys get their first `_` replaced by a space.
pub fn format_position(key: &str) -> String {
    match Position::from_key(key) {
        Some(position) => position.label().to_string(),
        None => key.replacen('_', " ", 1),
    }
}

/// Capitalize each whitespace-separated word: first word character upper, rest lower.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut seen_word_char = false;

    for c in s.chars() {
        if c.is_whitespace() {
            seen_word_char = false;
            out.push(c);
            continue;
        }
        if !seen_word_char && (c.is_alphanumeric() || c == '_') {
            seen_word_char = true;
            out.extend(c.to_uppercase());
        } else if seen_word_char {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_have_labels() {
        assert_eq!(format_position("governor"), "Governor");
        assert_eq!(format_position("deputy_governor"), "Deputy Governor");
        assert_eq!(format_position("dep_governor"), "Deputy Governor");
        assert_eq!(format_position("women_rep"), "Women Representative");
        assert_eq!(format_position("mp"), "MP");
    }

    #[test]
    fn unknown_key_replaces_first_underscore_only() {
        assert_eq!(format_position("county_assembly_member"), "county assembly_member");
        assert_eq!(format_position("speaker"), "speaker");
    }

    #[test]
    fn key_roundtrips() {
        for position in Position::COUNTY.into_iter().chain([Position::Mp]) {
            assert_eq!(Position::from_key(position.key()), Some(position));
        }
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("JOHN mbadi NG'ONGO"), "John Mbadi Ng'ongo");
        assert_eq!(title_case("  two  spaces "), "  Two  Spaces ");
        assert_eq!(title_case("(hon) jane"), "(Hon) Jane");
        assert_eq!(title_case(""), "");
    }
}
