use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Photo,
    Video,
    Reel,
}

impl ContentType {
    /// Draw order used by the post generator.
    pub const ALL: [ContentType; 3] = [ContentType::Photo, ContentType::Video, ContentType::Reel];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Photo => "photo",
            ContentType::Video => "video",
            ContentType::Reel => "reel",
        }
    }

    /// Capitalized name used for chart legends
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Photo => "Photo",
            ContentType::Video => "Video",
            ContentType::Reel => "Reel",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "photo" => Some(ContentType::Photo),
            "video" => Some(ContentType::Video),
            "reel" => Some(ContentType::Reel),
            _ => None,
        }
    }

    /// Map a unit-interval draw onto the fixed type set.
    pub fn from_unit(draw: f64) -> Self {
        let idx = (draw * Self::ALL.len() as f64).floor() as usize;
        Self::ALL[idx.min(Self::ALL.len() - 1)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekLabel {
    #[serde(rename = "Previous Week")]
    PreviousWeek,
    #[serde(rename = "This Week")]
    ThisWeek,
}

impl WeekLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekLabel::PreviousWeek => "Previous Week",
            WeekLabel::ThisWeek => "This Week",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_parse_is_case_insensitive() {
        assert_eq!(ContentType::parse("Photo"), Some(ContentType::Photo));
        assert_eq!(ContentType::parse("REEL"), Some(ContentType::Reel));
        assert_eq!(ContentType::parse("story"), None);
    }

    #[test]
    fn test_content_type_from_unit_covers_range() {
        assert_eq!(ContentType::from_unit(0.0), ContentType::Photo);
        assert_eq!(ContentType::from_unit(0.34), ContentType::Video);
        assert_eq!(ContentType::from_unit(0.999_999), ContentType::Reel);
        assert_eq!(ContentType::from_unit(1.0), ContentType::Reel);
    }

    #[test]
    fn test_content_type_serializes_lowercase() {
        let json = serde_json::to_string(&ContentType::Video).unwrap();
        assert_eq!(json, "\"video\"");
    }

    #[test]
    fn test_week_label_serializes_display_name() {
        let json = serde_json::to_string(&WeekLabel::PreviousWeek).unwrap();
        assert_eq!(json, "\"Previous Week\"");
    }
}
