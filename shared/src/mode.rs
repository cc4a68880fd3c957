use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Input mode selected in the UI. Tab order follows declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
    EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Text,
    Image,
    Audio,
    Video,
    Ai,
}

impl AnalysisMode {
    pub fn media_kind(self) -> Option<MediaKind> {
        match self {
            AnalysisMode::Image => Some(MediaKind::Image),
            AnalysisMode::Audio => Some(MediaKind::Audio),
            AnalysisMode::Video => Some(MediaKind::Video),
            AnalysisMode::Text | AnalysisMode::Ai => None,
        }
    }

    /// Capitalised mode name, e.g. `Text`, `Ai`.
    pub fn title(self) -> String {
        let name = self.to_string();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn button_label(self) -> String {
        format!("Analyze {}", self.title())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
    EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
}

impl MediaKind {
    pub fn mime_prefix(self) -> &'static str {
        match self {
            MediaKind::Image => "image/",
            MediaKind::Audio => "audio/",
            MediaKind::Video => "video/",
        }
    }

    pub fn accept(self) -> &'static str {
        match self {
            MediaKind::Image => "image/*",
            MediaKind::Audio => "audio/*",
            MediaKind::Video => "video/*",
        }
    }

    /// Whether a picked file with this MIME type can be submitted as `self`.
    /// Browsers leave the type empty for many containers (`.mkv`, `.flac`),
    /// so an unknown type is accepted and left to the server.
    pub fn accepts_mime(self, mime: &str) -> bool {
        let mime = mime.trim();
        mime.is_empty() || mime.to_ascii_lowercase().starts_with(self.mime_prefix())
    }
}

impl From<MediaKind> for AnalysisMode {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => AnalysisMode::Image,
            MediaKind::Audio => AnalysisMode::Audio,
            MediaKind::Video => AnalysisMode::Video,
        }
    }
}

/// Kind of content submitted for AI-vs-human detection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
    EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Code,
    Academic,
    Social,
}

impl ContentType {
    pub fn label(self) -> &'static str {
        match self {
            ContentType::Text => "General Text",
            ContentType::Code => "Source Code",
            ContentType::Academic => "Academic Writing",
            ContentType::Social => "Social Media Post",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mode_names_are_lowercase() {
        let names: Vec<String> = AnalysisMode::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, vec!["text", "image", "audio", "video", "ai"]);
    }

    #[test]
    fn test_button_label_capitalises_mode() {
        assert_eq!(AnalysisMode::Text.button_label(), "Analyze Text");
        assert_eq!(AnalysisMode::Ai.button_label(), "Analyze Ai");
        assert_eq!(AnalysisMode::Video.button_label(), "Analyze Video");
    }

    #[test]
    fn test_media_kind_round_trips_through_mode() {
        for kind in MediaKind::iter() {
            assert_eq!(AnalysisMode::from(kind).media_kind(), Some(kind));
        }
        assert_eq!(AnalysisMode::Text.media_kind(), None);
        assert_eq!(AnalysisMode::Ai.media_kind(), None);
    }

    #[test]
    fn test_content_type_parses_wire_names() {
        assert_eq!(ContentType::from_str("academic").unwrap(), ContentType::Academic);
        assert_eq!(ContentType::default().as_ref(), "text");
        assert!(ContentType::from_str("poetry").is_err());
    }

    #[test]
    fn test_unknown_mime_types_are_accepted() {
        assert!(MediaKind::Video.accepts_mime(""));
        assert!(MediaKind::Audio.accepts_mime("   "));
        assert!(MediaKind::Video.accepts_mime("video/x-matroska"));
        assert!(MediaKind::Image.accepts_mime("IMAGE/PNG"));
        assert!(!MediaKind::Image.accepts_mime("video/mp4"));
        assert!(!MediaKind::Audio.accepts_mime("application/pdf"));
    }
}
