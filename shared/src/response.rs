use crate::mode::AnalysisMode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response envelope shared by all three endpoints, as it comes off the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResponse {
    pub prediction: Option<String>,
    pub confidence: Option<f64>,
    pub message: Option<String>,
    pub details: Option<Value>,
    pub error: Option<String>,
}

/// A decoded verdict, ready for the presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub mode: AnalysisMode,
    pub prediction: String,
    /// Percentage in `[0, 100]`.
    pub confidence: f64,
    pub message: String,
    pub details: AnalysisDetails,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetailedReason {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub technical: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextDetails {
    pub fake_indicators_found: Vec<String>,
    pub credible_indicators_found: Vec<String>,
    pub excessive_punctuation: bool,
    pub excessive_caps: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaDetails {
    pub analysis_points: Vec<String>,
    pub detailed_reasons: Vec<DetailedReason>,
    pub text_context_provided: bool,
    pub text_fake_indicators: Option<f64>,
    pub text_credible_indicators: Option<f64>,
    pub media_type: Option<String>,
    pub file_size: Option<u64>,
    pub ml_model_used: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AiDetails {
    pub analysis_points: Vec<String>,
    pub detailed_reasons: Vec<DetailedReason>,
    pub ai_score: Option<f64>,
    pub human_score: Option<f64>,
    pub content_type: Option<String>,
    pub deep_analysis_used: Option<bool>,
    pub ai_patterns_found: Option<u64>,
    pub human_patterns_found: Option<u64>,
}

/// Mode-specific details, decoded once at the response boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisDetails {
    Text(TextDetails),
    Media(MediaDetails),
    AiDetection(AiDetails),
}

/// AI/human split reported by the AI-detection endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSplit {
    pub ai_score: f64,
    pub human_score: f64,
    pub content_type: String,
    pub ai_patterns_found: u64,
    pub human_patterns_found: u64,
}

impl AnalysisResponse {
    /// Parses a response body. Only a body that is not a JSON object fails;
    /// a mistyped envelope field is dropped on its own.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let map: Map<String, Value> = serde_json::from_value(value)?;
        let fields = FieldReader::new(&map);
        Ok(Self {
            prediction: fields.get("prediction"),
            confidence: fields.get("confidence"),
            message: fields.get("message"),
            details: map.get("details").filter(|v| !v.is_null()).cloned(),
            error: fields.get("error"),
        })
    }

    /// The `error` field, if it carries anything.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    pub fn is_invalid(&self) -> bool {
        self.prediction.as_deref() == Some("Invalid")
    }

    pub fn into_result(self, mode: AnalysisMode) -> AnalysisResult {
        let empty = Map::new();
        let details = match &self.details {
            Some(Value::Object(map)) => map,
            Some(other) if !other.is_null() => {
                log::warn!("Ignoring non-object details payload: {}", other);
                &empty
            }
            _ => &empty,
        };

        AnalysisResult {
            mode,
            prediction: self.prediction.unwrap_or_default(),
            confidence: clamp_confidence(self.confidence.unwrap_or(0.0)),
            message: self.message.unwrap_or_default(),
            details: AnalysisDetails::decode(mode, details),
        }
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Reads optional fields one at a time so a single malformed field only
/// suppresses itself.
struct FieldReader<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.map.get(key).filter(|v| !v.is_null())?;
        match T::deserialize(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("Dropping malformed field `{}`: {}", key, e);
                None
            }
        }
    }

    fn flag(&self, key: &str) -> bool {
        self.get::<bool>(key).unwrap_or(false)
    }

    fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(items) = self.get::<Vec<Value>>(key) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match T::deserialize(item) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    log::warn!("Skipping malformed entry in `{}`: {}", key, e);
                    None
                }
            })
            .collect()
    }
}

impl AnalysisDetails {
    pub fn empty(mode: AnalysisMode) -> Self {
        Self::decode(mode, &Map::new())
    }

    pub fn decode(mode: AnalysisMode, map: &Map<String, Value>) -> Self {
        let fields = FieldReader::new(map);
        match mode {
            AnalysisMode::Text => AnalysisDetails::Text(TextDetails {
                fake_indicators_found: fields.list("fake_indicators_found"),
                credible_indicators_found: fields.list("credible_indicators_found"),
                excessive_punctuation: fields.flag("excessive_punctuation"),
                excessive_caps: fields.flag("excessive_caps"),
            }),
            AnalysisMode::Image | AnalysisMode::Audio | AnalysisMode::Video => {
                AnalysisDetails::Media(MediaDetails {
                    analysis_points: fields.list("analysis_points"),
                    detailed_reasons: fields.list("detailed_reasons"),
                    text_context_provided: fields.flag("text_context_provided"),
                    text_fake_indicators: fields.get("text_fake_indicators"),
                    text_credible_indicators: fields.get("text_credible_indicators"),
                    media_type: fields.get("media_type"),
                    file_size: fields.get("file_size"),
                    ml_model_used: fields.flag("ml_model_used"),
                })
            }
            AnalysisMode::Ai => AnalysisDetails::AiDetection(AiDetails {
                analysis_points: fields.list("analysis_points"),
                detailed_reasons: fields.list("detailed_reasons"),
                ai_score: fields.get("ai_score"),
                human_score: fields.get("human_score"),
                content_type: fields.get("content_type"),
                deep_analysis_used: fields.get("deep_analysis_used"),
                ai_patterns_found: fields.get("ai_patterns_found"),
                human_patterns_found: fields.get("human_patterns_found"),
            }),
        }
    }

    /// Present only when both scores were reported.
    pub fn score_split(&self) -> Option<ScoreSplit> {
        let AnalysisDetails::AiDetection(ai) = self else {
            return None;
        };
        Some(ScoreSplit {
            ai_score: ai.ai_score?,
            human_score: ai.human_score?,
            content_type: ai
                .content_type
                .clone()
                .unwrap_or_else(|| "text".to_string()),
            ai_patterns_found: ai.ai_patterns_found.unwrap_or(0),
            human_patterns_found: ai.human_patterns_found.unwrap_or(0),
        })
    }

    pub fn fake_indicators(&self) -> &[String] {
        match self {
            AnalysisDetails::Text(text) => &text.fake_indicators_found,
            _ => &[],
        }
    }

    pub fn credible_indicators(&self) -> &[String] {
        match self {
            AnalysisDetails::Text(text) => &text.credible_indicators_found,
            _ => &[],
        }
    }

    pub fn analysis_points(&self) -> &[String] {
        match self {
            AnalysisDetails::Media(media) => &media.analysis_points,
            AnalysisDetails::AiDetection(ai) => &ai.analysis_points,
            AnalysisDetails::Text(_) => &[],
        }
    }

    pub fn detailed_reasons(&self) -> &[DetailedReason] {
        match self {
            AnalysisDetails::Media(media) => &media.detailed_reasons,
            AnalysisDetails::AiDetection(ai) => &ai.detailed_reasons,
            AnalysisDetails::Text(_) => &[],
        }
    }

    pub fn excessive_punctuation(&self) -> bool {
        matches!(self, AnalysisDetails::Text(text) if text.excessive_punctuation)
    }

    pub fn excessive_caps(&self) -> bool {
        matches!(self, AnalysisDetails::Text(text) if text.excessive_caps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(mode: AnalysisMode, body: Value) -> AnalysisResult {
        AnalysisResponse::from_value(body).unwrap().into_result(mode)
    }

    #[test]
    fn test_text_details_decode() {
        let result = decode(
            AnalysisMode::Text,
            json!({
                "prediction": "Likely Fake",
                "confidence": 82,
                "message": "flagged",
                "details": {
                    "fake_indicators_found": ["breaking", "shocking"],
                    "credible_indicators_found": [],
                    "excessive_punctuation": true,
                    "excessive_caps": false
                }
            }),
        );

        assert_eq!(result.prediction, "Likely Fake");
        assert_eq!(result.confidence, 82.0);
        assert_eq!(result.details.fake_indicators(), ["breaking", "shocking"]);
        assert!(result.details.credible_indicators().is_empty());
        assert!(result.details.excessive_punctuation());
        assert!(!result.details.excessive_caps());
    }

    #[test]
    fn test_missing_envelope_fields_default() {
        let result = decode(AnalysisMode::Image, json!({}));
        assert_eq!(result.prediction, "");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.message, "");
        assert_eq!(result.details, AnalysisDetails::empty(AnalysisMode::Image));
    }

    #[test]
    fn test_confidence_is_clamped_to_percentage_range() {
        let result = decode(AnalysisMode::Text, json!({ "confidence": 140.5 }));
        assert_eq!(result.confidence, 100.0);
        let result = decode(AnalysisMode::Text, json!({ "confidence": -3 }));
        assert_eq!(result.confidence, 0.0);
        let result = decode(AnalysisMode::Text, json!({ "confidence": 67.5 }));
        assert_eq!(result.confidence, 67.5);
    }

    #[test]
    fn test_malformed_field_only_suppresses_itself() {
        let result = decode(
            AnalysisMode::Ai,
            json!({
                "prediction": "Likely AI-Generated",
                "details": {
                    "ai_score": "high",
                    "human_score": 12.5,
                    "analysis_points": ["🤖 Repetitive transitions", 42, "Uniform sentence length"],
                    "detailed_reasons": [
                        { "title": "Low burstiness", "explanation": "e", "technical": "t" },
                        "not a reason"
                    ]
                }
            }),
        );

        assert_eq!(result.details.score_split(), None);
        assert_eq!(
            result.details.analysis_points(),
            ["🤖 Repetitive transitions", "Uniform sentence length"]
        );
        assert_eq!(result.details.detailed_reasons().len(), 1);
        assert_eq!(result.details.detailed_reasons()[0].title, "Low burstiness");
    }

    #[test]
    fn test_score_split_defaults() {
        let result = decode(
            AnalysisMode::Ai,
            json!({ "details": { "ai_score": 71.3, "human_score": 28.7 } }),
        );
        let split = result.details.score_split().unwrap();
        assert_eq!(split.ai_score, 71.3);
        assert_eq!(split.human_score, 28.7);
        assert_eq!(split.content_type, "text");
        assert_eq!(split.ai_patterns_found, 0);
        assert_eq!(split.human_patterns_found, 0);
    }

    #[test]
    fn test_media_details_decode() {
        let result = decode(
            AnalysisMode::Video,
            json!({
                "prediction": "Likely Real",
                "confidence": 64,
                "message": "ok",
                "details": {
                    "analysis_points": ["✅ Natural blink rate"],
                    "detailed_reasons": [],
                    "text_context_provided": false,
                    "media_type": "video",
                    "file_size": 1048576,
                    "ml_model_used": true
                }
            }),
        );

        match &result.details {
            AnalysisDetails::Media(media) => {
                assert_eq!(media.media_type.as_deref(), Some("video"));
                assert_eq!(media.file_size, Some(1_048_576));
                assert!(media.ml_model_used);
                assert!(!media.text_context_provided);
            }
            other => panic!("expected media details, got {:?}", other),
        }
        assert!(result.details.fake_indicators().is_empty());
    }

    #[test]
    fn test_non_object_details_are_ignored() {
        let result = decode(AnalysisMode::Text, json!({ "details": ["oops"] }));
        assert_eq!(result.details, AnalysisDetails::empty(AnalysisMode::Text));
    }

    #[test]
    fn test_empty_error_field_is_not_an_error() {
        let response =
            AnalysisResponse::from_value(json!({ "error": "", "prediction": "Real" })).unwrap();
        assert_eq!(response.error_message(), None);
        assert!(!response.is_invalid());
    }

    #[test]
    fn test_mistyped_envelope_fields_drop_individually() {
        let response = AnalysisResponse::parse(
            r#"{"error":"x","confidence":"n/a","prediction":7,"message":"kept"}"#,
        )
        .unwrap();
        assert_eq!(response.error_message(), Some("x"));
        assert_eq!(response.confidence, None);
        assert_eq!(response.prediction, None);
        assert_eq!(response.message.as_deref(), Some("kept"));
    }

    #[test]
    fn test_non_object_body_fails_to_parse() {
        assert!(AnalysisResponse::parse("[1, 2]").is_err());
        assert!(AnalysisResponse::parse("<html>").is_err());
    }
}
