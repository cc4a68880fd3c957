use crate::request::Endpoint;
use serde::{Deserialize, Serialize};

/// Where the classification API lives and how the result card behaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin prefix; empty means same-origin relative URLs.
    pub api_base: String,
    /// `/api/analyze/text`, or the legacy `/api/analyze`.
    pub text_path: String,
    pub media_path: String,
    pub ai_detection_path: String,
    /// Delay before the confidence bar is filled, in milliseconds.
    pub reveal_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            text_path: "/api/analyze/text".to_string(),
            media_path: "/api/analyze/media".to_string(),
            ai_detection_path: "/api/analyze/ai-detection".to_string(),
            reveal_delay_ms: 100,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn path(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::TextAnalysis => &self.text_path,
            Endpoint::MediaAnalysis => &self.media_path,
            Endpoint::AiDetection => &self.ai_detection_path,
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = self.path(endpoint);
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Applies a JSON override on top of `self`; absent keys keep their
    /// current value.
    pub fn merged_with(&self, overrides: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut merged = serde_json::to_value(self)?;
        if let (Some(target), serde_json::Value::Object(patch)) = (merged.as_object_mut(), overrides) {
            for (key, value) in patch {
                target.insert(key, value);
            }
        }
        serde_json::from_value(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_urls_are_same_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.url(Endpoint::TextAnalysis), "/api/analyze/text");
        assert_eq!(config.url(Endpoint::MediaAnalysis), "/api/analyze/media");
        assert_eq!(
            config.url(Endpoint::AiDetection),
            "/api/analyze/ai-detection"
        );
    }

    #[test]
    fn test_base_and_path_join_without_double_slash() {
        let config = ClientConfig::default().with_api_base("https://detector.local/");
        assert_eq!(
            config.url(Endpoint::MediaAnalysis),
            "https://detector.local/api/analyze/media"
        );

        let config = ClientConfig {
            text_path: "api/analyze".to_string(),
            ..ClientConfig::default().with_api_base("http://10.0.0.2:5000")
        };
        assert_eq!(
            config.url(Endpoint::TextAnalysis),
            "http://10.0.0.2:5000/api/analyze"
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"text_path": "/api/analyze"}"#).unwrap();
        assert_eq!(config.text_path, "/api/analyze");
        assert_eq!(config.media_path, "/api/analyze/media");
        assert_eq!(config.reveal_delay_ms, 100);
    }

    #[test]
    fn test_override_merges_onto_existing_values() {
        let base = ClientConfig::default().with_api_base("https://build-time.example");
        let merged = base.merged_with(json!({ "reveal_delay_ms": 0 })).unwrap();
        assert_eq!(merged.api_base, "https://build-time.example");
        assert_eq!(merged.reveal_delay_ms, 0);

        assert!(base.merged_with(json!({ "reveal_delay_ms": "soon" })).is_err());
        assert_eq!(base.merged_with(json!(null)).unwrap(), base);
    }
}
