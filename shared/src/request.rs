use crate::error::ValidationError;
use crate::mode::{AnalysisMode, ContentType, MediaKind};
use serde_json::{Value, json};

pub const MIN_TEXT_CHARS: usize = 20;
pub const MIN_AI_CONTENT_CHARS: usize = 50;

/// Logical backend endpoint. Paths are resolved through `ClientConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    TextAnalysis,
    MediaAnalysis,
    AiDetection,
}

/// One user submission. `F` is the platform file handle (a browser `File`
/// in the frontend, anything cheap in tests).
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest<F> {
    Text {
        text: String,
    },
    Media {
        kind: MediaKind,
        file: Option<F>,
        context: String,
    },
    AiContent {
        content: String,
        content_type: ContentType,
        deep_analysis: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipartForm<F> {
    pub file: F,
    /// Text parts, sent after the file part in this order.
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    Json(Value),
    Multipart(MultipartForm<F>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payload<F> {
    pub endpoint: Endpoint,
    pub body: RequestBody<F>,
}

impl<F> AnalysisRequest<F> {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            AnalysisRequest::Text { .. } => AnalysisMode::Text,
            AnalysisRequest::Media { kind, .. } => AnalysisMode::from(*kind),
            AnalysisRequest::AiContent { .. } => AnalysisMode::Ai,
        }
    }

    /// Checks the mode's preconditions and builds the body to send.
    pub fn into_payload(self) -> Result<Payload<F>, ValidationError> {
        match self {
            AnalysisRequest::Text { text } => {
                let text = text.trim();
                let actual = text.chars().count();
                if actual < MIN_TEXT_CHARS {
                    return Err(ValidationError::TextTooShort {
                        min: MIN_TEXT_CHARS,
                        actual,
                    });
                }
                Ok(Payload {
                    endpoint: Endpoint::TextAnalysis,
                    body: RequestBody::Json(json!({ "text": text })),
                })
            }
            AnalysisRequest::AiContent {
                content,
                content_type,
                deep_analysis,
            } => {
                let content = content.trim();
                let actual = content.chars().count();
                if actual < MIN_AI_CONTENT_CHARS {
                    return Err(ValidationError::AiContentTooShort {
                        min: MIN_AI_CONTENT_CHARS,
                        actual,
                    });
                }
                Ok(Payload {
                    endpoint: Endpoint::AiDetection,
                    body: RequestBody::Json(json!({
                        "content": content,
                        "content_type": content_type,
                        "deep_analysis": deep_analysis,
                    })),
                })
            }
            AnalysisRequest::Media {
                kind,
                file,
                context,
            } => {
                let file = file.ok_or(ValidationError::MissingFile(kind))?;
                Ok(Payload {
                    endpoint: Endpoint::MediaAnalysis,
                    body: RequestBody::Multipart(MultipartForm {
                        file,
                        fields: vec![
                            ("type", kind.to_string()),
                            ("context", context.trim().to_string()),
                        ],
                    }),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_request(len: usize) -> AnalysisRequest<()> {
        AnalysisRequest::Text {
            text: "a".repeat(len),
        }
    }

    #[test]
    fn test_text_of_19_chars_is_rejected() {
        let err = text_request(19).into_payload().unwrap_err();
        assert_eq!(err, ValidationError::TextTooShort { min: 20, actual: 19 });
    }

    #[test]
    fn test_text_of_20_chars_is_accepted() {
        let payload = text_request(20).into_payload().unwrap();
        assert_eq!(payload.endpoint, Endpoint::TextAnalysis);
        assert_eq!(
            payload.body,
            RequestBody::Json(json!({ "text": "a".repeat(20) }))
        );
    }

    #[test]
    fn test_text_is_trimmed_before_counting() {
        let request: AnalysisRequest<()> = AnalysisRequest::Text {
            text: format!("   {}\n\n", "b".repeat(19)),
        };
        assert!(request.into_payload().is_err());
    }

    #[test]
    fn test_ai_content_boundary() {
        let short: AnalysisRequest<()> = AnalysisRequest::AiContent {
            content: "x".repeat(49),
            content_type: ContentType::Text,
            deep_analysis: true,
        };
        assert!(matches!(
            short.into_payload(),
            Err(ValidationError::AiContentTooShort { actual: 49, .. })
        ));

        let ok: AnalysisRequest<()> = AnalysisRequest::AiContent {
            content: "x".repeat(50),
            content_type: ContentType::Academic,
            deep_analysis: false,
        };
        let payload = ok.into_payload().unwrap();
        assert_eq!(payload.endpoint, Endpoint::AiDetection);
        assert_eq!(
            payload.body,
            RequestBody::Json(json!({
                "content": "x".repeat(50),
                "content_type": "academic",
                "deep_analysis": false,
            }))
        );
    }

    #[test]
    fn test_media_without_file_names_the_media_type() {
        let request: AnalysisRequest<&str> = AnalysisRequest::Media {
            kind: MediaKind::Video,
            file: None,
            context: String::new(),
        };
        let err = request.into_payload().unwrap_err();
        assert_eq!(err.to_string(), "Please upload a video file first.");
    }

    #[test]
    fn test_media_form_fields_follow_the_file() {
        let request = AnalysisRequest::Media {
            kind: MediaKind::Image,
            file: Some("photo.jpg"),
            context: "  protest photo  ".to_string(),
        };
        assert_eq!(request.mode(), AnalysisMode::Image);

        let payload = request.into_payload().unwrap();
        assert_eq!(payload.endpoint, Endpoint::MediaAnalysis);
        match payload.body {
            RequestBody::Multipart(form) => {
                assert_eq!(form.file, "photo.jpg");
                assert_eq!(
                    form.fields,
                    vec![
                        ("type", "image".to_string()),
                        ("context", "protest photo".to_string())
                    ]
                );
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }
}
