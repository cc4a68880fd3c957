use crate::error::DispatchError;
use crate::response::{AnalysisResult, ScoreSplit};
use crate::style::{PointKind, PointTone, PresentationStyle, Verdict, classify_point};

/// Everything the result card shows, already styled.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub badge: Badge,
    pub header_class: &'static str,
    pub bar: ConfidenceBar,
    pub alert: Alert,
    pub details: Vec<DetailBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub class: &'static str,
    pub icon: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBar {
    pub class: &'static str,
    pub value: f64,
}

impl ConfidenceBar {
    /// `82` → `82%`, `82.5` → `82.5%`.
    pub fn text(&self) -> String {
        format!("{}%", self.value)
    }

    pub fn width(&self) -> String {
        format!("width: {}%", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub class: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    Suspicious,
    Credible,
}

impl IndicatorKind {
    pub fn title(self) -> &'static str {
        match self {
            IndicatorKind::Suspicious => "Suspicious Terms:",
            IndicatorKind::Credible => "Credible Terms:",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            IndicatorKind::Suspicious => PointTone::Fake.class(),
            IndicatorKind::Credible => PointTone::Credible.class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointItem {
    Separator(String),
    Point { tone: PointTone, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReasonSection {
    pub title: String,
    pub explanation: String,
    pub technical: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    ExcessivePunctuation,
    ExcessiveCaps,
}

impl Warning {
    pub fn title(self) -> &'static str {
        match self {
            Warning::ExcessivePunctuation => "Excessive Punctuation:",
            Warning::ExcessiveCaps => "Excessive Caps:",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Warning::ExcessivePunctuation => "Sensationalism detected.",
            Warning::ExcessiveCaps => "Aggressive styling detected.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Warning::ExcessivePunctuation => "fa-exclamation",
            Warning::ExcessiveCaps => "fa-font",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBlock {
    ScoreMeter(ScoreSplit),
    Indicators { kind: IndicatorKind, terms: Vec<String> },
    AnalysisPoints(Vec<PointItem>),
    Reasons(Vec<ReasonSection>),
    Warning(Warning),
    NoAnomalies,
    Unavailable,
}

impl DetailBlock {
    pub fn placeholder_text(&self) -> Option<&'static str> {
        match self {
            DetailBlock::NoAnomalies => Some("No specific anomalies detected."),
            DetailBlock::Unavailable => Some("No analysis details available."),
            _ => None,
        }
    }
}

pub fn present(result: &AnalysisResult) -> RenderedView {
    let verdict = Verdict::classify(&result.prediction);
    let style = verdict.style();

    RenderedView {
        badge: Badge {
            class: style.badge_class,
            icon: style.icon,
            label: result.prediction.clone(),
        },
        header_class: style.header_class,
        bar: ConfidenceBar {
            class: style.bar_class,
            value: result.confidence,
        },
        alert: Alert {
            class: style.alert_class,
            message: result.message.clone(),
        },
        details: detail_blocks(result),
    }
}

/// Error card. Label matching is never applied here.
pub fn present_error(message: &str) -> RenderedView {
    let style = PresentationStyle::error();

    RenderedView {
        badge: Badge {
            class: style.badge_class,
            icon: style.icon,
            label: "Error".to_string(),
        },
        header_class: style.header_class,
        bar: ConfidenceBar {
            class: style.bar_class,
            value: 0.0,
        },
        alert: Alert {
            class: style.alert_class,
            message: message.to_string(),
        },
        details: vec![DetailBlock::Unavailable],
    }
}

pub fn present_outcome(outcome: &Result<AnalysisResult, DispatchError>) -> RenderedView {
    match outcome {
        Ok(result) => present(result),
        Err(e) => present_error(&e.to_string()),
    }
}

fn detail_blocks(result: &AnalysisResult) -> Vec<DetailBlock> {
    let details = &result.details;
    let mut blocks = Vec::new();

    if let Some(split) = details.score_split() {
        blocks.push(DetailBlock::ScoreMeter(split));
    }

    for (kind, terms) in [
        (IndicatorKind::Suspicious, details.fake_indicators()),
        (IndicatorKind::Credible, details.credible_indicators()),
    ] {
        if !terms.is_empty() {
            blocks.push(DetailBlock::Indicators {
                kind,
                terms: terms.to_vec(),
            });
        }
    }

    let points = details.analysis_points();
    if !points.is_empty() {
        let items = points
            .iter()
            .map(|point| match classify_point(point, &result.prediction) {
                PointKind::Separator(title) => PointItem::Separator(title),
                PointKind::Point(tone) => PointItem::Point {
                    tone,
                    text: point.clone(),
                },
            })
            .collect();
        blocks.push(DetailBlock::AnalysisPoints(items));
    }

    let reasons = details.detailed_reasons();
    if !reasons.is_empty() {
        let sections = reasons
            .iter()
            .enumerate()
            .map(|(index, reason)| ReasonSection {
                title: reason.title.clone(),
                explanation: reason.explanation.clone(),
                technical: reason.technical.clone(),
                expanded: index == 0,
            })
            .collect();
        blocks.push(DetailBlock::Reasons(sections));
    }

    if details.excessive_punctuation() {
        blocks.push(DetailBlock::Warning(Warning::ExcessivePunctuation));
    }
    if details.excessive_caps() {
        blocks.push(DetailBlock::Warning(Warning::ExcessiveCaps));
    }

    if blocks.is_empty() {
        blocks.push(DetailBlock::NoAnomalies);
    }
    blocks
}
