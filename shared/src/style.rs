/// Classification derived from a prediction label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Human,
    Real,
    AiGenerated,
    Fake,
    Uncertain,
}

/// Ordered rule table; first match wins. Labels naming both a real and a
/// fake outcome resolve to the real side.
const RULES: &[(&str, Verdict)] = &[
    ("Human", Verdict::Human),
    ("Real", Verdict::Real),
    ("AI", Verdict::AiGenerated),
    ("Fake", Verdict::Fake),
];

impl Verdict {
    pub fn classify(label: &str) -> Self {
        RULES
            .iter()
            .find(|(needle, _)| label.contains(needle))
            .map(|(_, verdict)| *verdict)
            .unwrap_or(Verdict::Uncertain)
    }

    pub fn style(self) -> PresentationStyle {
        match self {
            Verdict::Human => PresentationStyle {
                badge_class: "badge-human",
                bar_class: "progress-bar-real",
                header_class: "result-header-human",
                alert_class: "alert-real",
                icon: "fa-user",
            },
            Verdict::Real => PresentationStyle {
                badge_class: "badge-real",
                bar_class: "progress-bar-real",
                header_class: "result-header-real",
                alert_class: "alert-real",
                icon: "fa-check-circle",
            },
            Verdict::AiGenerated => PresentationStyle {
                badge_class: "badge-ai",
                bar_class: "progress-bar-ai",
                header_class: "result-header-ai",
                alert_class: "alert-ai",
                icon: "fa-robot",
            },
            Verdict::Fake => PresentationStyle {
                badge_class: "badge-fake",
                bar_class: "progress-bar-fake",
                header_class: "result-header-fake",
                alert_class: "alert-fake",
                icon: "fa-times-circle",
            },
            Verdict::Uncertain => PresentationStyle {
                badge_class: "badge-uncertain",
                bar_class: "progress-bar-uncertain",
                header_class: "result-header-uncertain",
                alert_class: "alert-uncertain",
                icon: "fa-question-circle",
            },
        }
    }

    /// Tone used for analysis points that carry no marker glyph.
    pub fn tone(self) -> PointTone {
        match self {
            Verdict::Human | Verdict::Real => PointTone::Credible,
            Verdict::AiGenerated => PointTone::Ai,
            Verdict::Fake => PointTone::Fake,
            Verdict::Uncertain => PointTone::Neutral,
        }
    }
}

/// CSS classes and icon for the result card. Never stored; always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationStyle {
    pub badge_class: &'static str,
    pub bar_class: &'static str,
    pub header_class: &'static str,
    pub alert_class: &'static str,
    pub icon: &'static str,
}

impl PresentationStyle {
    /// Fixed neutral style for failures, independent of any label.
    pub fn error() -> Self {
        Self {
            badge_class: "badge-error",
            bar_class: "",
            header_class: "bg-secondary text-white",
            alert_class: "alert-secondary",
            icon: "fa-exclamation-triangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointTone {
    Fake,
    Ai,
    Credible,
    Neutral,
}

impl PointTone {
    pub fn class(self) -> &'static str {
        match self {
            PointTone::Fake => "indicator-fake",
            PointTone::Ai => "indicator-ai",
            PointTone::Credible => "indicator-credible",
            PointTone::Neutral => "indicator-neutral",
        }
    }
}

const WARNING_MARKERS: &[&str] = &["🚨", "⚠️", "🤖"];
const CREDIBLE_MARKERS: &[&str] = &["✅", "👤"];
const SEPARATOR_MARKER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointKind {
    /// Section heading, marker stripped.
    Separator(String),
    Point(PointTone),
}

/// Classifies one analysis point against the overall prediction label.
pub fn classify_point(point: &str, label: &str) -> PointKind {
    if point.starts_with(SEPARATOR_MARKER) {
        return PointKind::Separator(point.replace(SEPARATOR_MARKER, "").trim().to_string());
    }

    let tone = if WARNING_MARKERS.iter().any(|m| point.contains(m)) {
        if label.contains("AI") {
            PointTone::Ai
        } else {
            PointTone::Fake
        }
    } else if CREDIBLE_MARKERS.iter().any(|m| point.contains(m)) {
        PointTone::Credible
    } else {
        Verdict::classify(label).tone()
    };

    PointKind::Point(tone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_labels() {
        assert_eq!(Verdict::classify("Likely Real"), Verdict::Real);
        assert_eq!(Verdict::classify("Likely Fake"), Verdict::Fake);
        assert_eq!(Verdict::classify("Likely AI-Generated"), Verdict::AiGenerated);
        assert_eq!(Verdict::classify("Likely Human-Written"), Verdict::Human);
        assert_eq!(Verdict::classify("Mixed/Uncertain"), Verdict::Uncertain);
        assert_eq!(Verdict::classify("Uncertain"), Verdict::Uncertain);
        assert_eq!(Verdict::classify(""), Verdict::Uncertain);
    }

    #[test]
    fn test_human_wins_over_everything() {
        for label in ["Human", "Fake Human", "AI-Generated or Human", "Real Human"] {
            assert_eq!(Verdict::classify(label), Verdict::Human, "label {label}");
        }
    }

    #[test]
    fn test_ai_is_distinct_from_fake() {
        assert_eq!(Verdict::classify("Possibly AI"), Verdict::AiGenerated);
        assert_eq!(Verdict::classify("Fake AI-Generated"), Verdict::AiGenerated);
        assert_ne!(Verdict::AiGenerated.style(), Verdict::Fake.style());
        assert_eq!(Verdict::classify("Real but AI-touched"), Verdict::Real);
    }

    #[test]
    fn test_human_shares_bar_and_alert_with_real() {
        let human = Verdict::Human.style();
        let real = Verdict::Real.style();
        assert_eq!(human.bar_class, real.bar_class);
        assert_eq!(human.alert_class, real.alert_class);
        assert_ne!(human.badge_class, real.badge_class);
        assert_eq!(human.icon, "fa-user");
    }

    #[test]
    fn test_separator_points() {
        assert_eq!(
            classify_point("--- Text Context Analysis ---", "Likely Fake"),
            PointKind::Separator("Text Context Analysis".to_string())
        );
    }

    #[test]
    fn test_marker_glyphs_override_label_tone() {
        assert_eq!(
            classify_point("🚨 Lighting mismatch", "Likely Real"),
            PointKind::Point(PointTone::Fake)
        );
        assert_eq!(
            classify_point("⚠️ Uniform cadence", "Likely AI-Generated"),
            PointKind::Point(PointTone::Ai)
        );
        assert_eq!(
            classify_point("✅ Metadata intact", "Likely Fake"),
            PointKind::Point(PointTone::Credible)
        );
        assert_eq!(
            classify_point("👤 Personal anecdotes", "Mixed/Uncertain"),
            PointKind::Point(PointTone::Credible)
        );
    }

    #[test]
    fn test_unmarked_points_follow_the_verdict() {
        assert_eq!(
            classify_point("Frame rate 30fps", "Likely Fake"),
            PointKind::Point(PointTone::Fake)
        );
        assert_eq!(
            classify_point("Frame rate 30fps", "Likely Human-Written"),
            PointKind::Point(PointTone::Credible)
        );
        assert_eq!(
            classify_point("Frame rate 30fps", "Uncertain"),
            PointKind::Point(PointTone::Neutral)
        );
    }
}
