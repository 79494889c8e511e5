//! Splitting raw model output into reflection and strategy sections
//!
//! The model is asked for a `Reflection:` section followed by a `Strategy:`
//! section, but nothing enforces that. Parsing is best effort: a missing
//! marker leaves everything in the reflection and the strategy empty.

const REFLECTION_LABEL: &str = "Reflection:";
const STRATEGY_MARKER: &str = "Strategy:";

/// Model output, split at the first strategy marker when there is one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    Split { reflection: String, strategy: String },
    Unsplit { text: String },
}

impl ParsedResponse {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(STRATEGY_MARKER) {
            Some((before, after)) => Self::Split {
                reflection: before.replace(REFLECTION_LABEL, "").trim().to_string(),
                strategy: after.trim().to_string(),
            },
            None => Self::Unsplit {
                text: raw.trim().to_string(),
            },
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }

    /// `(reflection, strategy)`; the strategy is empty for unsplit output
    pub fn into_parts(self) -> (String, String) {
        match self {
            Self::Split {
                reflection,
                strategy,
            } => (reflection, strategy),
            Self::Unsplit { text } => (text, String::new()),
        }
    }
}

pub fn split_response(raw: &str) -> (String, String) {
    ParsedResponse::parse(raw).into_parts()
}
