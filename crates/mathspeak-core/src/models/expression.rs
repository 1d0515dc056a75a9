use std::fmt;

use serde::{Deserialize, Serialize};

/// Score below which an expression is classified basic.
pub const BASIC_COMPLEXITY_CEILING: f64 = 0.3;

/// Score at or above which an expression is classified advanced.
pub const ADVANCED_COMPLEXITY_FLOOR: f64 = 0.7;

/// How the expression appeared in its source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionKind {
    #[default]
    Inline,
    Display,
}

/// Intended listener. Rules may pick a different template per level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AudienceLevel {
    Elementary,
    HighSchool,
    #[default]
    Undergraduate,
    Graduate,
    Research,
}

impl AudienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elementary => "elementary",
            Self::HighSchool => "high_school",
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
            Self::Research => "research",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "elementary" => Some(Self::Elementary),
            "high_school" => Some(Self::HighSchool),
            "undergraduate" => Some(Self::Undergraduate),
            "graduate" => Some(Self::Graduate),
            "research" => Some(Self::Research),
            _ => None,
        }
    }
}

impl fmt::Display for AudienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complexity classification. Basic and Advanced select the post-processing
/// phrase tables; Intermediate selects neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Basic,
    Intermediate,
    Advanced,
}

/// Complexity metrics attached by the expression parser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    /// Overall complexity score (0.0–1.0).
    pub score: f64,
    pub level: ComplexityLevel,
}

impl ComplexityMetrics {
    pub fn new(score: f64, level: ComplexityLevel) -> Self {
        Self { score, level }
    }

    /// Classify a raw score using the standard thresholds.
    pub fn from_score(score: f64) -> Self {
        let level = if score < BASIC_COMPLEXITY_CEILING {
            ComplexityLevel::Basic
        } else if score >= ADVANCED_COMPLEXITY_FLOOR {
            ComplexityLevel::Advanced
        } else {
            ComplexityLevel::Intermediate
        };
        Self { score, level }
    }

    pub fn is_basic(&self) -> bool {
        self.level == ComplexityLevel::Basic
    }

    pub fn is_advanced(&self) -> bool {
        self.level == ComplexityLevel::Advanced
    }
}

/// A parsed mathematical expression.
///
/// Produced by the expression parser. The engine only reads it, except for
/// `transformations`, which receives one audit label per applied rule after a
/// successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub id: String,
    pub raw_text: String,
    #[serde(default)]
    pub kind: Option<ExpressionKind>,
    #[serde(default)]
    pub subject_area: Option<String>,
    #[serde(default)]
    pub audience_level: Option<AudienceLevel>,
    #[serde(default)]
    pub complexity: Option<ComplexityMetrics>,
    #[serde(default)]
    pub variables: Vec<String>,
    /// Audit labels of applied transformations.
    #[serde(default)]
    pub transformations: Vec<String>,
}

impl Expression {
    /// Create an expression with a fresh random id and no metadata.
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            raw_text: raw_text.into(),
            kind: None,
            subject_area: None,
            audience_level: None,
            complexity: None,
            variables: Vec::new(),
            transformations: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_kind(mut self, kind: ExpressionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_subject_area(mut self, subject_area: impl Into<String>) -> Self {
        self.subject_area = Some(subject_area.into());
        self
    }

    pub fn with_audience_level(mut self, level: AudienceLevel) -> Self {
        self.audience_level = Some(level);
        self
    }

    pub fn with_complexity(mut self, complexity: ComplexityMetrics) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn with_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = variables.into_iter().map(Into::into).collect();
        self
    }

    /// Detected subject area, falling back to the general tag.
    pub fn subject_area_or_general(&self) -> &str {
        self.subject_area
            .as_deref()
            .unwrap_or(crate::constants::GENERAL_SUBJECT_AREA)
    }

    pub fn complexity_level(&self) -> Option<ComplexityLevel> {
        self.complexity.map(|c| c.level)
    }
}
