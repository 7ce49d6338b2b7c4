use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Display band for a completeness score. The four tiers form a contiguous
/// partition of [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Attention,
    Moderate,
    Good,
    Excellent,
}

impl Tier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Attention, Self::Moderate, Self::Good, Self::Excellent]
    }

    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Excellent,
            70..=89 => Self::Good,
            50..=69 => Self::Moderate,
            _ => Self::Attention,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Attention => "Needs Attention",
        }
    }
}

/// Normalized set of findings detected for one subject. Transient per request;
/// the engine never caches or mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedFindings(BTreeSet<String>);

impl DetectedFindings {
    /// Builds the set from free-form labels, normalizing each one. Blank
    /// labels are dropped.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = labels
            .into_iter()
            .map(|label| normalize(label.as_ref()))
            .filter(|label| !label.is_empty())
            .collect();
        Self(normalized)
    }

    /// Membership test for a catalog label. The label is normalized before
    /// lookup so both sides of the comparison agree.
    pub fn contains_label(&self, label: &str) -> bool {
        self.0.contains(&normalize(label))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Completeness score for a single sub-feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubScoreResult {
    pub name: String,
    pub score: u8,
    pub tier: Tier,
    pub detected: usize,
    pub total: usize,
}

/// Completeness score for a category, carrying its per-sub-feature detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    pub key: String,
    pub name: String,
    pub score: u8,
    pub tier: Tier,
    pub sub_features: Vec<SubScoreResult>,
}

/// Anatomical-area view: completeness score plus the strength/improvement
/// split the detail screens render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaResult {
    pub name: String,
    pub score: u8,
    pub tier: Tier,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub detected: usize,
    pub total: usize,
    pub has_interest: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeClassification {
    Strength,
    Improvement,
}

impl ThemeClassification {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Improvement => "Improvement",
        }
    }
}

/// Thematic sub-area summary. Carries the full finding list, not just the
/// detected subset, so the UI can render checked and unchecked items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSummary {
    pub label: String,
    pub classification: ThemeClassification,
    pub detected: usize,
    pub total: usize,
    pub findings: Vec<String>,
}

/// One-call rendering view: every grouping over the same detected set plus
/// the deterministic overall narrative.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub categories: Vec<CategoryResult>,
    pub overall_score: u8,
    pub overall_tier: Tier,
    pub areas: Vec<AreaResult>,
    pub narrative: String,
}
