use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

/// One configured classification axis. Axis order in the definition is the
/// engine's fixed enumeration order; the engine never hardcodes a count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisSpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tendency_advice: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub text: String,
    /// Partial mapping from axis id to a positive weight.
    pub weights: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub prompt: String,
    pub answers: Vec<Answer>,
}

/// Ordered quiz configuration. Loaded once, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDefinition {
    pub axes: Vec<AxisSpec>,
    pub questions: Vec<Question>,
}

impl QuizDefinition {
    /// Shape checks performed once at the configuration boundary. Scoring
    /// assumes a validated definition and is total afterwards.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.axes.is_empty() {
            return Err(DefinitionError::NoAxes);
        }

        let mut axis_ids = BTreeSet::new();
        for axis in &self.axes {
            if !axis_ids.insert(axis.id.as_str()) {
                return Err(DefinitionError::DuplicateAxis(axis.id.clone()));
            }
        }

        let mut question_ids = BTreeSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(DefinitionError::DuplicateQuestion(question.id.clone()));
            }
            for answer in &question.answers {
                for (axis, weight) in &answer.weights {
                    if !axis_ids.contains(axis.as_str()) {
                        return Err(DefinitionError::UnknownWeightAxis {
                            question: question.id.clone(),
                            axis: axis.clone(),
                        });
                    }
                    if *weight == 0 {
                        return Err(DefinitionError::ZeroWeight {
                            question: question.id.clone(),
                            axis: axis.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    pub fn axis(&self, id: &str) -> Option<&AxisSpec> {
        self.axes.iter().find(|axis| axis.id == id)
    }
}

/// Quiz definition plus the per-axis recommended catalog item identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCatalog {
    pub definition: QuizDefinition,
    #[serde(default)]
    pub recommendations: BTreeMap<String, Vec<String>>,
}

impl QuizCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DefinitionError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DefinitionError> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DefinitionError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        self.definition.validate()?;
        for axis in self.recommendations.keys() {
            if self.definition.axis(axis).is_none() {
                return Err(DefinitionError::UnknownRecommendationAxis(axis.clone()));
            }
        }
        Ok(())
    }
}

/// Mapping from question id to a selected 0-based answer index. Partial: a
/// subject need not have answered every question.
pub type AnswerSet = BTreeMap<String, usize>;

/// Classification output: a primary axis plus an optional secondary
/// tendency. Computed fresh per request, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkinProfile {
    pub primary: String,
    pub secondary: Option<String>,
    pub scores: BTreeMap<String, u32>,
}

/// Display label and description for a computed profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub label: String,
    pub description: String,
}

/// Externally persistable snapshot of one completed quiz. Field names are
/// fixed by the record-store contract, hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultPayload {
    pub version: u32,
    pub completed_at: String,
    pub answers: AnswerSet,
    pub result: String,
    pub recommended_product_names: Vec<String>,
    pub result_label: String,
    pub result_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("failed to read quiz catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid quiz catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("quiz definition declares no axes")]
    NoAxes,
    #[error("duplicate axis id '{0}'")]
    DuplicateAxis(String),
    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(String),
    #[error("question '{question}' weights unknown axis '{axis}'")]
    UnknownWeightAxis { question: String, axis: String },
    #[error("question '{question}' carries a zero weight for axis '{axis}'")]
    ZeroWeight { question: String, axis: String },
    #[error("recommendations reference unknown axis '{0}'")]
    UnknownRecommendationAxis(String),
}
