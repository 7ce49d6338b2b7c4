use super::domain::{
    AnswerSet, DefinitionError, ProfileSummary, QuizDefinition, QuizResultPayload, SkinProfile,
};
use crate::narrative;
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;

/// Largest gap between the primary and runner-up totals that still yields a
/// secondary tendency (inclusive).
pub const SECONDARY_THRESHOLD: u32 = 2;

/// Stateless classifier over a validated quiz definition.
pub struct QuizClassifier {
    definition: QuizDefinition,
}

impl QuizClassifier {
    pub fn new(definition: QuizDefinition) -> Result<Self, DefinitionError> {
        definition.validate()?;
        Ok(Self { definition })
    }

    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    /// Per-axis totals. Questions are visited in catalog order; unanswered
    /// questions and out-of-range answer indices are skipped silently, so
    /// the accumulation is insensitive to answer-map iteration order. Axes
    /// no answer mentions stay at 0.
    pub fn score_axes(&self, answers: &AnswerSet) -> BTreeMap<String, u32> {
        self.definition
            .axes
            .iter()
            .map(|axis| axis.id.clone())
            .zip(self.axis_totals(answers))
            .collect()
    }

    fn axis_totals(&self, answers: &AnswerSet) -> Vec<u32> {
        let mut totals = vec![0u32; self.definition.axes.len()];

        for question in &self.definition.questions {
            let answer = answers
                .get(&question.id)
                .and_then(|index| question.answers.get(*index));
            let Some(answer) = answer else {
                continue;
            };

            for (position, axis) in self.definition.axes.iter().enumerate() {
                if let Some(weight) = answer.weights.get(&axis.id) {
                    totals[position] += *weight;
                }
            }
        }

        totals
    }

    /// Deterministic profile: primary is the highest total with axis
    /// enumeration order breaking ties; the runner-up becomes a secondary
    /// tendency only when it trails by at most [`SECONDARY_THRESHOLD`].
    ///
    /// An empty answer set is valid input: all totals are 0 and the first
    /// configured axis wins.
    pub fn compute_profile(&self, answers: &AnswerSet) -> SkinProfile {
        let totals = self.axis_totals(answers);

        // A validated definition has at least one axis, so index 0 exists.
        let mut primary = 0;
        for (index, total) in totals.iter().enumerate().skip(1) {
            if *total > totals[primary] {
                primary = index;
            }
        }

        let secondary = runner_up(&totals, primary)
            .filter(|candidate| totals[primary] - totals[*candidate] <= SECONDARY_THRESHOLD);

        let scores = self
            .definition
            .axes
            .iter()
            .map(|axis| axis.id.clone())
            .zip(totals.iter().copied())
            .collect();

        SkinProfile {
            primary: self.definition.axes[primary].id.clone(),
            secondary: secondary.map(|index| self.definition.axes[index].id.clone()),
            scores,
        }
    }

    /// Display label and description for a profile, composed from the
    /// configured axis texts. Empty parts are omitted from the join.
    pub fn summarize(&self, profile: &SkinProfile) -> ProfileSummary {
        let primary = self.definition.axis(&profile.primary);
        let secondary = profile
            .secondary
            .as_deref()
            .and_then(|id| self.definition.axis(id));

        let primary_name = primary.map(|axis| axis.name.as_str()).unwrap_or_default();
        let secondary_name = secondary.map(|axis| axis.name.as_str());

        let primary_description = primary
            .map(|axis| axis.description.as_str())
            .unwrap_or_default();
        let tendency_advice = secondary
            .and_then(|axis| axis.tendency_advice.as_deref())
            .unwrap_or_default();

        ProfileSummary {
            label: narrative::profile_label(primary_name, secondary_name),
            description: narrative::join_nonempty(&[primary_description, tendency_advice]),
        }
    }

    /// Builds the persistable snapshot: profile plus summary plus the
    /// primary axis's recommended catalog items, stamped with the current
    /// time. The timestamp is the engine's only non-determinism and it never
    /// feeds back into scoring.
    pub fn build_result_payload(
        &self,
        answers: &AnswerSet,
        recommendations: &BTreeMap<String, Vec<String>>,
    ) -> QuizResultPayload {
        let profile = self.compute_profile(answers);
        let summary = self.summarize(&profile);

        let recommended_product_names = recommendations
            .get(&profile.primary)
            .cloned()
            .unwrap_or_default();

        QuizResultPayload {
            version: 1,
            completed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            answers: answers.clone(),
            result: profile.primary,
            recommended_product_names,
            result_label: summary.label,
            result_description: summary.description,
            secondary: profile.secondary,
        }
    }
}

/// Index of the highest total other than `primary`; axis enumeration order
/// breaks ties (strict comparison keeps the first maximum).
fn runner_up(totals: &[u32], primary: usize) -> Option<usize> {
    let mut leader: Option<usize> = None;
    for (index, total) in totals.iter().enumerate() {
        if index == primary {
            continue;
        }
        match leader {
            Some(best) if totals[best] >= *total => {}
            _ => leader = Some(index),
        }
    }
    leader
}
