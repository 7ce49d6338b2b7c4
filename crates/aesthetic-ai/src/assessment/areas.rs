use super::catalog::{AreaThemes, AssessmentCatalog};
use super::domain::{AreaResult, DetectedFindings, ThemeClassification, ThemeSummary, Tier};
use super::scoring::{detected_count, score_group};
use crate::normalize::normalize;
use std::collections::BTreeSet;

/// Scores every area: completeness, strength/improvement split, and the
/// caller-supplied interest flag. Areas appear in catalog order.
pub(crate) fn compute_areas(
    catalog: &AssessmentCatalog,
    detected: &DetectedFindings,
    interest_area_names: &BTreeSet<String>,
) -> Vec<AreaResult> {
    catalog
        .areas
        .iter()
        .map(|area| {
            let mut strengths = Vec::new();
            let mut improvements = Vec::new();
            for finding in &area.findings {
                if detected.contains_label(finding) {
                    improvements.push(finding.clone());
                } else {
                    strengths.push(finding.clone());
                }
            }

            rebalance(
                &mut strengths,
                &mut improvements,
                catalog.themes_for(&area.name),
            );

            let score = score_group(&area.findings, detected);
            AreaResult {
                name: area.name.clone(),
                score,
                tier: Tier::from_score(score),
                strengths,
                improvements,
                detected: detected_count(&area.findings, detected),
                total: area.findings.len(),
                has_interest: interest_area_names.contains(&area.name.to_lowercase()),
            }
        })
        .collect()
}

/// Keeps both sides of an area's detail view populated: when one side is
/// empty and the other holds at least two findings, exactly one finding moves
/// over. The donor is the finding whose smallest containing theme is
/// smallest (findings outside every theme rank last); ties go to catalog
/// order. This deliberately distorts a literal strength/weakness reading in
/// exchange for a non-empty-both-sides UI guarantee.
fn rebalance(
    strengths: &mut Vec<String>,
    improvements: &mut Vec<String>,
    themes: Option<&AreaThemes>,
) {
    let (donor, empty) = if strengths.is_empty() && improvements.len() >= 2 {
        (improvements, strengths)
    } else if improvements.is_empty() && strengths.len() >= 2 {
        (strengths, improvements)
    } else {
        return;
    };

    let mut pick = 0;
    let mut pick_rank = usize::MAX;
    for (index, finding) in donor.iter().enumerate() {
        let rank = smallest_theme_size(finding, themes);
        if rank < pick_rank {
            pick = index;
            pick_rank = rank;
        }
    }

    empty.push(donor.remove(pick));
}

fn smallest_theme_size(finding: &str, themes: Option<&AreaThemes>) -> usize {
    let wanted = normalize(finding);
    themes
        .map(|group| {
            group
                .themes
                .iter()
                .filter(|theme| theme.findings.iter().any(|f| normalize(f) == wanted))
                .map(|theme| theme.findings.len())
                .min()
                .unwrap_or(usize::MAX)
        })
        .unwrap_or(usize::MAX)
}

/// Classifies each theme under an area: `improvement` when any of its
/// findings is detected, otherwise `strength`. Returns `None` for an area
/// with no configured themes.
pub(crate) fn summarize_area_themes(
    catalog: &AssessmentCatalog,
    area_name: &str,
    detected: &DetectedFindings,
) -> Option<Vec<ThemeSummary>> {
    let group = catalog.themes_for(area_name)?;

    let summaries = group
        .themes
        .iter()
        .map(|theme| {
            let hits = detected_count(&theme.findings, detected);
            let classification = if hits > 0 {
                ThemeClassification::Improvement
            } else {
                ThemeClassification::Strength
            };
            ThemeSummary {
                label: theme.label.clone(),
                classification,
                detected: hits,
                total: theme.findings.len(),
                findings: theme.findings.clone(),
            }
        })
        .collect();

    Some(summaries)
}
