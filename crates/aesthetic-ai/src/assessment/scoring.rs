use super::catalog::{Category, SubFeature};
use super::domain::{CategoryResult, DetectedFindings, SubScoreResult, Tier};

/// Completeness score for one finding group: the percentage of its members
/// *not* detected for the subject, rounded half-up on the final ratio.
///
/// An empty group scores 100 by convention; a group with nothing to evaluate
/// is fully clear, not an error.
pub fn score_group(findings: &[String], detected: &DetectedFindings) -> u8 {
    if findings.is_empty() {
        return 100;
    }

    let hits = detected_count(findings, detected);
    let clear = findings.len() - hits;
    round_ratio(clear, findings.len())
}

pub(crate) fn detected_count(findings: &[String], detected: &DetectedFindings) -> usize {
    findings
        .iter()
        .filter(|finding| detected.contains_label(finding))
        .count()
}

fn round_ratio(numerator: usize, denominator: usize) -> u8 {
    // f64::round is half-away-from-zero, which is half-up for our
    // non-negative ratios. Counts are never rounded, only the final ratio.
    ((numerator as f64 * 100.0) / denominator as f64).round() as u8
}

/// Mean of already-rounded scores, itself rounded. An empty list extends the
/// empty-group convention and yields 100.
pub(crate) fn mean_rounded(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 100;
    }

    let sum: u32 = scores.iter().map(|score| u32::from(*score)).sum();
    (f64::from(sum) / scores.len() as f64).round() as u8
}

pub(crate) fn score_sub_feature(sub: &SubFeature, detected: &DetectedFindings) -> SubScoreResult {
    let score = score_group(&sub.findings, detected);
    SubScoreResult {
        name: sub.name.clone(),
        score,
        tier: Tier::from_score(score),
        detected: detected_count(&sub.findings, detected),
        total: sub.findings.len(),
    }
}

/// Category score = rounded mean of the already-rounded sub-feature scores.
/// The two-stage rounding is deliberate: it keeps the category figure
/// consistent with the per-sub-feature figures a user sees displayed.
pub(crate) fn score_category(category: &Category, detected: &DetectedFindings) -> CategoryResult {
    let sub_features: Vec<SubScoreResult> = category
        .sub_features
        .iter()
        .map(|sub| score_sub_feature(sub, detected))
        .collect();

    let sub_scores: Vec<u8> = sub_features.iter().map(|sub| sub.score).collect();
    let score = mean_rounded(&sub_scores);

    CategoryResult {
        key: category.key.clone(),
        name: category.name.clone(),
        score,
        tier: Tier::from_score(score),
        sub_features,
    }
}

/// Overall score = rounded mean of the already-rounded category scores.
pub(crate) fn score_overall(categories: &[CategoryResult]) -> u8 {
    let scores: Vec<u8> = categories.iter().map(|category| category.score).collect();
    mean_rounded(&scores)
}
