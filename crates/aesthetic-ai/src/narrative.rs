//! Deterministic, template-driven explanatory text.
//!
//! These composers are the fallback whenever the external enrichment service
//! is unavailable or not invoked. Callers that do invoke that service use its
//! prose in place of this text, never merged with it.

use crate::assessment::{AreaResult, CategoryResult, SubScoreResult};

/// One to two sentences about a scored category, referencing the subject's
/// own numbers. Branches on the 80-point band: refinement language above,
/// opportunity language below.
pub fn describe_category(result: &CategoryResult) -> String {
    let (best, worst) = match best_and_worst(&result.sub_features) {
        Some(pair) => pair,
        None => {
            return format!(
                "{} scores {} out of 100 with no sub-features evaluated.",
                result.name, result.score
            )
        }
    };

    if result.score >= 80 {
        format!(
            "{} is in strong shape at {} out of 100. {} leads at {}, leaving {} ({}) as a refinement opportunity.",
            result.name, result.score, best.name, best.score, worst.name, worst.score
        )
    } else {
        format!(
            "{} scores {} out of 100. {} holds up best at {}, while {} ({}) shows the clearest opportunity for improvement.",
            result.name, result.score, best.name, best.score, worst.name, worst.score
        )
    }
}

/// One to two sentences about a scored area, referencing its
/// strength/improvement split.
pub fn describe_area(result: &AreaResult) -> String {
    if result.score >= 80 {
        let lead = result
            .strengths
            .first()
            .map(String::as_str)
            .unwrap_or(result.name.as_str());
        format!(
            "The {} area is largely clear at {} out of 100, with {} among its strengths. Remaining items are refinement targets rather than concerns.",
            result.name, result.score, lead
        )
    } else {
        let focus = result
            .improvements
            .first()
            .map(String::as_str)
            .unwrap_or(result.name.as_str());
        format!(
            "The {} area scores {} out of 100 with {} of {} findings detected. {} stands out as the first opportunity to address.",
            result.name, result.score, result.detected, result.total, focus
        )
    }
}

/// Overall narrative: a band-keyed opener, the strongest category, the
/// weakest category (naming its weakest sub-feature when that category sits
/// below the good tier), and an optional focus-area clause.
pub fn overall_assessment(
    overall: u8,
    categories: &[CategoryResult],
    focus_count: usize,
) -> String {
    let mut sentences = Vec::new();

    let opener = if overall >= 90 {
        format!("Overall skin health is excellent at {overall} out of 100.")
    } else if overall >= 75 {
        format!("Overall skin health is strong at {overall} out of 100.")
    } else if overall >= 60 {
        format!("Overall skin health sits at {overall} out of 100, a solid baseline with room to improve.")
    } else {
        format!("Overall skin health sits at {overall} out of 100, with several areas that would benefit from attention.")
    };
    sentences.push(opener);

    if let Some(best) = first_max(categories) {
        sentences.push(format!(
            "Your strongest category is {} at {}.",
            best.name, best.score
        ));
    }

    if let Some(worst) = first_min(categories) {
        let mut sentence = format!(
            "{} has the most room to grow at {}",
            worst.name, worst.score
        );
        if worst.score < 70 {
            if let Some((_, weakest)) = best_and_worst(&worst.sub_features) {
                sentence.push_str(&format!(
                    ", driven mainly by {} ({})",
                    weakest.name, weakest.score
                ));
            }
        }
        sentence.push('.');
        sentences.push(sentence);
    }

    if focus_count > 0 {
        let noun = if focus_count == 1 { "area" } else { "areas" };
        sentences.push(format!(
            "We suggest concentrating on {focus_count} focus {noun} first."
        ));
    }

    sentences.join(" ")
}

/// Quiz result label: the primary axis name, optionally annotated with the
/// secondary tendency.
pub fn profile_label(primary: &str, secondary: Option<&str>) -> String {
    match secondary {
        Some(secondary) => format!("{primary} with {secondary} tendency"),
        None => primary.to_string(),
    }
}

/// Joins sentence fragments with single spaces, omitting empty parts.
pub fn join_nonempty(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Highest- and lowest-scoring sub-features; catalog order breaks ties.
fn best_and_worst(sub_features: &[SubScoreResult]) -> Option<(&SubScoreResult, &SubScoreResult)> {
    let mut best = sub_features.first()?;
    let mut worst = best;
    for sub in sub_features {
        if sub.score > best.score {
            best = sub;
        }
        if sub.score < worst.score {
            worst = sub;
        }
    }
    Some((best, worst))
}

fn first_max(categories: &[CategoryResult]) -> Option<&CategoryResult> {
    let mut best = categories.first()?;
    for category in categories {
        if category.score > best.score {
            best = category;
        }
    }
    Some(best)
}

fn first_min(categories: &[CategoryResult]) -> Option<&CategoryResult> {
    let mut worst = categories.first()?;
    for category in categories {
        if category.score < worst.score {
            worst = category;
        }
    }
    Some(worst)
}
