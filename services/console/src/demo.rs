use crate::infra::{load_assessment_catalog, load_quiz_catalog, load_subjects, select_subjects};
use aesthetic_ai::assessment::{
    Area, AreaThemes, AssessmentCatalog, AssessmentEngine, AssessmentReport, Category,
    DetectedFindings, SubFeature, Theme,
};
use aesthetic_ai::config::AppConfig;
use aesthetic_ai::error::AppError;
use aesthetic_ai::intake::SubjectRecord;
use aesthetic_ai::narrative;
use aesthetic_ai::quiz::{
    Answer, AnswerSet, AxisSpec, Question, QuizCatalog, QuizClassifier, QuizDefinition,
    QuizResultPayload,
};
use chrono::Local;
use clap::Args;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Combined demo output handed to `--json` consumers in one document.
#[derive(Serialize)]
struct DemoOutput<'a> {
    assessment: &'a AssessmentReport,
    quiz: &'a QuizResultPayload,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the structured results as pretty-printed JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Assessment catalog JSON file (falls back to APP_ASSESSMENT_CATALOG).
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Subject export CSV from the record store.
    #[arg(long)]
    pub(crate) subjects: PathBuf,
    /// Score only this subject id.
    #[arg(long)]
    pub(crate) subject: Option<String>,
    /// Number of focus areas to mention in the overall narrative.
    #[arg(long, default_value_t = 0)]
    pub(crate) focus_count: usize,
    /// Emit the structured report as pretty-printed JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Quiz catalog JSON file (falls back to APP_QUIZ_CATALOG).
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Subject export CSV from the record store.
    #[arg(long)]
    pub(crate) subjects: PathBuf,
    /// Classify only this subject id.
    #[arg(long)]
    pub(crate) subject: Option<String>,
    /// Emit the payload as pretty-printed JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
    /// Write the persistable payload to this file.
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = AssessmentEngine::new(sample_assessment_catalog())?;
    let quiz = sample_quiz_catalog();
    let recommendations = quiz.recommendations.clone();
    let classifier = QuizClassifier::new(quiz.definition)?;

    let detected = DetectedFindings::from_labels([
        "Forehead Wrinkles",
        "Crow's Feet Wrinkles",
        "Nasolabial Folds",
    ]);
    let interests: BTreeSet<String> = ["forehead".to_string()].into_iter().collect();
    let answers: AnswerSet = [
        ("hydration".to_string(), 0usize),
        ("shine".to_string(), 0usize),
        ("reaction".to_string(), 1usize),
    ]
    .into_iter()
    .collect();

    let report = engine.report(&detected, &interests, 2);
    let payload = classifier.build_result_payload(&answers, &recommendations);

    if args.json {
        let combined = DemoOutput {
            assessment: &report,
            quiz: &payload,
        };
        println!("{}", serde_json::to_string_pretty(&combined).map_err(io_error)?);
        return Ok(());
    }

    println!("Assessment scoring demo (sample subject, generated {})", Local::now().date_naive());
    render_assessment_report(&engine, &detected, &report);
    println!();
    render_quiz_payload(&payload);
    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let catalog = load_assessment_catalog(args.catalog, config)?;
    let engine = AssessmentEngine::new(catalog)?;
    let records = select_subjects(load_subjects(&args.subjects)?, args.subject.as_deref())?;

    for (index, record) in records.iter().enumerate() {
        let report = engine.report(&record.detected, &record.interest_areas, args.focus_count);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report).map_err(io_error)?);
            continue;
        }

        if index > 0 {
            println!();
        }
        println!("Subject {}", record.subject_id);
        render_assessment_report(&engine, &record.detected, &report);
    }

    Ok(())
}

pub(crate) fn run_quiz(args: QuizArgs, config: &AppConfig) -> Result<(), AppError> {
    let catalog = load_quiz_catalog(args.catalog, config)?;
    let recommendations = catalog.recommendations.clone();
    let classifier = QuizClassifier::new(catalog.definition)?;
    let records = select_subjects(load_subjects(&args.subjects)?, args.subject.as_deref())?;

    for (index, record) in records.iter().enumerate() {
        let payload = classifier.build_result_payload(&record.answers, &recommendations);

        if let Some(out) = &args.out {
            let path = payload_path(out, record, records.len());
            let raw = serde_json::to_string_pretty(&payload).map_err(io_error)?;
            std::fs::write(&path, raw)?;
            println!("Wrote quiz payload for {} to {}", record.subject_id, path.display());
            continue;
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&payload).map_err(io_error)?);
            continue;
        }

        if index > 0 {
            println!();
        }
        println!("Subject {}", record.subject_id);
        render_quiz_payload(&payload);
    }

    Ok(())
}

/// One payload per subject: a multi-subject run suffixes the file stem with
/// the subject id so nothing is overwritten.
fn payload_path(out: &PathBuf, record: &SubjectRecord, total: usize) -> PathBuf {
    if total == 1 {
        return out.clone();
    }
    let stem = out
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "quiz-result".to_string());
    let extension = out
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    out.with_file_name(format!("{stem}-{}{extension}", record.subject_id))
}

fn io_error(err: serde_json::Error) -> AppError {
    AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}

fn render_assessment_report(
    engine: &AssessmentEngine,
    detected: &DetectedFindings,
    report: &AssessmentReport,
) {
    println!(
        "Overall score: {} / 100 ({})",
        report.overall_score,
        report.overall_tier.label()
    );

    println!("\nCategories");
    for category in &report.categories {
        println!(
            "- {}: {} ({})",
            category.name,
            category.score,
            category.tier.label()
        );
        for sub in &category.sub_features {
            println!(
                "    {} | {} ({}) | {}/{} findings detected",
                sub.name,
                sub.score,
                sub.tier.label(),
                sub.detected,
                sub.total
            );
        }
        println!("    {}", narrative::describe_category(category));
    }

    println!("\nAreas");
    for area in &report.areas {
        let interest_note = if area.has_interest { " [interest]" } else { "" };
        println!(
            "- {}: {} ({}){} | strengths: {} | improvements: {}",
            area.name,
            area.score,
            area.tier.label(),
            interest_note,
            area.strengths.join(", "),
            area.improvements.join(", ")
        );

        if let Some(themes) = engine.summarize_area_themes(&area.name, detected) {
            for theme in themes {
                println!(
                    "    {} | {} | {}/{} findings detected",
                    theme.label,
                    theme.classification.label(),
                    theme.detected,
                    theme.total
                );
            }
        }
    }

    println!("\nNarrative");
    println!("{}", report.narrative);
}

fn render_quiz_payload(payload: &QuizResultPayload) {
    println!("Quiz classification");
    println!("Result: {} ({})", payload.result_label, payload.result);
    if let Some(secondary) = &payload.secondary {
        println!("Secondary tendency: {}", secondary);
    }
    println!("{}", payload.result_description);

    if payload.recommended_product_names.is_empty() {
        println!("Recommended products: none configured");
    } else {
        println!("Recommended products");
        for name in &payload.recommended_product_names {
            println!("- {}", name);
        }
    }
    println!("Completed at {}", payload.completed_at);
}

fn sample_assessment_catalog() -> AssessmentCatalog {
    AssessmentCatalog {
        categories: vec![
            Category {
                key: "skin_health".to_string(),
                name: "Skin Health".to_string(),
                sub_features: vec![
                    SubFeature {
                        name: "Wrinkles".to_string(),
                        findings: string_list(&[
                            "Forehead Wrinkles",
                            "Glabella Wrinkles",
                            "Crow's Feet Wrinkles",
                        ]),
                    },
                    SubFeature {
                        name: "Texture".to_string(),
                        findings: string_list(&["Enlarged Pores", "Rough Texture"]),
                    },
                ],
            },
            Category {
                key: "volume".to_string(),
                name: "Volume & Contour".to_string(),
                sub_features: vec![
                    SubFeature {
                        name: "Midface".to_string(),
                        findings: string_list(&["Cheek Volume Loss", "Nasolabial Folds"]),
                    },
                    SubFeature {
                        name: "Lower Face".to_string(),
                        findings: string_list(&["Jawline Laxity", "Marionette Lines"]),
                    },
                ],
            },
        ],
        areas: vec![
            Area {
                name: "Forehead".to_string(),
                findings: string_list(&[
                    "Forehead Wrinkles",
                    "Glabella Wrinkles",
                    "Brow Ptosis",
                ]),
            },
            Area {
                name: "Eyes".to_string(),
                findings: string_list(&["Crow's Feet Wrinkles", "Under-Eye Hollows"]),
            },
            Area {
                name: "Midface".to_string(),
                findings: string_list(&["Cheek Volume Loss", "Nasolabial Folds"]),
            },
        ],
        area_themes: vec![AreaThemes {
            area: "Forehead".to_string(),
            themes: vec![
                Theme {
                    label: "Dynamic Lines".to_string(),
                    findings: string_list(&["Forehead Wrinkles", "Glabella Wrinkles"]),
                },
                Theme {
                    label: "Brow Position".to_string(),
                    findings: string_list(&["Brow Ptosis"]),
                },
            ],
        }],
    }
}

fn sample_quiz_catalog() -> QuizCatalog {
    let axes = vec![
        AxisSpec {
            id: "oily".to_string(),
            name: "Oily".to_string(),
            description: "Your skin produces excess sebum throughout the day.".to_string(),
            tendency_advice: Some("Keep a mattifying step in your morning routine.".to_string()),
        },
        AxisSpec {
            id: "dry".to_string(),
            name: "Dry".to_string(),
            description: "Your skin tends toward dryness and tightness.".to_string(),
            tendency_advice: Some("Layer a richer moisturizer in the evening.".to_string()),
        },
        AxisSpec {
            id: "sensitive".to_string(),
            name: "Sensitive".to_string(),
            description: "Your skin reacts easily to new products.".to_string(),
            tendency_advice: Some("Patch-test new actives before full use.".to_string()),
        },
    ];

    let questions = vec![
        Question {
            id: "hydration".to_string(),
            prompt: "How does your skin feel an hour after cleansing?".to_string(),
            answers: vec![
                weighted_answer("Shiny in the T-zone", &[("oily", 5)]),
                weighted_answer("Tight and flaky", &[("dry", 5)]),
                weighted_answer("Comfortable", &[("oily", 1), ("dry", 1)]),
            ],
        },
        Question {
            id: "shine".to_string(),
            prompt: "Do you blot or powder during the day?".to_string(),
            answers: vec![
                weighted_answer("More than once", &[("oily", 4)]),
                weighted_answer("Rarely", &[("dry", 2)]),
            ],
        },
        Question {
            id: "reaction".to_string(),
            prompt: "How does your skin respond to new products?".to_string(),
            answers: vec![
                weighted_answer("No reaction", &[("oily", 1)]),
                weighted_answer("Redness or stinging", &[("sensitive", 5)]),
            ],
        },
    ];

    let mut recommendations = BTreeMap::new();
    recommendations.insert(
        "oily".to_string(),
        string_list(&["Clarifying Cleanser", "Light Gel Moisturizer"]),
    );
    recommendations.insert(
        "dry".to_string(),
        string_list(&["Hydrating Serum", "Barrier Repair Cream"]),
    );
    recommendations.insert(
        "sensitive".to_string(),
        string_list(&["Fragrance-Free Cleanser"]),
    );

    QuizCatalog {
        definition: QuizDefinition { axes, questions },
        recommendations,
    }
}

fn weighted_answer(text: &str, weights: &[(&str, u32)]) -> Answer {
    Answer {
        text: text.to_string(),
        weights: weights
            .iter()
            .map(|(axis, weight)| (axis.to_string(), *weight))
            .collect(),
    }
}

fn string_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_output_serializes_both_engines() {
        let engine =
            AssessmentEngine::new(sample_assessment_catalog()).expect("sample catalog is valid");
        let quiz = sample_quiz_catalog();
        let recommendations = quiz.recommendations.clone();
        let classifier =
            QuizClassifier::new(quiz.definition).expect("sample definition is valid");

        let detected = DetectedFindings::from_labels(["Forehead Wrinkles"]);
        let report = engine.report(&detected, &BTreeSet::new(), 0);
        let payload = classifier.build_result_payload(&AnswerSet::new(), &recommendations);

        let json = serde_json::to_value(DemoOutput {
            assessment: &report,
            quiz: &payload,
        })
        .expect("demo output serializes");

        assert!(json["assessment"]["overall_score"].is_number());
        assert!(json["assessment"]["categories"].is_array());
        assert_eq!(json["quiz"]["version"], 1);
        assert_eq!(json["quiz"]["result"], "oily");
    }
}
