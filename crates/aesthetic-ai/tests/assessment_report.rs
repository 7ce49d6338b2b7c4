use aesthetic_ai::assessment::{
    Area, AssessmentCatalog, AssessmentEngine, Category, DetectedFindings, SubFeature, Tier,
};
use aesthetic_ai::narrative;
use std::collections::BTreeSet;

fn single_category_catalog() -> AssessmentCatalog {
    AssessmentCatalog {
        categories: vec![Category {
            key: "skin_health".to_string(),
            name: "Skin Health".to_string(),
            sub_features: vec![SubFeature {
                name: "Wrinkles".to_string(),
                findings: vec![
                    "Forehead Wrinkles".to_string(),
                    "Glabella Wrinkles".to_string(),
                ],
            }],
        }],
        areas: vec![Area {
            name: "Forehead".to_string(),
            findings: vec![
                "Forehead Wrinkles".to_string(),
                "Glabella Wrinkles".to_string(),
            ],
        }],
        area_themes: Vec::new(),
    }
}

#[test]
fn single_category_scenario_scores_fifty_at_every_level() {
    let engine = AssessmentEngine::new(single_category_catalog()).expect("valid catalog");
    let subject = DetectedFindings::from_labels(["forehead wrinkles"]);

    let category = engine
        .score_category("skin_health", &subject)
        .expect("category exists");
    let wrinkles = &category.sub_features[0];
    assert_eq!(wrinkles.name, "Wrinkles");
    assert_eq!(wrinkles.score, 50);
    assert_eq!(wrinkles.tier, Tier::Moderate);

    assert_eq!(category.score, 50);
    assert_eq!(category.tier, Tier::Moderate);

    let all = engine.score_categories(&subject);
    assert_eq!(engine.overall_score(&all), 50);
}

#[test]
fn report_combines_every_grouping_with_a_narrative() {
    let engine = AssessmentEngine::new(single_category_catalog()).expect("valid catalog");
    let subject = DetectedFindings::from_labels(["Forehead Wrinkles"]);
    let interests: BTreeSet<String> = ["forehead".to_string()].into_iter().collect();

    let report = engine.report(&subject, &interests, 2);

    assert_eq!(report.overall_score, 50);
    assert_eq!(report.overall_tier, Tier::Moderate);
    assert_eq!(report.categories.len(), 1);
    assert_eq!(report.areas.len(), 1);
    assert!(report.areas[0].has_interest);
    assert!(report.narrative.contains("50 out of 100"));
    assert!(report.narrative.contains("2 focus areas"));
}

#[test]
fn report_serializes_for_enrichment_context() {
    let engine = AssessmentEngine::new(single_category_catalog()).expect("valid catalog");
    let subject = DetectedFindings::from_labels(["forehead wrinkles"]);
    let report = engine.report(&subject, &BTreeSet::new(), 0);

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["overall_score"], 50);
    assert_eq!(json["overall_tier"], "moderate");
    assert_eq!(json["categories"][0]["sub_features"][0]["detected"], 1);
}

#[test]
fn fallback_descriptions_reference_computed_numbers() {
    let engine = AssessmentEngine::new(single_category_catalog()).expect("valid catalog");
    let subject = DetectedFindings::from_labels(["forehead wrinkles"]);

    let category = engine
        .score_category("skin_health", &subject)
        .expect("category exists");
    let text = narrative::describe_category(&category);
    assert!(text.contains("Skin Health"));
    assert!(text.contains("50"));

    let areas = engine.compute_areas(&subject, &BTreeSet::new());
    let text = narrative::describe_area(&areas[0]);
    assert!(text.contains("Forehead"));
    assert!(text.contains("50"));
}
