use aesthetic_ai::assessment::{
    Area, AssessmentCatalog, AssessmentEngine, Category, SubFeature,
};
use aesthetic_ai::intake::{SubjectImportError, SubjectImporter};
use std::io::Cursor;

const EXPORT: &str = "\
Subject Id,Detected Findings,Interest Areas,Quiz Answers
s-100,\"Forehead Wrinkles, Glabella Wrinkles\",\"Forehead, Jawline\",q1=0;q2=1
s-101,,,
";

#[test]
fn parses_subject_rows_into_engine_inputs() {
    let records = SubjectImporter::from_reader(Cursor::new(EXPORT)).expect("export parses");
    assert_eq!(records.len(), 2);

    let subject = &records[0];
    assert_eq!(subject.subject_id, "s-100");
    assert_eq!(subject.detected.len(), 2);
    assert!(subject.detected.contains_label("forehead wrinkles"));
    assert!(subject.interest_areas.contains("jawline"));
    assert_eq!(subject.answers.get("q2"), Some(&1));

    let blank = &records[1];
    assert!(blank.detected.is_empty());
    assert!(blank.interest_areas.is_empty());
    assert!(blank.answers.is_empty());
}

#[test]
fn malformed_answer_index_fails_at_the_intake_boundary() {
    let export = "\
Subject Id,Detected Findings,Interest Areas,Quiz Answers
s-200,,,q1=first
";
    match SubjectImporter::from_reader(Cursor::new(export)) {
        Err(SubjectImportError::Answer { subject, entry }) => {
            assert_eq!(subject, "s-200");
            assert_eq!(entry, "q1=first");
        }
        other => panic!("expected intake validation failure, got {other:?}"),
    }
}

#[test]
fn imported_findings_feed_the_scorer_directly() {
    let catalog = AssessmentCatalog {
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
    };
    let engine = AssessmentEngine::new(catalog).expect("valid catalog");

    let records = SubjectImporter::from_reader(Cursor::new(EXPORT)).expect("export parses");
    let subject = &records[0];

    let report = engine.report(&subject.detected, &subject.interest_areas, 0);
    assert_eq!(report.overall_score, 0, "both wrinkle findings detected");
    assert!(report.areas[0].has_interest);
}
