use crate::assessment::{
    Area, AreaThemes, AssessmentCatalog, AssessmentEngine, Category, DetectedFindings, SubFeature,
    Theme,
};
use std::collections::BTreeSet;

pub(super) fn findings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

pub(super) fn detected(labels: &[&str]) -> DetectedFindings {
    DetectedFindings::from_labels(labels.iter().copied())
}

pub(super) fn interests(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub(super) fn catalog() -> AssessmentCatalog {
    AssessmentCatalog {
        categories: vec![
            Category {
                key: "skin_health".to_string(),
                name: "Skin Health".to_string(),
                sub_features: vec![
                    SubFeature {
                        name: "Wrinkles".to_string(),
                        findings: findings(&["Forehead Wrinkles", "Glabella Wrinkles"]),
                    },
                    SubFeature {
                        name: "Texture".to_string(),
                        findings: findings(&["Enlarged Pores", "Rough Texture"]),
                    },
                ],
            },
            Category {
                key: "volume".to_string(),
                name: "Volume & Contour".to_string(),
                sub_features: vec![SubFeature {
                    name: "Midface".to_string(),
                    findings: findings(&["Cheek Volume Loss", "Nasolabial Folds"]),
                }],
            },
        ],
        areas: vec![
            Area {
                name: "Forehead".to_string(),
                findings: findings(&["Forehead Wrinkles", "Glabella Wrinkles", "Brow Ptosis"]),
            },
            Area {
                name: "Midface".to_string(),
                findings: findings(&["Cheek Volume Loss", "Nasolabial Folds"]),
            },
        ],
        area_themes: vec![AreaThemes {
            area: "Forehead".to_string(),
            themes: vec![
                Theme {
                    label: "Dynamic Lines".to_string(),
                    findings: findings(&["Forehead Wrinkles", "Glabella Wrinkles"]),
                },
                Theme {
                    label: "Brow Position".to_string(),
                    findings: findings(&["Brow Ptosis"]),
                },
            ],
        }],
    }
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new(catalog()).expect("test catalog is valid")
}
