use super::common::*;
use crate::assessment::{AssessmentCatalog, CatalogError};

#[test]
fn loads_and_validates_json_catalogs() {
    let raw = r#"{
        "categories": [
            {
                "key": "skin_health",
                "name": "Skin Health",
                "sub_features": [
                    { "name": "Wrinkles", "findings": ["Forehead Wrinkles", "Glabella Wrinkles"] }
                ]
            }
        ],
        "areas": [
            { "name": "Forehead", "findings": ["Forehead Wrinkles"] }
        ]
    }"#;

    let catalog = AssessmentCatalog::from_json_str(raw).expect("catalog parses");
    assert_eq!(catalog.categories.len(), 1);
    assert!(catalog.area_themes.is_empty(), "area_themes default to empty");
    assert!(catalog.category("skin_health").is_some());
    assert!(catalog.area("forehead").is_some(), "area lookup normalizes names");
}

#[test]
fn rejects_duplicate_category_keys() {
    let mut dup = catalog();
    dup.categories.push(dup.categories[0].clone());
    match dup.validate() {
        Err(CatalogError::DuplicateCategoryKey(key)) => assert_eq!(key, "skin_health"),
        other => panic!("expected duplicate key rejection, got {other:?}"),
    }
}

#[test]
fn rejects_duplicate_area_names_after_normalization() {
    let mut dup = catalog();
    let mut copy = dup.areas[0].clone();
    copy.name = "  FOREHEAD ".to_string();
    dup.areas.push(copy);
    match dup.validate() {
        Err(CatalogError::DuplicateAreaName(_)) => {}
        other => panic!("expected duplicate area rejection, got {other:?}"),
    }
}

#[test]
fn rejects_theme_groups_for_unknown_areas() {
    let mut bad = catalog();
    bad.area_themes[0].area = "Chin".to_string();
    match bad.validate() {
        Err(CatalogError::UnknownThemeArea(area)) => assert_eq!(area, "Chin"),
        other => panic!("expected unknown theme area rejection, got {other:?}"),
    }
}

#[test]
fn findings_may_repeat_across_themes_and_sub_features() {
    // Intentional overlap: the same finding can matter to more than one
    // grouping and must survive validation.
    let mut overlapping = catalog();
    overlapping.area_themes[0].themes[1]
        .findings
        .push("Forehead Wrinkles".to_string());
    overlapping.validate().expect("overlap is not an error");
}
