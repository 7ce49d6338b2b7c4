//! Hierarchical finding scorer: categories, sub-features, anatomical areas,
//! and thematic sub-areas over one detected-finding set.

mod areas;
mod catalog;
mod domain;
mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{
    Area, AreaThemes, AssessmentCatalog, CatalogError, Category, SubFeature, Theme,
};
pub use domain::{
    AreaResult, AssessmentReport, CategoryResult, DetectedFindings, SubScoreResult,
    ThemeClassification, ThemeSummary, Tier,
};
pub use scoring::score_group;

use crate::narrative;
use std::collections::BTreeSet;

/// Stateless scorer over a validated catalog. Every method is a pure
/// function of its arguments and the immutable configuration.
pub struct AssessmentEngine {
    catalog: AssessmentCatalog,
}

impl AssessmentEngine {
    pub fn new(catalog: AssessmentCatalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &AssessmentCatalog {
        &self.catalog
    }

    /// Scores one category by key. Unknown keys are an absent result, never
    /// an error; the caller decides the fallback UI.
    pub fn score_category(
        &self,
        key: &str,
        detected: &DetectedFindings,
    ) -> Option<CategoryResult> {
        self.catalog
            .category(key)
            .map(|category| scoring::score_category(category, detected))
    }

    /// Scores every category in catalog order.
    pub fn score_categories(&self, detected: &DetectedFindings) -> Vec<CategoryResult> {
        self.catalog
            .categories
            .iter()
            .map(|category| scoring::score_category(category, detected))
            .collect()
    }

    /// Overall score = rounded mean of the already-rounded category scores.
    pub fn overall_score(&self, categories: &[CategoryResult]) -> u8 {
        scoring::score_overall(categories)
    }

    /// Scores every area with its strength/improvement split and interest
    /// flag. `interest_area_names` is a caller-supplied set of lower-cased
    /// area names.
    pub fn compute_areas(
        &self,
        detected: &DetectedFindings,
        interest_area_names: &BTreeSet<String>,
    ) -> Vec<AreaResult> {
        areas::compute_areas(&self.catalog, detected, interest_area_names)
    }

    /// Theme summaries for one area, or `None` when the area has no
    /// configured themes.
    pub fn summarize_area_themes(
        &self,
        area_name: &str,
        detected: &DetectedFindings,
    ) -> Option<Vec<ThemeSummary>> {
        areas::summarize_area_themes(&self.catalog, area_name, detected)
    }

    /// One-call rendering view: every grouping plus the deterministic overall
    /// narrative. `focus_count` feeds the narrative's trailing clause.
    pub fn report(
        &self,
        detected: &DetectedFindings,
        interest_area_names: &BTreeSet<String>,
        focus_count: usize,
    ) -> AssessmentReport {
        let categories = self.score_categories(detected);
        let overall_score = self.overall_score(&categories);
        let areas = self.compute_areas(detected, interest_area_names);
        let narrative = narrative::overall_assessment(overall_score, &categories, focus_count);

        AssessmentReport {
            overall_tier: Tier::from_score(overall_score),
            categories,
            overall_score,
            areas,
            narrative,
        }
    }
}
