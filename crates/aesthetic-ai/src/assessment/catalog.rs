use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// Ordered group of findings inside a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubFeature {
    pub name: String,
    pub findings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub name: String,
    pub sub_features: Vec<SubFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    pub findings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub label: String,
    pub findings: Vec<String>,
}

/// Thematic grouping of one area's findings. A finding may appear in more
/// than one theme; that is intentional and never deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaThemes {
    pub area: String,
    pub themes: Vec<Theme>,
}

/// Externally supplied, read-only assessment configuration. Loaded once by
/// the host application; the engine never writes to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentCatalog {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub area_themes: Vec<AreaThemes>,
}

impl AssessmentCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Shape checks performed once at the configuration boundary; scoring
    /// code assumes a validated catalog and is total afterwards.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut keys = BTreeSet::new();
        for category in &self.categories {
            if !keys.insert(category.key.clone()) {
                return Err(CatalogError::DuplicateCategoryKey(category.key.clone()));
            }
        }

        let mut area_names = BTreeSet::new();
        for area in &self.areas {
            if !area_names.insert(normalize(&area.name)) {
                return Err(CatalogError::DuplicateAreaName(area.name.clone()));
            }
        }

        for group in &self.area_themes {
            if !area_names.contains(&normalize(&group.area)) {
                return Err(CatalogError::UnknownThemeArea(group.area.clone()));
            }
        }

        Ok(())
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.key == key)
    }

    /// Area lookup by normalized name so free-form callers and catalog text
    /// agree on equality.
    pub fn area(&self, name: &str) -> Option<&Area> {
        let wanted = normalize(name);
        self.areas.iter().find(|area| normalize(&area.name) == wanted)
    }

    pub(crate) fn themes_for(&self, area_name: &str) -> Option<&AreaThemes> {
        let wanted = normalize(area_name);
        self.area_themes
            .iter()
            .find(|group| normalize(&group.area) == wanted)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate category key '{0}'")]
    DuplicateCategoryKey(String),
    #[error("duplicate area name '{0}'")]
    DuplicateAreaName(String),
    #[error("theme group references unknown area '{0}'")]
    UnknownThemeArea(String),
}
