//! Project catalog as served by the portfolio API.
//!
//! Two payload shapes exist: the grouped endpoint returns categories with
//! nested projects, the flat endpoint returns projects that carry their
//! category id and name. Both end up as a list of non-empty [`Category`].

use fnv::FnvHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::constants::{MOBILE_CATEGORY_MARKERS, UNTITLED_CATEGORY};
use crate::error::CatalogError;

/// Record identity as sent by the backend: usually an integer, sometimes a slug.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Image reference: absolute URL, server-relative path, or `{ "url": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Path(String),
    Object { url: String },
}

impl ImageRef {
    pub fn resolve(&self, media_base: &str) -> Option<String> {
        let raw = match self {
            ImageRef::Path(p) => p.as_str(),
            ImageRef::Object { url } => url.as_str(),
        };
        if raw.is_empty() {
            None
        } else if raw.starts_with("http") {
            Some(raw.to_string())
        } else {
            Some(format!("{}{}", media_base.trim_end_matches('/'), raw))
        }
    }
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, rename = "project_image")]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub repo_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub tools_list: Option<Vec<String>>,
    #[serde(default)]
    pub tools_used: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub category: Option<RecordId>,
    #[serde(default)]
    pub category_name: Option<String>,
}

impl Project {
    /// Stable key for a card: the record id, or its slot when the id is missing.
    pub fn card_key(&self, slot: usize) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => format!("slot-{}", slot),
        }
    }

    /// `tools_list` when present, otherwise the comma-separated `tools_used`.
    pub fn tools(&self) -> Vec<String> {
        if let Some(list) = &self.tools_list {
            return list.clone();
        }
        self.tools_used
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn image_url(&self, media_base: &str) -> Option<String> {
        self.image.as_ref().and_then(|i| i.resolve(media_base))
    }

    /// Date part of `created_at` (`YYYY-MM-DD`), if any.
    pub fn created_date(&self) -> Option<&str> {
        self.created_at
            .as_deref()
            .map(|s| s.split('T').next().unwrap_or(s))
            .filter(|s| !s.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub projects: Vec<Project>,
}

impl Category {
    /// Mobile screenshots get a taller, contained image layout.
    pub fn is_mobile(&self) -> bool {
        is_mobile_category(&self.name)
    }
}

pub fn is_mobile_category(name: &str) -> bool {
    let lower = name.to_lowercase();
    MOBILE_CATEGORY_MARKERS.iter().any(|m| lower.contains(m))
}

#[derive(Deserialize)]
struct RawCategory {
    id: RecordId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    projects: Option<Vec<Project>>,
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        let name = raw
            .name
            .filter(|n| !n.is_empty())
            .or(raw.category_name.filter(|n| !n.is_empty()))
            .unwrap_or_else(|| UNTITLED_CATEGORY.to_string());
        Self {
            id: raw.id,
            name,
            description: raw.description.unwrap_or_default(),
            projects: raw.projects.unwrap_or_default(),
        }
    }
}

/// Parse the grouped payload. `null` counts as an empty list; categories
/// without projects are dropped.
pub fn parse_grouped(body: &str) -> Result<Vec<Category>, CatalogError> {
    let raw: Option<Vec<RawCategory>> =
        serde_json::from_str(body).map_err(|e| CatalogError::DataUnavailable(e.to_string()))?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Category::from)
        .filter(|c| !c.projects.is_empty())
        .collect())
}

/// Parse the flat payload and group by category id in first-seen order.
/// The web view only fetches the grouped endpoint; this is for hosts that
/// serve the flat shape.
pub fn parse_flat(body: &str) -> Result<Vec<Category>, CatalogError> {
    let projects: Option<Vec<Project>> =
        serde_json::from_str(body).map_err(|e| CatalogError::DataUnavailable(e.to_string()))?;
    Ok(group_by_category(projects.unwrap_or_default()))
}

pub fn group_by_category(projects: Vec<Project>) -> Vec<Category> {
    let mut slots: FnvHashMap<Option<RecordId>, usize> = FnvHashMap::default();
    let mut categories: Vec<Category> = Vec::new();
    for project in projects {
        let key = project.category.clone();
        let idx = *slots.entry(key.clone()).or_insert_with(|| {
            categories.push(Category {
                id: key.unwrap_or(RecordId::Text(String::new())),
                name: project
                    .category_name
                    .clone()
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| UNTITLED_CATEGORY.to_string()),
                description: String::new(),
                projects: Vec::new(),
            });
            categories.len() - 1
        });
        categories[idx].projects.push(project);
    }
    categories
}

/// A successful fetch with nothing to show is [`CatalogError::EmptyDataset`].
pub fn require_categories(categories: Vec<Category>) -> Result<Vec<Category>, CatalogError> {
    if categories.is_empty() {
        Err(CatalogError::EmptyDataset)
    } else {
        Ok(categories)
    }
}

/// What the projects view should show.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Empty,
    Ready(Vec<Category>),
}

impl LoadState {
    pub fn from_result(result: Result<Vec<Category>, CatalogError>) -> Self {
        match result {
            Ok(categories) if categories.is_empty() => LoadState::Empty,
            Ok(categories) => LoadState::Ready(categories),
            Err(CatalogError::EmptyDataset) => LoadState::Empty,
            Err(CatalogError::DataUnavailable(reason)) => LoadState::Failed(reason),
        }
    }
}
