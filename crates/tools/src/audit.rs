//! Data-quality report over the bundled catalog and projects.

use chrono::{DateTime, Utc};
use contracts::catalog::{CategorizedItem, Searchable};
use contracts::data::{ListingStore, SiteData};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CollisionEntry {
    pub alias: String,
    pub kept: String,
    pub ignored: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UnmatchedEntry {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub dataset: &'static str,
    pub categories: usize,
    pub items: usize,
    /// `(category id, item count)` in declaration order
    pub buckets: Vec<(String, usize)>,
    pub collisions: Vec<CollisionEntry>,
    pub unmatched: Vec<UnmatchedEntry>,
}

impl DatasetReport {
    pub fn from_store<T>(dataset: &'static str, store: &ListingStore<T>) -> Self
    where
        T: CategorizedItem + Searchable + Clone,
    {
        Self {
            dataset,
            categories: store.categories.len(),
            items: store.items.len(),
            buckets: store.buckets.counts(),
            collisions: store
                .aliases
                .collisions()
                .iter()
                .map(|c| CollisionEntry {
                    alias: c.alias.clone(),
                    kept: c.kept.clone(),
                    ignored: c.ignored.clone(),
                })
                .collect(),
            unmatched: store
                .buckets
                .unmatched()
                .iter()
                .map(|item| UnmatchedEntry {
                    id: item.item_id().to_string(),
                    label: item.category_label().to_string(),
                })
                .collect(),
        }
    }

    pub fn issue_count(&self) -> usize {
        self.collisions.len() + self.unmatched.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub datasets: Vec<DatasetReport>,
    pub clients: usize,
    pub partners: usize,
}

impl AuditReport {
    pub fn build(site: &SiteData, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            datasets: vec![
                DatasetReport::from_store("catalog", &site.catalog),
                DatasetReport::from_store("projects", &site.projects),
            ],
            clients: site.clients.len(),
            partners: site.partners.len(),
        }
    }

    pub fn issue_count(&self) -> usize {
        self.datasets.iter().map(DatasetReport::issue_count).sum()
    }

    /// Logs every finding; returns an error in strict mode when anything was found.
    pub fn check(&self, strict: bool) -> Result<(), AuditError> {
        for dataset in &self.datasets {
            tracing::info!(
                "{}: {} categories, {} items, {} unmatched",
                dataset.dataset,
                dataset.categories,
                dataset.items,
                dataset.unmatched.len()
            );
            for collision in &dataset.collisions {
                tracing::warn!(
                    "{}: alias '{}' kept by '{}', ignored for '{}'",
                    dataset.dataset,
                    collision.alias,
                    collision.kept,
                    collision.ignored
                );
            }
            for item in &dataset.unmatched {
                tracing::warn!(
                    "{}: item '{}' has unknown category '{}'",
                    dataset.dataset,
                    item.id,
                    item.label
                );
            }
        }

        match self.issue_count() {
            0 => Ok(()),
            issues if strict => Err(AuditError::IssuesFound { issues }),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit found {issues} data issue(s)")]
    IssuesFound { issues: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::{Category, Product};
    use contracts::data::CatalogStore;

    fn product(id: &str, category: &str) -> Product {
        serde_json::from_value(serde_json::json!({ "id": id, "category": category })).unwrap()
    }

    #[test]
    fn test_bundled_data_has_no_issues() {
        let site = SiteData::load("/").unwrap();
        let report = AuditReport::build(&site, Utc::now());
        assert_eq!(report.issue_count(), 0);
        assert!(report.check(true).is_ok());
        assert_eq!(report.datasets[0].buckets.len(), 7);
    }

    #[test]
    fn test_issues_fail_only_in_strict_mode() {
        let categories = vec![
            Category::new("ups", "UPS").with_aliases(["respaldo"]),
            Category::new("baterias", "Baterías").with_aliases(["respaldo"]),
        ];
        let store: CatalogStore = ListingStore::new(
            categories,
            vec![product("p1", "UPS"), product("p2", "Iluminación")],
        );
        let report = DatasetReport::from_store("catalog", &store);
        assert_eq!(report.collisions.len(), 1);
        assert_eq!(report.collisions[0].kept, "ups");
        assert_eq!(
            report.unmatched,
            vec![UnmatchedEntry { id: "p2".into(), label: "Iluminación".into() }]
        );

        let audit = AuditReport {
            generated_at: Utc::now(),
            datasets: vec![report],
            clients: 0,
            partners: 0,
        };
        assert!(audit.check(false).is_ok());
        assert!(matches!(audit.check(true), Err(AuditError::IssuesFound { issues: 2 })));
    }
}
