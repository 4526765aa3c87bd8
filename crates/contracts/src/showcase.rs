//! Clients and partners shown as logo walls and carousels.

use serde::{Deserialize, Serialize};

use crate::catalog::normalize_label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Anything rendered as a logo tile.
pub trait LogoItem {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn logo(&self) -> Option<&str>;
    fn featured(&self) -> bool;
    fn category(&self) -> Option<&str> {
        None
    }
    fn href(&self) -> Option<&str> {
        None
    }

    /// Up to two initials, shown when the logo is missing or fails to load.
    fn initials(&self) -> String {
        self.name()
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl LogoItem for Client {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }
    fn featured(&self) -> bool {
        self.featured
    }
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl LogoItem for Partner {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }
    fn featured(&self) -> bool {
        self.featured
    }
    fn href(&self) -> Option<&str> {
        self.website.as_deref()
    }
}

/// Filter for the clients/partners grids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoFilter {
    pub search: String,
    pub category: Option<String>,
    pub featured_only: bool,
}

impl LogoFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.category.is_some() || self.featured_only
    }

    pub fn matches<T: LogoItem>(&self, item: &T) -> bool {
        let needle = normalize_label(&self.search);
        let by_name = needle.is_empty() || normalize_label(item.name()).contains(&needle);
        let by_category = match &self.category {
            None => true,
            Some(category) => item.category() == Some(category.as_str()),
        };
        by_name && by_category && (!self.featured_only || item.featured())
    }

    pub fn apply<'a, T: LogoItem>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

pub fn featured<T: LogoItem>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.featured()).collect()
}

/// Distinct categories in first-seen order.
pub fn categories_of<T: LogoItem>(items: &[T]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for category in items.iter().filter_map(LogoItem::category) {
        if !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, name: &str, category: Option<&str>, featured: bool) -> Client {
        Client {
            id: id.into(),
            name: name.into(),
            logo: None,
            category: category.map(str::to_string),
            featured,
        }
    }

    fn sample() -> Vec<Client> {
        vec![
            client("1", "Ecopetrol", Some("Energía"), true),
            client("2", "Hospital San Ignacio", Some("Salud"), false),
            client("3", "Bancolombia", Some("Banca"), true),
            client("4", "Clínica Reina Sofía", Some("Salud"), false),
        ]
    }

    #[test]
    fn test_initials() {
        assert_eq!(client("1", "Hospital San Ignacio", None, false).initials(), "HS");
        assert_eq!(client("1", "abb", None, false).initials(), "A");
        assert_eq!(client("1", "  ", None, false).initials(), "");
    }

    #[test]
    fn test_filter_combines_conditions() {
        let clients = sample();
        let filter = LogoFilter {
            search: "clinica".into(),
            ..LogoFilter::default()
        };
        let ids: Vec<_> = filter.apply(&clients).into_iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);

        let filter = LogoFilter {
            category: Some("Salud".into()),
            ..LogoFilter::default()
        };
        assert_eq!(filter.apply(&clients).len(), 2);

        let filter = LogoFilter {
            featured_only: true,
            search: "banco".into(),
            ..LogoFilter::default()
        };
        assert_eq!(filter.apply(&clients).len(), 1);
        assert!(filter.is_active());
        assert!(!LogoFilter::default().is_active());
        assert_eq!(LogoFilter::default().apply(&clients).len(), 4);
    }

    #[test]
    fn test_featured_and_categories() {
        let clients = sample();
        assert_eq!(featured(&clients).len(), 2);
        assert_eq!(categories_of(&clients), vec!["Energía", "Salud", "Banca"]);
    }

    #[test]
    fn test_partner_defaults() {
        let partner: Partner = serde_json::from_str(r#"{"id":"2","name":"ABB"}"#).unwrap();
        assert!(!partner.featured);
        assert_eq!(partner.href(), None);
        assert_eq!(partner.category(), None);
    }
}
