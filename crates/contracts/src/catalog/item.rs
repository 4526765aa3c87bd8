use serde::{Deserialize, Serialize};

/// An item that can be sorted into categories (product or project).
pub trait CategorizedItem {
    fn item_id(&self) -> &str;

    /// Raw category label as it appears in the data (id, name or legacy alias).
    fn category_label(&self) -> &str;

    /// Every subcategory the item belongs to; empty when it has none.
    fn subcategories(&self) -> &[String];

    fn images(&self) -> &[String];

    fn cover_image(&self) -> Option<&str> {
        self.images()
            .iter()
            .map(String::as_str)
            .find(|src| !src.trim().is_empty())
    }
}

/// Items the free-text filter can search.
pub trait Searchable {
    /// Text the free-text filter matches against.
    fn search_text(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default = "default_product_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Legacy category label from the WordPress export.
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specs: Vec<Spec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

fn default_product_title() -> String {
    "Producto sin nombre".to_string()
}

impl Product {
    /// Fills fields the export leaves blank: slug falls back to the id, blank
    /// subcategories and image entries are dropped.
    pub fn normalized(mut self) -> Self {
        if self.slug.trim().is_empty() {
            self.slug = self.id.clone();
        }
        if self.title.trim().is_empty() {
            self.title = default_product_title();
        }
        self.subcategory = self
            .subcategory
            .take()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.images.retain(|src| !src.trim().is_empty());
        self
    }
}

impl CategorizedItem for Product {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn category_label(&self) -> &str {
        match self.category_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id,
            _ => &self.category,
        }
    }

    fn subcategories(&self) -> &[String] {
        self.subcategory.as_slice()
    }

    fn images(&self) -> &[String] {
        &self.images
    }
}

impl Searchable for Product {
    fn search_text(&self) -> String {
        [
            self.title.as_str(),
            self.sku.as_deref().unwrap_or_default(),
            self.subcategory.as_deref().unwrap_or_default(),
            self.description.as_str(),
        ]
        .join(" ")
    }
}

/// A project. Always carries `images`, even when the data had a single `image` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProject")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    /// Category label, optionally a `base / sub / sub` path.
    pub category: String,
    /// Explicit subcategory first, then every trailing segment of the path.
    pub subcategories: Vec<String>,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
struct RawProject {
    id: String,
    name: String,
    #[serde(default)]
    client: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    subcategory: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: Option<OneOrMany>,
    #[serde(default)]
    images: Vec<String>,
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        let mut images: Vec<String> = Vec::with_capacity(raw.images.len() + 1);
        let legacy = match raw.image {
            Some(OneOrMany::One(src)) => vec![src],
            Some(OneOrMany::Many(list)) => list,
            None => Vec::new(),
        };
        for src in raw.images.into_iter().chain(legacy) {
            let src = src.trim().to_string();
            if !src.is_empty() && !images.contains(&src) {
                images.push(src);
            }
        }

        let explicit = raw.subcategory.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let trailing = raw
            .category
            .split('/')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .skip(1);
        let mut subcategories: Vec<String> = Vec::new();
        for sub in explicit.into_iter().chain(trailing) {
            if !subcategories.iter().any(|known| known == sub) {
                subcategories.push(sub.to_string());
            }
        }

        Project {
            id: raw.id,
            name: raw.name,
            client: raw.client,
            category: raw.category.trim().to_string(),
            subcategories,
            description: raw.description,
            images,
        }
    }
}

impl CategorizedItem for Project {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn category_label(&self) -> &str {
        &self.category
    }

    fn subcategories(&self) -> &[String] {
        &self.subcategories
    }

    fn images(&self) -> &[String] {
        &self.images
    }
}

impl Project {
    /// First subcategory, used for the card badge.
    pub fn subcategory(&self) -> Option<&str> {
        self.subcategories.first().map(String::as_str)
    }
}

impl Searchable for Project {
    fn search_text(&self) -> String {
        [self.name.as_str(), self.client.as_str(), self.description.as_str()].join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_single_image_becomes_list() {
        let project: Project = serde_json::from_value(json!({
            "id": "1",
            "name": "Aerocivil",
            "category": "grupos-electrogenos",
            "image": "/images/projects/a.jpg"
        }))
        .unwrap();
        assert_eq!(project.images, vec!["/images/projects/a.jpg".to_string()]);
    }

    #[test]
    fn test_project_merges_image_and_images() {
        let project: Project = serde_json::from_value(json!({
            "id": "2",
            "name": "WWF",
            "category": "energia-fotovoltaica",
            "images": ["a.jpg", "b.jpg"],
            "image": ["b.jpg", "c.jpg", " "]
        }))
        .unwrap();
        assert_eq!(project.images, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_project_subcategory_from_path_label() {
        let project: Project = serde_json::from_value(json!({
            "id": "3",
            "name": "Torre Norte",
            "category": "grupos-electrogenos / Transferencias"
        }))
        .unwrap();
        assert_eq!(project.subcategories, vec!["Transferencias"]);
        assert_eq!(project.subcategory(), Some("Transferencias"));
        assert!(project.images.is_empty());
        assert_eq!(project.cover_image(), None);
    }

    #[test]
    fn test_project_keeps_every_path_segment() {
        let project: Project = serde_json::from_value(json!({
            "id": "4",
            "name": "Planta Sur",
            "category": "grupos / A / B"
        }))
        .unwrap();
        assert_eq!(project.subcategories, vec!["A", "B"]);
        assert_eq!(project.category_label(), "grupos / A / B");

        let explicit: Project = serde_json::from_value(json!({
            "id": "5",
            "name": "Planta Norte",
            "category": "grupos / B",
            "subcategory": "A"
        }))
        .unwrap();
        assert_eq!(explicit.subcategories, vec!["A", "B"]);
    }

    #[test]
    fn test_product_defaults() {
        let product: Product = serde_json::from_value(json!({
            "id": "ups-3kva",
            "category": "UPS",
            "subcategory": "  ",
            "images": ["", "/uploads/ups.jpg"]
        }))
        .unwrap();
        let product = product.normalized();
        assert_eq!(product.slug, "ups-3kva");
        assert_eq!(product.title, "Producto sin nombre");
        assert_eq!(product.subcategory, None);
        assert_eq!(product.images, vec!["/uploads/ups.jpg"]);
        assert_eq!(product.category_label(), "UPS");
    }

    #[test]
    fn test_product_prefers_category_id() {
        let product = Product {
            category_id: Some("plantas".into()),
            ..serde_json::from_value(json!({"id": "p", "category": "Plantas Eléctricas"})).unwrap()
        };
        assert_eq!(product.category_label(), "plantas");
    }
}
