//! Assigns `categoryId` to every product of a raw export.

use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

pub const UNCATEGORIZED: &str = "sin-categoria";

#[derive(Debug, Deserialize)]
struct CategoryName {
    id: String,
    name: String,
}

/// Summary of one normalization run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub total: usize,
    /// Category name found in the category list
    pub mapped: usize,
    /// Raw category kept as id
    pub passthrough: usize,
    pub uncategorized: usize,
}

/// Adds `categoryId` to each product object, keeping every other field.
///
/// The id comes from the category whose `name` equals the product's `category`;
/// otherwise the raw category is kept, and an empty one becomes `sin-categoria`.
pub fn normalize_products(
    products: Value,
    categories: Value,
) -> anyhow::Result<(Value, NormalizeStats)> {
    let categories: Vec<CategoryName> =
        serde_json::from_value(categories).context("categories must be an array of {id, name}")?;
    let name_to_id: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.name.as_str(), c.id.as_str()))
        .collect();

    let Value::Array(items) = products else {
        anyhow::bail!("products must be a JSON array");
    };

    let mut stats = NormalizeStats::default();
    let mut normalized = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(mut product) = item else {
            anyhow::bail!("product #{} is not an object", stats.total);
        };
        stats.total += 1;

        let category = product
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let category_id = match name_to_id.get(category.as_str()) {
            Some(id) if !category.is_empty() => {
                stats.mapped += 1;
                id.to_string()
            }
            _ if !category.is_empty() => {
                stats.passthrough += 1;
                category
            }
            _ => {
                stats.uncategorized += 1;
                UNCATEGORIZED.to_string()
            }
        };
        product.insert("categoryId".to_string(), Value::String(category_id));
        normalized.push(Value::Object(product));
    }

    Ok((Value::Array(normalized), stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assigns_category_ids() {
        let products = json!([
            { "id": "1", "category": "Baterías", "title": "AGM" },
            { "id": "2", "category": "legacy-ups" },
            { "id": "3" },
            { "id": "4", "category": "" }
        ]);
        let categories = json!([
            { "id": "baterias", "name": "Baterías", "subcategories": [] }
        ]);

        let (out, stats) = normalize_products(products, categories).unwrap();
        let ids: Vec<_> = out
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["categoryId"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["baterias", "legacy-ups", "sin-categoria", "sin-categoria"]);
        assert_eq!(out[0]["title"], "AGM");
        assert_eq!(
            stats,
            NormalizeStats { total: 4, mapped: 1, passthrough: 1, uncategorized: 2 }
        );
    }

    #[test]
    fn test_keeps_field_order() {
        let products: Value =
            serde_json::from_str(r#"[{ "title": "AGM", "id": "1", "category": "Baterías" }]"#).unwrap();
        let categories = json!([{ "id": "baterias", "name": "Baterías" }]);

        let (out, _) = normalize_products(products, categories).unwrap();
        let keys: Vec<&str> = out[0].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "id", "category", "categoryId"]);
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"[{"title":"AGM","id":"1","category":"Baterías","categoryId":"baterias"}]"#
        );
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(normalize_products(json!({}), json!([])).is_err());
        assert!(normalize_products(json!([1]), json!([])).is_err());
        assert!(normalize_products(json!([]), json!([{ "id": "x" }])).is_err());
    }
}
