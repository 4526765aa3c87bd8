//! Category buckets and the filters applied on top of them.

use super::alias_index::{normalize_label, AliasIndex};
use super::category::Category;
use super::item::{CategorizedItem, Searchable};
use crate::navigation::selection::SelectionState;

/// Minimum query length for the free-text filter; shorter queries are ignored.
pub const MIN_QUERY_LEN: usize = 3;

/// Items grouped by canonical category id.
///
/// Every category known to the alias index owns a bucket (possibly empty), in the
/// order the categories were declared. Items whose label resolves to nothing are
/// kept in `unmatched` instead of being dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBuckets<T> {
    buckets: Vec<(String, Vec<T>)>,
    unmatched: Vec<T>,
}

impl<T> Default for CategoryBuckets<T> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
            unmatched: Vec::new(),
        }
    }
}

impl<T> CategoryBuckets<T> {
    pub fn get(&self, category_id: &str) -> &[T] {
        self.buckets
            .iter()
            .find(|(id, _)| id == category_id)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn count(&self, category_id: &str) -> usize {
        self.get(category_id).len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.buckets
            .iter()
            .map(|(id, items)| (id.as_str(), items.as_slice()))
    }

    pub fn unmatched(&self) -> &[T] {
        &self.unmatched
    }

    /// Number of items that landed in some category.
    pub fn matched_len(&self) -> usize {
        self.buckets.iter().map(|(_, items)| items.len()).sum()
    }

    /// `(id, count)` for every bucket, empty ones included.
    pub fn counts(&self) -> Vec<(String, usize)> {
        self.buckets
            .iter()
            .map(|(id, items)| (id.clone(), items.len()))
            .collect()
    }
}

/// Partitions `items` into per-category buckets.
///
/// Relative order inside a bucket follows the input; an item lands in at most one
/// bucket.
pub fn index_by_category<T>(items: &[T], aliases: &AliasIndex) -> CategoryBuckets<T>
where
    T: CategorizedItem + Clone,
{
    let mut buckets: Vec<(String, Vec<T>)> = aliases
        .category_ids()
        .iter()
        .map(|id| (id.clone(), Vec::new()))
        .collect();
    let mut unmatched = Vec::new();

    for item in items {
        let target = aliases
            .resolve(item.category_label())
            .and_then(|id| buckets.iter_mut().find(|(bucket_id, _)| bucket_id == id));
        match target {
            Some((_, bucket)) => bucket.push(item.clone()),
            None => unmatched.push(item.clone()),
        }
    }

    CategoryBuckets { buckets, unmatched }
}

/// Keeps items that carry `subcategory` among their subcategories.
///
/// `None` or a blank value is the identity filter. Matching is exact after
/// trimming both sides: it is case- and accent-sensitive, unlike category
/// resolution.
pub fn filter_by_subcategory<T>(items: &[T], subcategory: Option<&str>) -> Vec<T>
where
    T: CategorizedItem + Clone,
{
    let target = match subcategory.map(str::trim) {
        Some(target) if !target.is_empty() => target,
        _ => return items.to_vec(),
    };

    items
        .iter()
        .filter(|item| item.subcategories().iter().any(|sub| sub.trim() == target))
        .cloned()
        .collect()
}

/// Case- and accent-insensitive substring filter over [`Searchable::search_text`].
pub fn filter_by_text<T>(items: &[T], query: Option<&str>) -> Vec<T>
where
    T: Searchable + Clone,
{
    let needle = query.map(normalize_label).unwrap_or_default();
    if needle.chars().count() < MIN_QUERY_LEN {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| normalize_label(&item.search_text()).contains(&needle))
        .cloned()
        .collect()
}

/// Subcategories offered for a category: the declared ones plus the ones observed
/// on its items, deduplicated and sorted alphabetically ignoring case and accents.
pub fn subcategories_for<T>(category: &Category, bucket: &[T]) -> Vec<String>
where
    T: CategorizedItem,
{
    let mut subcategories: Vec<String> = Vec::new();
    let declared = category.subcategories.iter().map(String::as_str);
    let observed = bucket
        .iter()
        .flat_map(|item| item.subcategories())
        .map(String::as_str);

    for sub in declared.chain(observed) {
        let sub = sub.trim();
        if !sub.is_empty() && !subcategories.iter().any(|known| known == sub) {
            subcategories.push(sub.to_string());
        }
    }

    subcategories.sort_by(|a, b| {
        normalize_label(a)
            .cmp(&normalize_label(b))
            .then_with(|| a.cmp(b))
    });
    subcategories
}

/// Cover image for a category card: first image found in the bucket, else `placeholder`.
pub fn representative_image<T>(bucket: &[T], placeholder: &str) -> String
where
    T: CategorizedItem,
{
    bucket
        .iter()
        .find_map(|item| item.cover_image())
        .unwrap_or(placeholder)
        .to_string()
}

/// What a listing page renders for a given selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<T> {
    /// Selection after validation against the known categories.
    pub selection: SelectionState,
    pub active: Option<Category>,
    pub subcategories: Vec<String>,
    pub visible: Vec<T>,
}

impl<T> Projection<T> {
    /// `true` when no category is selected and the page shows the category grid.
    pub fn is_grid(&self) -> bool {
        self.active.is_none()
    }
}

/// Full pipeline for one selection: validate the selection, pick the bucket (or
/// every item when no category is selected), then apply the subcategory and
/// text filters.
pub fn project<T>(
    items: &[T],
    categories: &[Category],
    aliases: &AliasIndex,
    buckets: &CategoryBuckets<T>,
    selection: &SelectionState,
) -> Projection<T>
where
    T: CategorizedItem + Searchable + Clone,
{
    let selection = selection.validated(aliases);
    let active = selection
        .category
        .as_deref()
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .cloned();

    let (pool, subcategories) = match &active {
        Some(category) => {
            let bucket = buckets.get(&category.id);
            (
                filter_by_subcategory(bucket, selection.subcategory.as_deref()),
                subcategories_for(category, bucket),
            )
        }
        None => (items.to_vec(), Vec::new()),
    };

    Projection {
        visible: filter_by_text(&pool, selection.query.as_deref()),
        active,
        subcategories,
        selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::alias_index::build_alias_index;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        category: &'static str,
        subcategories: Vec<String>,
        images: Vec<String>,
    }

    fn item(id: &'static str, category: &'static str) -> Item {
        Item {
            id,
            category,
            subcategories: Vec::new(),
            images: Vec::new(),
        }
    }

    fn sub(id: &'static str, category: &'static str, subcategory: &'static str) -> Item {
        Item {
            subcategories: vec![subcategory.to_string()],
            ..item(id, category)
        }
    }

    impl CategorizedItem for Item {
        fn item_id(&self) -> &str {
            self.id
        }
        fn category_label(&self) -> &str {
            self.category
        }
        fn subcategories(&self) -> &[String] {
            &self.subcategories
        }
        fn images(&self) -> &[String] {
            &self.images
        }
    }

    impl Searchable for Item {
        fn search_text(&self) -> String {
            format!("{} {}", self.id, self.subcategories.join(" "))
        }
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_ups_scenario() {
        let categories = vec![Category::new("ups", "UPS").with_aliases(["ups"])];
        let aliases = build_alias_index(&categories);
        let items = vec![item("p1", "UPS"), item("p2", "ups"), item("p3", "Plantas")];

        let buckets = index_by_category(&items, &aliases);
        assert_eq!(ids(buckets.get("ups")), vec!["p1", "p2"]);
        assert_eq!(ids(buckets.unmatched()), vec!["p3"]);
        assert_eq!(buckets.counts(), vec![("ups".to_string(), 2)]);
    }

    #[test]
    fn test_buckets_are_disjoint_and_cover_matched_items() {
        let categories = vec![
            Category::new("baterias", "Baterías"),
            Category::new("ups", "UPS"),
            Category::new("solar", "Energía Solar").with_aliases(["fotovoltaica"]),
        ];
        let aliases = build_alias_index(&categories);
        let items = vec![
            item("a", "baterias"),
            item("b", "Energía Solar"),
            item("c", "FOTOVOLTAICA"),
            item("d", "desconocida"),
            item("e", "Baterias"),
            item("f", "ups/Online"),
        ];

        let buckets = index_by_category(&items, &aliases);
        let mut seen: Vec<&str> = buckets.iter().flat_map(|(_, b)| ids(b)).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total, "an item landed in two buckets");
        assert_eq!(seen, vec!["a", "b", "c", "e", "f"]);
        assert_eq!(buckets.matched_len() + buckets.unmatched().len(), items.len());
        assert_eq!(ids(buckets.get("baterias")), vec!["a", "e"]);
        assert_eq!(ids(buckets.get("solar")), vec!["b", "c"]);
        assert!(buckets.get("nope").is_empty());
    }

    #[test]
    fn test_subcategory_filter_is_idempotent_and_stable() {
        let items = vec![
            sub("1", "b", "Litio"),
            sub("2", "b", "Plomo ácido"),
            sub("3", "b", " Litio "),
            item("4", "b"),
        ];
        let once = filter_by_subcategory(&items, Some("Litio"));
        let twice = filter_by_subcategory(&once, Some("Litio"));
        assert_eq!(ids(&once), vec!["1", "3"]);
        assert_eq!(once, twice);
        assert_eq!(filter_by_subcategory(&items, None), items);
        assert_eq!(filter_by_subcategory(&items, Some("   ")), items);
    }

    #[test]
    fn test_subcategory_match_is_case_sensitive() {
        let items = vec![sub("1", "baterias", "baterías")];
        assert!(filter_by_subcategory(&items, Some("Baterías")).is_empty());
        assert_eq!(filter_by_subcategory(&items, Some("baterías")).len(), 1);
    }

    #[test]
    fn test_filter_by_text_ignores_short_queries() {
        let items = vec![sub("ups-online", "ups", "Online"), sub("ups-interactiva", "ups", "Interactiva")];
        assert_eq!(filter_by_text(&items, Some("on")).len(), 2);
        assert_eq!(ids(&filter_by_text(&items, Some("ONLINE"))), vec!["ups-online"]);
        assert_eq!(ids(&filter_by_text(&items, Some("interactíva"))), vec!["ups-interactiva"]);
        assert!(filter_by_text(&items, Some("plantas")).is_empty());
    }

    #[test]
    fn test_subcategories_for_merges_and_sorts() {
        let category = Category::new("baterias", "Baterías").with_subcategories(["Plomo ácido", "Litio"]);
        let bucket = vec![sub("1", "baterias", "Estacionarias"), sub("2", "baterias", "Litio"), item("3", "baterias")];
        assert_eq!(
            subcategories_for(&category, &bucket),
            vec!["Estacionarias", "Litio", "Plomo ácido"]
        );
    }

    #[test]
    fn test_nested_path_segments_are_all_selectable() {
        let category = Category::new("grupos", "Grupos");
        let mut nested = item("1", "grupos / A / B");
        nested.subcategories = vec!["A".to_string(), "B".to_string()];
        let bucket = vec![nested, sub("2", "grupos", "A")];

        assert_eq!(subcategories_for(&category, &bucket), vec!["A", "B"]);
        assert_eq!(ids(&filter_by_subcategory(&bucket, Some("B"))), vec!["1"]);
        assert_eq!(ids(&filter_by_subcategory(&bucket, Some("A"))), vec!["1", "2"]);
        assert!(filter_by_subcategory(&bucket, Some("b")).is_empty());
    }

    #[test]
    fn test_representative_image() {
        let mut with_image = item("2", "ups");
        with_image.images = vec!["".into(), "/uploads/ups.jpg".into()];
        let bucket = vec![item("1", "ups"), with_image];
        assert_eq!(representative_image(&bucket, "/placeholder.jpg"), "/uploads/ups.jpg");
        assert_eq!(representative_image::<Item>(&[], "/placeholder.jpg"), "/placeholder.jpg");
    }

    #[test]
    fn test_project_pipeline() {
        let categories = vec![
            Category::new("baterias", "Baterías"),
            Category::new("ups", "UPS"),
        ];
        let aliases = build_alias_index(&categories);
        let items = vec![
            sub("b1", "Baterías", "Litio"),
            sub("b2", "baterias", "Plomo ácido"),
            item("u1", "ups"),
        ];
        let buckets = index_by_category(&items, &aliases);

        let grid = project(&items, &categories, &aliases, &buckets, &SelectionState::default());
        assert!(grid.is_grid());
        assert_eq!(grid.visible.len(), 3);

        let selection = SelectionState::default()
            .select_category("Baterias")
            .select_subcategory(Some("Litio"));
        let view = project(&items, &categories, &aliases, &buckets, &selection);
        assert_eq!(view.active.as_ref().map(|c| c.id.as_str()), Some("baterias"));
        assert_eq!(view.selection.category.as_deref(), Some("baterias"));
        assert_eq!(ids(&view.visible), vec!["b1"]);
        assert_eq!(view.subcategories, vec!["Litio", "Plomo ácido"]);

        let unknown = SelectionState::default().select_category("transformadores");
        let view = project(&items, &categories, &aliases, &buckets, &unknown);
        assert!(view.is_grid());
        assert_eq!(view.selection, SelectionState::default());
    }
}
