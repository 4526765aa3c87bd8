//! The site's bundled datasets (`data/*.json`, embedded with `include_str!`).
//!
//! The catalog and projects are indexed once at load time; pages then only
//! go through [`ListingStore::project`].

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use crate::catalog::{
    build_alias_index, index_by_category, project, AliasIndex, Category, CategorizedItem,
    CategoryBuckets, Product, Project, Projection, Searchable,
};
use crate::media::{public_asset, public_assets};
use crate::navigation::SelectionState;
use crate::showcase::{Client, Partner};
use crate::DataError;

const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");
const PRODUCTS_JSON: &str = include_str!("../../data/products.json");
const PROJECT_CATEGORIES_JSON: &str = include_str!("../../data/project_categories.json");
const PROJECTS_JSON: &str = include_str!("../../data/projects.json");
const CLIENTS_JSON: &str = include_str!("../../data/clients.json");
const PARTNERS_JSON: &str = include_str!("../../data/partners.json");

/// Base path the site is served from; set `SITE_BASE_PATH` at build time for
/// sub-path deployments such as `/op-ingenieria/`.
pub fn asset_base() -> &'static str {
    option_env!("SITE_BASE_PATH").unwrap_or("/")
}

/// Bundled data resolved against [`asset_base`].
pub static BUNDLED: Lazy<Result<SiteData, DataError>> = Lazy::new(|| SiteData::load(asset_base()));

// ─── Parsing ──────────────────────────────────────────────────────────────────

fn parse<T: DeserializeOwned>(dataset: &'static str, raw: &str) -> Result<Vec<T>, DataError> {
    serde_json::from_str(raw).map_err(|source| DataError::Parse { dataset, source })
}

fn parse_required<T: DeserializeOwned>(
    dataset: &'static str,
    raw: &str,
) -> Result<Vec<T>, DataError> {
    let list = parse(dataset, raw)?;
    if list.is_empty() {
        return Err(DataError::Empty { dataset });
    }
    Ok(list)
}

pub fn load_categories() -> Result<Vec<Category>, DataError> {
    parse_required("categories", CATEGORIES_JSON)
}

pub fn load_products(base: &str) -> Result<Vec<Product>, DataError> {
    let products: Vec<Product> = parse_required("products", PRODUCTS_JSON)?;
    Ok(products
        .into_iter()
        .map(|product| {
            let mut product = product.normalized();
            product.images = public_assets(product.images.iter().map(String::as_str), base);
            product
        })
        .collect())
}

pub fn load_project_categories() -> Result<Vec<Category>, DataError> {
    parse_required("project_categories", PROJECT_CATEGORIES_JSON)
}

pub fn load_projects(base: &str) -> Result<Vec<Project>, DataError> {
    let projects: Vec<Project> = parse_required("projects", PROJECTS_JSON)?;
    Ok(projects
        .into_iter()
        .map(|mut project| {
            project.images = public_assets(project.images.iter().map(String::as_str), base);
            project
        })
        .collect())
}

pub fn load_clients(base: &str) -> Result<Vec<Client>, DataError> {
    let clients: Vec<Client> = parse("clients", CLIENTS_JSON)?;
    Ok(clients
        .into_iter()
        .map(|mut client| {
            client.logo = resolve_logo(client.logo.take(), base);
            client
        })
        .collect())
}

pub fn load_partners(base: &str) -> Result<Vec<Partner>, DataError> {
    let partners: Vec<Partner> = parse("partners", PARTNERS_JSON)?;
    Ok(partners
        .into_iter()
        .map(|mut partner| {
            partner.logo = resolve_logo(partner.logo.take(), base);
            partner
        })
        .collect())
}

fn resolve_logo(logo: Option<String>, base: &str) -> Option<String> {
    logo.map(|src| public_asset(&src, base))
        .filter(|src| !src.is_empty())
}

// ─── Indexed listings ─────────────────────────────────────────────────

/// Categories, their alias table and the items partitioned by category.
#[derive(Debug, Clone)]
pub struct ListingStore<T> {
    pub categories: Vec<Category>,
    pub aliases: AliasIndex,
    pub items: Vec<T>,
    pub buckets: CategoryBuckets<T>,
}

pub type CatalogStore = ListingStore<Product>;
pub type ProjectStore = ListingStore<Project>;

impl<T> ListingStore<T>
where
    T: CategorizedItem + Searchable + Clone,
{
    pub fn new(categories: Vec<Category>, items: Vec<T>) -> Self {
        let aliases = build_alias_index(&categories);
        let buckets = index_by_category(&items, &aliases);
        Self {
            categories,
            aliases,
            items,
            buckets,
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn project(&self, selection: &SelectionState) -> Projection<T> {
        project(
            &self.items,
            &self.categories,
            &self.aliases,
            &self.buckets,
            selection,
        )
    }

    /// `true` when the data has alias collisions or unmatched items.
    pub fn has_issues(&self) -> bool {
        !self.aliases.collisions().is_empty() || !self.buckets.unmatched().is_empty()
    }
}

impl<T> Default for ListingStore<T>
where
    T: CategorizedItem + Searchable + Clone,
{
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

/// Everything the site renders.
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub catalog: CatalogStore,
    pub projects: ProjectStore,
    pub clients: Vec<Client>,
    pub partners: Vec<Partner>,
}

impl SiteData {
    pub fn load(base: &str) -> Result<Self, DataError> {
        Ok(Self {
            catalog: ListingStore::new(load_categories()?, load_products(base)?),
            projects: ListingStore::new(load_project_categories()?, load_projects(base)?),
            clients: load_clients(base)?,
            partners: load_partners(base)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter_by_subcategory, CategorizedItem};

    fn site() -> SiteData {
        SiteData::load("/").unwrap()
    }

    #[test]
    fn test_bundled_data_loads() {
        let site = site();
        assert_eq!(site.catalog.categories.len(), 7);
        assert_eq!(site.catalog.items.len(), 14);
        assert_eq!(site.projects.categories.len(), 8);
        assert_eq!(site.projects.items.len(), 10);
        assert_eq!(site.clients.len(), 10);
        assert_eq!(site.partners.len(), 8);
        assert!(BUNDLED.is_ok());
    }

    #[test]
    fn test_bundled_data_is_clean() {
        let site = site();
        assert!(!site.catalog.has_issues(), "{:?}", site.catalog.buckets.unmatched());
        assert!(!site.projects.has_issues(), "{:?}", site.projects.buckets.unmatched());
    }

    #[test]
    fn test_every_category_name_and_id_resolves() {
        let site = site();
        for store in [&site.catalog.categories, &site.projects.categories] {
            let aliases = build_alias_index(store);
            for category in store.iter() {
                assert_eq!(aliases.resolve(&category.name), Some(category.id.as_str()));
                assert_eq!(aliases.resolve(&category.id), Some(category.id.as_str()));
            }
        }
    }

    #[test]
    fn test_legacy_labels_land_in_canonical_buckets() {
        let site = site();
        let ups: Vec<_> = site
            .catalog
            .buckets
            .get("ups")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ups, vec!["ups-online-10kva", "ups-interactiva-3kva", "ups-modular-40kva"]);
        assert_eq!(site.catalog.buckets.count("cargadores"), 1);
        assert_eq!(site.projects.buckets.count("grupos-electrogenos"), 2);
    }

    #[test]
    fn test_battery_subcategory_is_case_sensitive() {
        let site = site();
        let bucket = site.catalog.buckets.get("baterias");
        assert_eq!(filter_by_subcategory(bucket, Some("Baterías")).len(), 1);
        assert!(filter_by_subcategory(bucket, Some("baterías")).is_empty());
    }

    #[test]
    fn test_assets_are_public_paths() {
        let site = SiteData::load("/op-ingenieria/").unwrap();
        let planta = &site.catalog.items[0];
        assert_eq!(planta.images, vec!["/op-ingenieria/uploads/2019/11/planta-diesel-30kw.jpg"]);
        assert_eq!(planta.slug, "planta-diesel-30kw");
        assert!(site.catalog.items[13].images[0].starts_with("https://"));

        let hospital = site.projects.items.iter().find(|p| p.id == "5").unwrap();
        assert_eq!(hospital.images.len(), 2);
        let aerocivil = site.projects.items.iter().find(|p| p.id == "2").unwrap();
        assert_eq!(aerocivil.images, vec!["/op-ingenieria/uploads/projects/project-4a.jpg"]);

        let hospital_client = site.clients.iter().find(|c| c.id == "hospital-san-ignacio").unwrap();
        assert_eq!(hospital_client.logo, None);
    }

    #[test]
    fn test_nav_submenu_categories_resolve() {
        let site = site();
        for raw in ["grupos", "ups", "solar", "tableros"] {
            let selection = SelectionState::default().select_category(raw);
            let projection = site.catalog.project(&selection);
            assert!(!projection.is_grid(), "{raw} should resolve");
            assert!(!projection.visible.is_empty());
        }
    }

    #[test]
    fn test_project_subcategory_from_label() {
        let site = site();
        let first = site.projects.items.iter().find(|p| p.id == "1").unwrap();
        assert_eq!(first.subcategory(), Some("Transferencias"));
        let selection = SelectionState::default()
            .select_category("grupos-electrogenos")
            .select_subcategory(Some("Transferencias"));
        let projection = site.projects.project(&selection);
        assert_eq!(projection.visible.len(), 1);
        assert_eq!(projection.subcategories, vec!["Transferencias"]);
    }
}
