pub mod alias_index;
pub mod category;
pub mod item;
pub mod projection;

pub use alias_index::{build_alias_index, folded_spans, normalize_label, AliasCollision, AliasIndex};
pub use category::Category;
pub use item::{CategorizedItem, Product, Project, Searchable, Spec};
pub use projection::{
    filter_by_subcategory, filter_by_text, index_by_category, project, representative_image,
    subcategories_for, CategoryBuckets, Projection,
};
