//! Alias table: any known textual label of a category → canonical category id.

use super::category::Category;
use std::collections::HashMap;
use std::ops::Range;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonical form of a category label.
///
/// Lower-cases, strips diacritics, collapses every run of non-alphanumeric
/// characters into one space and trims, so `"Energía Fotovoltaica"` and
/// `"energia-fotovoltaica"` normalize to the same key.
pub fn normalize_label(value: &str) -> String {
    let folded = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    let mut out = String::with_capacity(folded.len());
    let mut pending_space = false;
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

/// Folds `text` by the rules of [`normalize_label`], keeping the source byte
/// range of every folded character.
///
/// The folded characters joined together equal `normalize_label(text)`; a
/// collapsed separator points at the first character of its run.
pub fn folded_spans(text: &str) -> Vec<(char, Range<usize>)> {
    let mut out: Vec<(char, Range<usize>)> = Vec::new();
    let mut gap: Option<Range<usize>> = None;
    for (start, c) in text.char_indices() {
        let span = start..start + c.len_utf8();
        let folded = std::iter::once(c)
            .nfd()
            .filter(|m| !is_combining_mark(*m))
            .collect::<String>()
            .to_lowercase();
        for f in folded.chars() {
            if f.is_ascii_alphanumeric() {
                if let Some(sep) = gap.take() {
                    if !out.is_empty() {
                        out.push((' ', sep));
                    }
                }
                out.push((f, span.clone()));
            } else if gap.is_none() {
                gap = Some(span.clone());
            }
        }
    }
    out
}

/// A normalized alias claimed by more than one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCollision {
    pub alias: String,
    /// Category that registered the alias first and keeps it.
    pub kept: String,
    pub ignored: String,
}

#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    entries: HashMap<String, String>,
    category_ids: Vec<String>,
    collisions: Vec<AliasCollision>,
}

/// Builds the alias table for `categories`.
///
/// Each category registers its name, its id and its aliases. The first category
/// (in input order) to claim a normalized alias keeps it; later claims are
/// dropped and recorded in [`AliasIndex::collisions`].
pub fn build_alias_index(categories: &[Category]) -> AliasIndex {
    let mut index = AliasIndex::default();

    for category in categories {
        if !index.category_ids.contains(&category.id) {
            index.category_ids.push(category.id.clone());
        }

        for label in category.labels() {
            let alias = normalize_label(label);
            if alias.is_empty() {
                continue;
            }
            match index.entries.get(&alias) {
                None => {
                    index.entries.insert(alias, category.id.clone());
                }
                Some(owner) if owner != &category.id => {
                    let collision = AliasCollision {
                        alias,
                        kept: owner.clone(),
                        ignored: category.id.clone(),
                    };
                    if !index.collisions.contains(&collision) {
                        index.collisions.push(collision);
                    }
                }
                Some(_) => {}
            }
        }
    }

    index
}

impl AliasIndex {
    /// Looks up an already normalized alias.
    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(String::as_str)
    }

    /// Resolves a raw label from the data.
    ///
    /// The full label is tried first; for `base/sub` labels the base segment is
    /// tried next.
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let full = normalize_label(raw);
        if let Some(id) = self.get(&full) {
            return Some(id);
        }
        let base = raw.split('/').map(str::trim).find(|part| !part.is_empty())?;
        if base.len() == raw.trim().len() {
            return None;
        }
        self.get(&normalize_label(base))
    }

    pub fn contains_category(&self, id: &str) -> bool {
        self.category_ids.iter().any(|known| known == id)
    }

    /// Category ids in the order the categories were given.
    pub fn category_ids(&self) -> &[String] {
        &self.category_ids
    }

    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Category> {
        vec![
            Category::new("energia-fotovoltaica", "Energía Fotovoltaica")
                .with_aliases(["solar", "Paneles Solares"]),
            Category::new("ups", "Sistemas Ininterrumpidos de Potencia (UPS)")
                .with_aliases(["ups"]),
            Category::new("baterias", "Baterías"),
        ]
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("Energía Fotovoltaica"), "energia fotovoltaica");
        assert_eq!(normalize_label("energia-fotovoltaica"), "energia fotovoltaica");
        assert_eq!(normalize_label("  --Grupos   Electrógenos / Transferencias-- "), "grupos electrogenos transferencias");
        assert_eq!(normalize_label("Ñandú"), "nandu");
        assert_eq!(normalize_label("***"), "");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn test_folded_spans_track_source_bytes() {
        for text in ["Energía Fotovoltaica", "  --Grupos   Electrógenos / Transferencias-- ", "Ñandú", "***"] {
            let joined: String = folded_spans(text).into_iter().map(|(c, _)| c).collect();
            assert_eq!(joined, normalize_label(text));
        }

        assert_eq!(
            folded_spans("Té  X"),
            vec![('t', 0..1), ('e', 1..3), (' ', 3..4), ('x', 5..6)]
        );
    }

    #[test]
    fn test_name_and_id_resolve_to_own_category() {
        let categories = fixture();
        let index = build_alias_index(&categories);
        for category in &categories {
            assert_eq!(index.resolve(&category.name), Some(category.id.as_str()));
            assert_eq!(index.resolve(&category.id), Some(category.id.as_str()));
        }
        assert_eq!(index.resolve("PANELES-SOLARES"), Some("energia-fotovoltaica"));
        assert_eq!(index.resolve("Plantas"), None);
    }

    #[test]
    fn test_first_registrant_wins_on_duplicate_alias() {
        let categories = vec![
            Category::new("plantas", "Plantas Eléctricas").with_aliases(["generadores"]),
            Category::new("grupos", "Grupos Electrógenos").with_aliases(["Generadores", "grupos"]),
        ];
        let index = build_alias_index(&categories);
        assert_eq!(index.resolve("generadores"), Some("plantas"));
        assert_eq!(index.resolve("grupos"), Some("grupos"));
        assert_eq!(
            index.collisions(),
            &[AliasCollision {
                alias: "generadores".into(),
                kept: "plantas".into(),
                ignored: "grupos".into(),
            }]
        );
    }

    #[test]
    fn test_own_duplicates_are_not_collisions() {
        // name "UPS" and id "ups" normalize to the same key
        let index = build_alias_index(&[Category::new("ups", "UPS").with_aliases(["ups"])]);
        assert!(index.collisions().is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_resolve_base_segment_of_path_label() {
        let index = build_alias_index(&fixture());
        assert_eq!(index.resolve("baterias/Plomo ácido"), Some("baterias"));
        assert_eq!(index.resolve("Energía Fotovoltaica / Off-grid"), Some("energia-fotovoltaica"));
        assert_eq!(index.resolve("/"), None);
        assert_eq!(index.resolve(""), None);
    }

    #[test]
    fn test_missing_aliases_fall_back_to_name_and_id() {
        let index = build_alias_index(&[Category::new("tableros", "Tableros Eléctricos")]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.category_ids(), &["tableros".to_string()]);
        assert!(index.contains_category("tableros"));
        assert!(!index.contains_category("Tableros Eléctricos"));
    }
}
