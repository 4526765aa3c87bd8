use crate::catalog::AliasIndex;
use serde::{Deserialize, Serialize};

/// The visitor's selection on a listing page, mirrored in `?cat=&subcat=&q=`.
///
/// The URL is the source of truth: the UI parses a fresh value on every location
/// change and writes the next value back, it never mutates a shared one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(rename = "cat", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "subcat", default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(rename = "q", default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Query keys owned by [`SelectionState`]; every other parameter belongs to
/// someone else (campaign tags, contact intent) and is carried through untouched.
const OWN_KEYS: [&str; 3] = ["cat", "subcat", "q"];

fn query_pairs(search: &str) -> impl Iterator<Item = &str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
}

fn pair_key(pair: &str) -> String {
    let raw = pair.split('=').next().unwrap_or_default().replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(key) => key.into_owned(),
        Err(_) => raw,
    }
}

fn is_own_key(key: &str) -> bool {
    OWN_KEYS.contains(&key)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl SelectionState {
    /// Parses `location.search` (with or without the leading `?`).
    ///
    /// Unrelated parameters are ignored and a repeated key keeps its first value;
    /// a malformed query yields the empty selection.
    pub fn from_query_string(search: &str) -> Self {
        let mut seen: Vec<String> = Vec::new();
        let own: Vec<&str> = query_pairs(search)
            .filter(|pair| {
                let key = pair_key(pair);
                if !is_own_key(&key) || seen.contains(&key) {
                    return false;
                }
                seen.push(key);
                true
            })
            .collect();
        if own.is_empty() {
            return Self::default();
        }
        serde_qs::from_str::<SelectionState>(&own.join("&"))
            .map(Self::tidied)
            .unwrap_or_default()
    }

    /// Query string without the leading `?`; empty when nothing is selected.
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(&self.clone().tidied()).unwrap_or_default()
    }

    /// `path` with this selection appended as its query string.
    pub fn href(&self, path: &str) -> String {
        self.merged_href(path, "")
    }

    /// `current` (a `location.search`) with its selection keys replaced by this
    /// selection; other parameters keep their order and encoding.
    pub fn merged_query(&self, current: &str) -> String {
        let mut pairs: Vec<String> = query_pairs(current)
            .filter(|pair| !is_own_key(&pair_key(pair)))
            .map(str::to_string)
            .collect();
        let own = self.to_query_string();
        if !own.is_empty() {
            pairs.push(own);
        }
        pairs.join("&")
    }

    /// Like [`SelectionState::href`], keeping the unrelated parameters of `current`.
    pub fn merged_href(&self, path: &str, current: &str) -> String {
        let query = self.merged_query(current);
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }

    /// Switching category always resets the subcategory.
    pub fn select_category(self, category_id: impl Into<String>) -> Self {
        Self {
            category: non_blank(Some(category_id.into())),
            subcategory: None,
            query: self.query,
        }
    }

    pub fn select_subcategory(self, subcategory: Option<&str>) -> Self {
        Self {
            subcategory: non_blank(subcategory.map(str::to_string)),
            ..self
        }
    }

    /// Back to the category grid.
    pub fn clear_selection(self) -> Self {
        Self {
            category: None,
            subcategory: None,
            query: self.query,
        }
    }

    pub fn with_query(self, query: Option<&str>) -> Self {
        Self {
            query: non_blank(query.map(str::to_string)),
            ..self
        }
    }

    pub fn has_filters(&self) -> bool {
        self.category.is_some() || self.subcategory.is_some() || self.query.is_some()
    }

    /// Resolves `cat` against the known categories.
    ///
    /// An exact id is kept, a name or alias is rewritten to its canonical id, and an
    /// unknown value resets the selection to the grid view. A subcategory without a
    /// category is dropped.
    pub fn validated(&self, aliases: &AliasIndex) -> Self {
        let category = self.category.as_deref().and_then(|raw| {
            if aliases.contains_category(raw) {
                Some(raw.to_string())
            } else {
                aliases.resolve(raw).map(str::to_string)
            }
        });

        match category {
            Some(id) => Self {
                category: Some(id),
                subcategory: self.subcategory.clone(),
                query: self.query.clone(),
            },
            None => Self {
                category: None,
                subcategory: None,
                query: self.query.clone(),
            },
        }
    }

    fn tidied(self) -> Self {
        Self {
            category: non_blank(self.category),
            subcategory: non_blank(self.subcategory),
            query: non_blank(self.query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{build_alias_index, Category};

    fn aliases() -> AliasIndex {
        build_alias_index(&[
            Category::new("plantas", "Plantas Eléctricas").with_aliases(["grupos"]),
            Category::new("ups", "UPS y Estabilizadores"),
        ])
    }

    #[test]
    fn test_select_category_clears_subcategory() {
        let state = SelectionState::default()
            .select_category("plantas")
            .select_subcategory(Some("Diésel"))
            .with_query(Some("30kw"));
        assert_eq!(state.subcategory.as_deref(), Some("Diésel"));

        let next = state.select_category("ups");
        assert_eq!(next.category.as_deref(), Some("ups"));
        assert_eq!(next.subcategory, None);
        assert_eq!(next.query.as_deref(), Some("30kw"));
    }

    #[test]
    fn test_select_subcategory_keeps_category() {
        let state = SelectionState::default().select_category("plantas");
        let with_sub = state.clone().select_subcategory(Some("  Diésel "));
        assert_eq!(with_sub.category.as_deref(), Some("plantas"));
        assert_eq!(with_sub.subcategory.as_deref(), Some("Diésel"));
        assert_eq!(with_sub.select_subcategory(None), state);
    }

    #[test]
    fn test_clear_selection() {
        let state = SelectionState::default()
            .select_category("ups")
            .select_subcategory(Some("Online"))
            .clear_selection();
        assert_eq!(state, SelectionState::default());
        assert!(!state.has_filters());
    }

    #[test]
    fn test_parse_query_string() {
        let state = SelectionState::from_query_string("?cat=plantas&subcat=Di%C3%A9sel&intent=quote");
        assert_eq!(state.category.as_deref(), Some("plantas"));
        assert_eq!(state.subcategory.as_deref(), Some("Diésel"));
        assert_eq!(state.query, None);

        assert_eq!(SelectionState::from_query_string(""), SelectionState::default());
        assert_eq!(SelectionState::from_query_string("?cat="), SelectionState::default());
    }

    #[test]
    fn test_query_string_round_trip() {
        let state = SelectionState::default()
            .select_category("plantas")
            .select_subcategory(Some("Plomo ácido / AGM"));
        let query = state.to_query_string();
        assert!(query.starts_with("cat=plantas&subcat="));
        assert_eq!(SelectionState::from_query_string(&query), state);
        assert_eq!(SelectionState::default().to_query_string(), "");
        assert_eq!(SelectionState::default().href("/catalogo"), "/catalogo");
        assert_eq!(
            SelectionState::default().select_category("ups").href("/catalogo"),
            "/catalogo?cat=ups"
        );
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let state = SelectionState::from_query_string("?cat=ups&cat=plantas&q=online&q=");
        assert_eq!(state.category.as_deref(), Some("ups"));
        assert_eq!(state.query.as_deref(), Some("online"));

        let nested = SelectionState::from_query_string("utm[a]=1&utm=2&subcat=Litio");
        assert_eq!(nested.subcategory.as_deref(), Some("Litio"));
    }

    #[test]
    fn test_merge_keeps_unrelated_params() {
        let current = "?utm_source=google&cat=ups&intent=cotizacion&subcat=Online";
        let next = SelectionState::from_query_string(current).select_category("plantas");
        assert_eq!(
            next.merged_query(current),
            "utm_source=google&intent=cotizacion&cat=plantas"
        );
        assert_eq!(
            SelectionState::default().merged_href("/catalogo", current),
            "/catalogo?utm_source=google&intent=cotizacion"
        );
        assert_eq!(SelectionState::default().merged_href("/catalogo", "?cat=ups"), "/catalogo");
    }

    #[test]
    fn test_unknown_category_resets_to_grid() {
        let state = SelectionState::default()
            .select_category("transformadores")
            .select_subcategory(Some("Secos"));
        assert_eq!(state.validated(&aliases()), SelectionState::default());
    }

    #[test]
    fn test_alias_in_url_becomes_canonical_id() {
        let state = SelectionState::from_query_string("cat=grupos&subcat=Di%C3%A9sel");
        let validated = state.validated(&aliases());
        assert_eq!(validated.category.as_deref(), Some("plantas"));
        assert_eq!(validated.subcategory.as_deref(), Some("Diésel"));
    }
}
