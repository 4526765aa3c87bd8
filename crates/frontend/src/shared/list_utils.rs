//! Listing helpers: match highlighting and a debounced search field.
use contracts::catalog::projection::MIN_QUERY_LEN;
use contracts::catalog::{folded_spans, normalize_label};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// Byte ranges of `filter` inside `text`, ignoring case and accents
/// the same way the free-text filter does.
///
/// Ranges always fall on `text` char boundaries.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = normalize_label(filter).chars().collect();
    if needle.len() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let hay = folded_spans(text);
    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= hay.len() {
        let window = &hay[start..start + needle.len()];
        if window.iter().map(|(c, _)| *c).eq(needle.iter().copied()) {
            ranges.push((window[0].1.start, window[needle.len() - 1].1.end));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Highlights the matches of `filter` inside `text`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (from, to) in ranges {
        if from > last_pos {
            parts.push(view! { <span>{text[last_pos..from].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[from..to].to_string()}</mark> }.into_any());
        last_pos = to;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Debounced search field with a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (from the URL)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Buscar (mín. {} caracteres)...", MIN_QUERY_LEN)
    } else {
        placeholder
    };

    // Local value before the debounce fires
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new(0u64);

    // Back/forward navigation changes the query from outside.
    Effect::new(move |_| {
        let external = value.get();
        if input_value.with_untracked(|current| current.trim() != external.trim()) {
            set_input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        pending.update_value(|token| *token += 1);
        let token = pending.get_value();

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if pending.try_get_value() == Some(token) {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || value.with(|text| text.trim().chars().count() >= MIN_QUERY_LEN);

    let clear_filter = move |_| {
        pending.update_value(|token| *token += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="search"
                placeholder=placeholder
                aria-label="Buscar"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpiar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("UPS Online 10 kVA", "online"), vec![(4, 10)]);
        assert_eq!(match_ranges("Batería de gel", "BATERÍA"), vec![(0, 8)]);
        assert_eq!(match_ranges("ups ups", "ups"), vec![(0, 3), (4, 7)]);
        assert!(match_ranges("UPS", "up").is_empty());
        assert!(match_ranges("Planta", "solar").is_empty());
    }

    #[test]
    fn test_match_ranges_ignore_accents() {
        assert_eq!(match_ranges("Pantalla Interactiva", "interactíva"), vec![(9, 20)]);
        assert_eq!(match_ranges("Pantalla interactíva", "INTERACTIVA"), vec![(9, 21)]);
        assert_eq!(match_ranges("Grupos Electrógenos", "electrogenos"), vec![(7, 20)]);
        assert_eq!(match_ranges("UPS-Online", "ups online"), vec![(0, 10)]);
    }
}
