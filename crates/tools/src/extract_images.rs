//! Collects image URLs from an exported site dump (any JSON shape).

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const IMAGE_EXT: &str = r"(?:jpg|jpeg|png|gif|bmp|webp|svg)";

static IMAGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r#"(?i)https?://[^\s"']+\.{IMAGE_EXT}(?:\?[^\s"']*)?"#),
        format!(r#"(?i)/wp-content/uploads/[^\s"']+\.{IMAGE_EXT}(?:\?[^\s"']*)?"#),
        format!(r#"(?i)"[^"]+\.{IMAGE_EXT}(?:\?[^"]*)?""#),
        format!(r#"(?i)'[^']+\.{IMAGE_EXT}(?:\?[^']*)?'"#),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("image pattern is valid"))
    .collect()
});

const KEEP_MARKERS: [&str; 6] = ["http", ".jpg", ".jpeg", ".png", ".gif", "wp-content/uploads"];

/// Every image URL found in `value`, absolutized against `base_url`, deduplicated in
/// first-seen order.
pub fn extract_image_urls(value: &Value, base_url: &str) -> Vec<String> {
    let mut raw = Vec::new();
    collect(value, &mut raw);

    let mut urls: Vec<String> = Vec::new();
    for candidate in raw {
        if !KEEP_MARKERS.iter().any(|marker| candidate.contains(marker)) {
            continue;
        }
        let url = absolutize(&candidate, base_url);
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

fn collect(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) => {
            for pattern in IMAGE_PATTERNS.iter() {
                for found in pattern.find_iter(text) {
                    let clean = found
                        .as_str()
                        .trim_start_matches(['"', '\''])
                        .trim_end_matches(['"', '\''])
                        .trim();
                    if !clean.is_empty() && !out.iter().any(|known| known == clean) {
                        out.push(clean.to_string());
                    }
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect(item, out)),
        Value::Object(map) => map.values().for_each(|item| collect(item, out)),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

fn absolutize(url: &str, base_url: &str) -> String {
    if url.starts_with("/wp-content/") {
        format!("{base_url}{url}")
    } else if url.starts_with("wp-content/") {
        format!("{base_url}/{url}")
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://opingenieria.com";

    #[test]
    fn test_walks_nested_values() {
        let dump = json!({
            "posts": [
                { "content": "<img src=\"https://opingenieria.com/wp-content/uploads/2019/11/002B.jpg\">" },
                { "meta": { "thumb": "/wp-content/uploads/2020/01/ups.png?ver=2" } }
            ],
            "count": 2,
            "draft": null
        });
        let urls = extract_image_urls(&dump, BASE);
        assert_eq!(
            urls,
            vec![
                "https://opingenieria.com/wp-content/uploads/2019/11/002B.jpg",
                "https://opingenieria.com/wp-content/uploads/2020/01/ups.png?ver=2",
            ]
        );
    }

    #[test]
    fn test_quoted_paths_are_unquoted_and_filtered() {
        let dump = json!([
            "background: url('wp-content/uploads/hero.webp')",
            "data-src=\"images/logo.PNG\"",
            "'icon.svg'"
        ]);
        let urls = extract_image_urls(&dump, BASE);
        assert!(urls.contains(&"https://opingenieria.com/wp-content/uploads/hero.webp".to_string()));
        // `.PNG` upper-case matches the pattern but not the lower-case keep markers
        assert!(!urls.iter().any(|u| u.ends_with("logo.PNG")));
        // svg without http or wp-content is dropped
        assert!(!urls.iter().any(|u| u.ends_with("icon.svg")));
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let dump = json!({
            "a": "https://cdn.example.com/a.jpg",
            "b": "https://cdn.example.com/b.gif https://cdn.example.com/a.jpg"
        });
        let urls = extract_image_urls(&dump, BASE);
        assert_eq!(urls, vec!["https://cdn.example.com/a.jpg", "https://cdn.example.com/b.gif"]);
    }

    #[test]
    fn test_urls_follow_document_key_order() {
        let dump: Value = serde_json::from_str(
            r#"{ "zeta": "https://x.com/z.jpg", "alpha": "https://x.com/a.jpg" }"#,
        )
        .unwrap();
        assert_eq!(
            extract_image_urls(&dump, BASE),
            vec!["https://x.com/z.jpg", "https://x.com/a.jpg"]
        );
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(absolutize("/wp-content/x.jpg", BASE), "https://opingenieria.com/wp-content/x.jpg");
        assert_eq!(absolutize("wp-content/x.jpg", BASE), "https://opingenieria.com/wp-content/x.jpg");
        assert_eq!(absolutize("uploads/x.jpg", BASE), "uploads/x.jpg");
    }
}
