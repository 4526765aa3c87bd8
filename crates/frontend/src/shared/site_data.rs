//! Component access to the bundled site data.

use contracts::data::{SiteData, BUNDLED};
use once_cell::sync::Lazy;

static EMPTY: Lazy<SiteData> = Lazy::new(SiteData::default);

/// Bundled site data; an empty set when the bundle failed to load (the error is
/// reported once by [`report_data_issues`]).
pub fn site_data() -> &'static SiteData {
    BUNDLED.as_ref().unwrap_or(&*EMPTY)
}

/// Logs load failures and data-quality problems to the browser console.
pub fn report_data_issues() {
    let data = match BUNDLED.as_ref() {
        Ok(data) => data,
        Err(e) => {
            log::error!("site data failed to load ({}): {}", e.dataset(), e);
            return;
        }
    };

    let listings = [
        ("catalog", &data.catalog.aliases, data.catalog.buckets.unmatched().len()),
        ("projects", &data.projects.aliases, data.projects.buckets.unmatched().len()),
    ];
    for (name, aliases, unmatched) in listings {
        for collision in aliases.collisions() {
            log::warn!(
                "{}: label `{}` claimed by `{}` and `{}`",
                name,
                collision.alias,
                collision.kept,
                collision.ignored
            );
        }
        if unmatched > 0 {
            log::warn!("{}: {} item(s) match no category", name, unmatched);
        }
    }
}
