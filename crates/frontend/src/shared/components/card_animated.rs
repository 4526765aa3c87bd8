//! CardAnimated: a Thaw Card wrapper with an appear animation.
//!
//! The animation lives in `site.css` (`@keyframes card-appear`); in grids the
//! delay grows with the card index:
//! ```text
//! <CardAnimated delay_ms=stagger_delay(index)>
//!     <p>"Content"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Stagger step and its cap, so long grids do not crawl in.
const STAGGER_STEP_MS: u32 = 60;
const STAGGER_MAX_MS: u32 = 480;

pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS).min(STAGGER_MAX_MS)
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for the stagger effect).
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=format!("card-animated {}", class) attr:style=style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 180);
        assert_eq!(stagger_delay(100), STAGGER_MAX_MS);
    }
}
