pub mod footer;
pub mod header;
pub mod navigation;
pub mod scroll_to_hash;

use leptos::prelude::*;
use scroll_to_hash::ScrollToHash;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |        Header (sticky, nav + CTA)        |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <ScrollToHash />
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
