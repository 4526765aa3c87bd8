use crate::layout::navigation::{use_navigation, Link};
use crate::shared::icons;
use contracts::navigation::NavItem;
use leptos::prelude::*;

/// Nav entry with a hover/focus dropdown (products submenu).
#[component]
pub fn MegaMenuCategory(item: NavItem, #[prop(into)] on_follow: Callback<()>) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let nav = use_navigation();
    let label = item.label;
    let href = item.href();
    let submenu = item.submenu.clone();
    let active_item = item;
    let is_active = move || {
        let path = nav.path.get();
        nav.hash.with(|hash| active_item.is_active(&path, hash))
    };
    let close = Callback::new(move |_| {
        set_is_open.set(false);
        on_follow.run(());
    });

    view! {
        <div
            class="mega-menu-category"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
            on:focusin=move |_| set_is_open.set(true)
            on:focusout=move |_| set_is_open.set(false)
        >
            <button
                class="mega-menu-btn"
                class:mega-menu-btn-active=is_active
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span>{label}</span>
                <span
                    class="mega-menu-chevron"
                    class:mega-menu-chevron-open=move || is_open.get()
                >
                    {icons::icon("chevron-down")}
                </span>
            </button>

            <div
                class="mega-menu-panel"
                class:mega-menu-panel-open=move || is_open.get()
            >
                <div class="mega-menu-content">
                    <Link href=href class="mega-menu-card mega-menu-card--all" on_follow=close>
                        {icons::icon("layout-grid")}
                        <span>"Ver todo el catálogo"</span>
                    </Link>
                    {submenu.into_iter().map(|(label, href)| {
                        view! {
                            <Link href=href class="mega-menu-card" on_follow=close>
                                <span class="mega-menu-card-title">{label}</span>
                            </Link>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
