use crate::layout::header::mega_menu::MegaMenuCategory;
use crate::layout::navigation::{use_navigation, Link};
use crate::shared::icons;
use contracts::data::asset_base;
use contracts::media::public_asset;
use contracts::contact::{build_contact_intent_href, ContactIntent, ContactLink};
use contracts::navigation::{nav_items, HomeSection, NavItem};
use leptos::prelude::*;

#[component]
fn NavEntry(item: NavItem, #[prop(into)] on_follow: Callback<()>) -> impl IntoView {
    let nav = use_navigation();
    let href = item.href();
    let label = item.label;
    let is_active = move || {
        let path = nav.path.get();
        nav.hash.with(|hash| item.is_active(&path, hash))
    };

    view! {
        <span class="nav-link" class:nav-link--active=is_active>
            <Link href=href on_follow=on_follow>{label}</Link>
        </span>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);
    let close_menu = Callback::new(move |_| set_menu_open.set(false));

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > 12.0);
    });
    on_cleanup(move || handle.remove());

    let quote_href = build_contact_intent_href(&ContactLink::intent(
        ContactIntent::Cotizacion,
        "header",
    ));

    view! {
        <header data-zone="header" class="header" class:header--scrolled=move || scrolled.get()>
            <div class="header__content">
                <Link href=HomeSection::Hero.href() class="header__brand" on_follow=close_menu>
                    <img src=public_asset("/uploads/logo.png", asset_base()) alt="O&P Ingeniería" class="header__logo" />
                    <span class="header__title">"O&P Ingeniería"</span>
                </Link>

                <nav class="header__nav" class:header__nav--open=move || menu_open.get()>
                    {nav_items().into_iter().map(|item| {
                        if item.submenu.is_empty() {
                            view! { <NavEntry item=item on_follow=close_menu /> }.into_any()
                        } else {
                            view! { <MegaMenuCategory item=item on_follow=close_menu /> }.into_any()
                        }
                    }).collect_view()}
                </nav>

                <div class="header__actions">
                    <Link href=quote_href class="button button--primary header__cta" on_follow=close_menu>
                        "Solicitar cotización"
                    </Link>
                    <button
                        class="button button--ghost header__toggle"
                        aria-label="Abrir menú"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { icons::icon("x") } else { icons::icon("menu") }}
                    </button>
                </div>
            </div>
        </header>
    }
}
