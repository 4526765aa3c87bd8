use crate::domain::catalog::ui::CatalogPage;
use crate::domain::contact::ui::ContactPage;
use crate::domain::info::{AboutPage, LegalPage, NotFoundPage, ServicesPage};
use crate::domain::marketing::ui::LandingPage;
use crate::domain::projects::ui::ProjectsPage;
use crate::domain::showcase::ui::{ClientsPage, PartnersPage};
use crate::layout::navigation::use_navigation;
use crate::layout::Shell;
use contracts::navigation::Route;
use leptos::prelude::*;

fn render(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <LandingPage /> }.into_any(),
        Route::Catalog => view! { <CatalogPage /> }.into_any(),
        Route::Projects => view! { <ProjectsPage /> }.into_any(),
        Route::Clients => view! { <ClientsPage /> }.into_any(),
        Route::Partners => view! { <PartnersPage /> }.into_any(),
        Route::Services => view! { <ServicesPage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Contact => view! { <ContactPage /> }.into_any(),
        Route::Legal => view! { <LegalPage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_navigation();
    // The page is rebuilt on route changes only, not on query changes
    let route = Memo::new(move |_| nav.route());

    Effect::new(move |_| {
        document().set_title(route.get().title());
    });

    view! {
        <Shell>
            {move || render(route.get())}
        </Shell>
    }
}
