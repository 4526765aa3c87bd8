use crate::layout::navigation::NavigationContext;
use crate::routes::routes::AppRoutes;
use crate::shared::site_data::report_data_issues;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Location store for the whole app; pages read path, query and hash from it.
    let nav = NavigationContext::new();
    nav.init_history_integration();
    provide_context(nav);

    report_data_issues();

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
