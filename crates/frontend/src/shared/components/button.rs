use crate::layout::navigation::Link;
use leptos::prelude::*;

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("primary") {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        "whatsapp" => "button--whatsapp",
        _ => "button--primary",
    }
}

fn size_class(size: Option<&str>) -> &'static str {
    match size {
        Some("sm") => "button--sm",
        Some("lg") => "button--lg",
        _ => "",
    }
}

/// Button component with variants (primary, outline, ghost, whatsapp) and sizes (sm, md, lg)
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] size: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        format!(
            "button {} {} {}",
            variant_class(variant.get().as_deref()),
            size_class(size.get().as_deref()),
            class.get().unwrap_or_default()
        )
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=classes
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Link styled as a button. In-app hrefs go through the router, anything
/// else opens in a new tab.
#[component]
pub fn ButtonLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] variant: Option<String>,
    #[prop(optional, into)] size: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "button {} {}",
        variant_class(variant.as_deref()),
        size_class(size.as_deref())
    );

    if crate::layout::navigation::is_internal(&href) {
        view! { <Link href=href class=class>{children()}</Link> }.into_any()
    } else {
        view! {
            <a href=href class=class target="_blank" rel="noopener noreferrer">{children()}</a>
        }.into_any()
    }
}
