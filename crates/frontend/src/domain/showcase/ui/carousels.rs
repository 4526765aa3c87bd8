use crate::shared::components::{ButtonLink, LogoCard, LogoCarousel, SectionHeader};
use crate::shared::site_data::site_data;
use contracts::carousel::{CarouselConfig, Responsive};
use contracts::navigation::Route;
use contracts::showcase::{featured, LogoItem};
use leptos::prelude::*;

/// Featured entries first; everything when nothing is featured.
fn carousel_cards<T: LogoItem>(items: &[T]) -> Vec<LogoCard> {
    let picked = featured(items);
    if picked.is_empty() {
        items.iter().map(LogoCard::from_item).collect()
    } else {
        picked.into_iter().map(LogoCard::from_item).collect()
    }
}

#[component]
pub fn ClientsCarousel() -> impl IntoView {
    let cards = carousel_cards(&site_data().clients);

    view! {
        <div class="clients-carousel">
            <SectionHeader
                eyebrow="CLIENTES"
                title="Confianza construida en campo"
                subtitle="Organizaciones que confían en nuestra ingeniería para continuidad energética, energía solar y soluciones eléctricas de operación crítica."
                centered=true
            />
            {(!cards.is_empty()).then(|| view! { <LogoCarousel items=cards label="Clientes" /> })}
            <div class="section-actions">
                <ButtonLink href=Route::CLIENTS variant="outline">"Ver clientes"</ButtonLink>
            </div>
        </div>
    }
}

#[component]
pub fn PartnersCarousel() -> impl IntoView {
    let cards = carousel_cards(&site_data().partners);
    let config = CarouselConfig {
        responsive: Responsive {
            base: 2,
            sm: Some(3),
            md: Some(4),
            lg: Some(5),
            xl: Some(6),
        },
        ..CarouselConfig::default()
    };

    view! {
        <div class="partners-carousel">
            <SectionHeader
                eyebrow="PARTNERS"
                title="Marcas con las que trabajamos"
                subtitle="Equipos y componentes de fabricantes reconocidos, con soporte y repuestos disponibles."
                centered=true
            />
            {(!cards.is_empty()).then(|| view! { <LogoCarousel items=cards label="Partners" config=config /> })}
            <div class="section-actions">
                <ButtonLink href=Route::PARTNERS variant="outline">"Ver partners"</ButtonLink>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_cards_prefer_featured() {
        let clients = &site_data().clients;
        let cards = carousel_cards(clients);
        let featured_count = featured(clients).len();
        if featured_count == 0 {
            assert_eq!(cards.len(), clients.len());
        } else {
            assert_eq!(cards.len(), featured_count);
        }
    }
}
