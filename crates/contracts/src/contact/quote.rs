//! Quote requests for a single catalog product.

use super::intent::{build_contact_intent_href, ContactIntent, ContactLink};
use super::CONTACT_DATA;
use crate::catalog::Product;

pub fn build_quote_subject(product: &Product) -> String {
    format!("Cotización: {}", product.title)
}

pub fn build_quote_body(product: &Product) -> String {
    let mut lines = vec![
        "Hola,".to_string(),
        String::new(),
        "Me interesa recibir información y cotización del siguiente producto:".to_string(),
        String::new(),
        format!("Producto: {}", product.title),
    ];
    if let Some(category) = product.category_id.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!("Categoría: {}", category));
    }
    if let Some(subcategory) = product.subcategory.as_deref() {
        lines.push(format!("Subcategoría: {}", subcategory));
    }
    lines.extend([
        String::new(),
        "Por favor indíquenme disponibilidad, tiempos de entrega y condiciones.".to_string(),
        String::new(),
        "Gracias.".to_string(),
    ]);
    lines.join("\n")
}

pub fn build_whatsapp_url(product: &Product) -> String {
    let mut lines = vec![
        "Hola, me interesa cotizar este producto:".to_string(),
        format!("• {}", product.title),
    ];
    if let Some(category) = product.category_id.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!("• Categoría: {}", category));
    }
    if let Some(subcategory) = product.subcategory.as_deref() {
        lines.push(format!("• Subcategoría: {}", subcategory));
    }

    format!(
        "{}?text={}",
        CONTACT_DATA.whatsapp_href(),
        urlencoding::encode(&lines.join("\n"))
    )
}

pub fn build_mailto_href(product: &Product) -> String {
    format!(
        "{}?subject={}&body={}",
        CONTACT_DATA.mailto_href(),
        urlencoding::encode(&build_quote_subject(product)),
        urlencoding::encode(&build_quote_body(product))
    )
}

/// Contact form pre-filled with the quote subject and body.
pub fn build_contact_form_href(product: &Product) -> String {
    build_contact_intent_href(&ContactLink {
        intent: Some(ContactIntent::Cotizacion),
        source: Some("product-detail".to_string()),
        subject: Some(build_quote_subject(product)),
        message: Some(build_quote_body(product)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::parse_contact_form_params;
    use serde_json::json;

    fn product() -> Product {
        serde_json::from_value::<Product>(json!({
            "id": "planta-30kw",
            "title": "Planta Eléctrica 30KW",
            "category": "Plantas Eléctricas",
            "categoryId": "plantas",
            "subcategory": "Diésel"
        }))
        .unwrap()
        .normalized()
    }

    #[test]
    fn test_quote_body_lists_category_lines() {
        let body = build_quote_body(&product());
        assert!(body.starts_with("Hola,\n\nMe interesa"));
        assert!(body.contains("Producto: Planta Eléctrica 30KW\nCategoría: plantas\nSubcategoría: Diésel\n"));
        assert!(body.ends_with("Gracias."));
    }

    #[test]
    fn test_quote_body_without_category() {
        let mut product = product();
        product.category_id = None;
        product.subcategory = None;
        let body = build_quote_body(&product);
        assert!(!body.contains("Categoría"));
        assert!(body.contains("Producto: Planta Eléctrica 30KW\n\nPor favor"));
    }

    #[test]
    fn test_whatsapp_and_mailto_are_encoded() {
        let url = build_whatsapp_url(&product());
        assert!(url.starts_with("https://wa.me/573133638760?text=Hola%2C%20me%20interesa"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));

        let mailto = build_mailto_href(&product());
        assert!(mailto.starts_with("mailto:info@opingenieria.com?subject=Cotizaci%C3%B3n%3A%20Planta"));
        assert!(mailto.contains("&body=Hola%2C%0A%0A"));
    }

    #[test]
    fn test_contact_form_href_prefills_quote() {
        let href = build_contact_form_href(&product());
        let (_, hash) = href.split_once('#').unwrap();
        let prefill = parse_contact_form_params("", hash);
        assert_eq!(prefill.intent, ContactIntent::Cotizacion);
        assert_eq!(prefill.subject.as_deref(), Some("Cotización: Planta Eléctrica 30KW"));
        assert_eq!(prefill.message, Some(build_quote_body(&product())));
    }
}
