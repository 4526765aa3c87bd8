use super::product_card::category_name;
use crate::shared::components::{Badge, ButtonLink, ImageGallery};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::catalog::Product;
use contracts::contact::quote::{build_contact_form_href, build_mailto_href, build_whatsapp_url};
use leptos::prelude::*;

#[component]
pub fn ProductDetailModal(product: Product, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let category = category_name(&product);
    let whatsapp = build_whatsapp_url(&product);
    let mailto = build_mailto_href(&product);
    let form_href = build_contact_form_href(&product);
    let description = product
        .long_description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| product.description.clone());

    view! {
        <Modal title=product.title.clone() subtitle=category.clone() on_close=on_close class="modal--product">
            <div class="product-detail">
                <ImageGallery images=product.images.clone() alt=product.title.clone() />

                <div class="product-detail__info">
                    <div class="product-detail__badges">
                        <Badge variant="primary">{category}</Badge>
                        {product.subcategory.clone().map(|s| view! { <Badge>{s}</Badge> })}
                        {product.sku.clone().map(|s| view! { <Badge variant="accent">"Ref. " {s}</Badge> })}
                    </div>

                    <h3>"Descripción"</h3>
                    <p class="product-detail__description">{description}</p>

                    {(!product.specs.is_empty()).then(|| view! {
                        <h3>"Detalles"</h3>
                        <table class="specs-table">
                            <tbody>
                                {product.specs.iter().map(|spec| view! {
                                    <tr>
                                        <th>{spec.label.clone()}</th>
                                        <td>{spec.value.clone()}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    })}

                    {product.price.clone().map(|p| view! { <p class="product-detail__price">{p}</p> })}

                    <div class="product-detail__actions">
                        <ButtonLink href=whatsapp variant="whatsapp">
                            {icon("message-circle")} "Cotizar por WhatsApp"
                        </ButtonLink>
                        <ButtonLink href=form_href variant="outline">
                            {icon("send")} "Solicitar cotización en formulario"
                        </ButtonLink>
                        <a class="product-detail__mail" href=mailto>
                            {icon("mail")} "Cotizar por correo"
                        </a>
                    </div>
                    <p class="product-detail__hint">
                        "Recomendado: formulario para incluir alcance, ubicación y condición operativa."
                    </p>
                </div>
            </div>
        </Modal>
    }
}
