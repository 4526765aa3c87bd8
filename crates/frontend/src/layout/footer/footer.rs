use crate::layout::navigation::Link;
use crate::shared::icons;
use chrono::Datelike;
use contracts::contact::CONTACT_DATA;
use contracts::data::asset_base;
use contracts::media::public_asset;
use contracts::navigation::{HomeSection, Route};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <img src=public_asset("/uploads/logo.png", asset_base()) alt="O&P Ingeniería" class="footer__logo" />
                    <p>
                        "Ingeniería eléctrica e industrial: energía de respaldo, sistemas solares, "
                        "tableros y mantenimiento para operaciones críticas."
                    </p>
                </div>

                <div class="footer__column">
                    <h4>"Empresa"</h4>
                    <Link href=HomeSection::About.href()>"Nosotros"</Link>
                    <Link href=Route::SERVICES>"Servicios"</Link>
                    <Link href=Route::PROJECTS>"Proyectos"</Link>
                    <Link href=Route::CLIENTS>"Clientes"</Link>
                    <Link href=Route::PARTNERS>"Aliados"</Link>
                </div>

                <div class="footer__column">
                    <h4>"Productos"</h4>
                    <Link href=Route::CATALOG>"Catálogo completo"</Link>
                    <Link href=format!("{}?cat=plantas", Route::CATALOG)>"Plantas eléctricas"</Link>
                    <Link href=format!("{}?cat=ups", Route::CATALOG)>"UPS"</Link>
                    <Link href=format!("{}?cat=solar", Route::CATALOG)>"Energía solar"</Link>
                </div>

                <div class="footer__column footer__contact">
                    <h4>"Contacto"</h4>
                    <a href=CONTACT_DATA.mailto_href()>{icons::icon("mail")}<span>{CONTACT_DATA.email}</span></a>
                    <a href=CONTACT_DATA.phone_href>{icons::icon("phone")}<span>{CONTACT_DATA.phone_display}</span></a>
                    <a href=CONTACT_DATA.whatsapp_href() target="_blank" rel="noopener noreferrer">
                        {icons::icon("message-circle")}<span>"WhatsApp"</span>
                    </a>
                    <span>{icons::icon("map-pin")}{CONTACT_DATA.city}</span>
                    <span>{icons::icon("clock")}{CONTACT_DATA.hours}</span>
                </div>
            </div>

            <div class="footer__bottom">
                <span>{format!("© {} O&P Ingeniería S.A.S. Todos los derechos reservados.", year)}</span>
                <Link href=Route::LEGAL>"Aviso legal"</Link>
            </div>
        </footer>
    }
}
