use super::about::AboutSection;
use super::contact_section::ContactSection;
use super::hero::HeroSection;
use super::services::ServicesSection;
use crate::domain::catalog::ui::ProductsPreview;
use crate::domain::contact::ui::ContactCta;
use crate::domain::projects::ui::ProjectsPreview;
use crate::domain::showcase::ui::{ClientsCarousel, PartnersCarousel};
use contracts::navigation::HomeSection;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page page--landing">
            <section id=HomeSection::Hero.id()><HeroSection /></section>
            <section id=HomeSection::About.id()><AboutSection /></section>
            <section id=HomeSection::Services.id()><ServicesSection /></section>
            <section id=HomeSection::Products.id()><ProductsPreview /></section>
            <section id=HomeSection::Projects.id()><ProjectsPreview /></section>
            <section id=HomeSection::Clients.id()><ClientsCarousel /></section>
            <section id=HomeSection::Partners.id()><PartnersCarousel /></section>
            <section id=HomeSection::Contact.id()><ContactSection /></section>
            <ContactCta source="home-cta" />
        </div>
    }
}
