use crate::domain::contact::ui::ContactCta;
use crate::domain::marketing::content::HERO_STATS;
use crate::domain::marketing::ui::AboutSection;
use crate::shared::components::SectionHeader;
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about">
            <section class="hero hero--dark">
                <SectionHeader
                    eyebrow="NOSOTROS"
                    title="O&P Ingeniería"
                    subtitle="Ingeniería eléctrica, respaldo energético y energía solar desde 2014."
                />
                <dl class="hero__stats">
                    {HERO_STATS.iter().map(|stat| view! {
                        <div class="hero__stat">
                            <dt>{stat.value}</dt>
                            <dd>{stat.label}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </section>
            <section>
                <AboutSection />
            </section>
            <ContactCta source="about-page" />
        </div>
    }
}
