use hero_carousel::RevealConfig;
use leptos::prelude::*;

use super::{PageSection, SectionTitle};
use crate::content::About;

#[component]
pub fn AboutSection(about: About, reveal: RevealConfig, github_url: String) -> impl IntoView {
    view! {
        <PageSection id="about" reveal=reveal>
            <SectionTitle text=about.title />
            <p class="about-body">{about.body}</p>
            <div class="about-actions">
                <a href=about.get_started_href class="btn btn-primary">"Get Started"</a>
                <a href=github_url target="_blank" rel="noopener noreferrer" class="btn btn-bordered">
                    "GitHub"
                </a>
                <a href=about.contact_href class="text-link">"Contact us"</a>
            </div>
        </PageSection>
    }
}
