use hero_carousel::components::HeroCarousel;
use hero_carousel::{CarouselConfig, RevealConfig, Slide};
use leptos::prelude::*;

use super::PageSection;
use crate::content::Hero;

#[component]
pub fn Welcome(
    hero: Hero,
    slides: Vec<Slide>,
    carousel: CarouselConfig,
    reveal: RevealConfig,
    github_url: String,
) -> impl IntoView {
    view! {
        <PageSection id="welcome" reveal=reveal center=true>
            <div class="welcome-header">
                <h1 class="welcome-title">
                    {hero.heading}
                    " "
                    <span class="text-primary">{hero.highlight}</span>
                </h1>
                <p class="welcome-tagline">{hero.tagline}</p>
            </div>

            <HeroCarousel slides=slides config=carousel label="Highlights" />

            <div class="welcome-actions">
                <a href="#services" class="btn btn-primary">"Explore Services"</a>
                <a href=github_url target="_blank" rel="noopener noreferrer" class="btn btn-bordered">
                    "View GitHub"
                </a>
            </div>
        </PageSection>
    }
}
