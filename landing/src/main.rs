// NovaGrid Landing Page - Leptos 0.8 Edition
// Developed with 💀 by the NovaGrid web team (c)2026

mod content;
mod logging;
mod sections;

use content::SiteContent;
use hero_carousel::styles::CAROUSEL_CSS;
use leptos::prelude::*;
use sections::*;
use tracing::{Level, error, info};

fn main() {
    console_error_panic_hook::set_once();

    let site = SiteContent::load().and_then(|site| Ok((site.max_level()?, site)));
    match site {
        Ok((level, site)) => {
            logging::init(level);
            info!(
                company = %site.company_name,
                slides = site.slides.len(),
                services = site.services.len(),
                "mounting landing page"
            );
            leptos::mount::mount_to_body(move || view! { <App site=site /> });
        }
        Err(err) => {
            logging::init(Level::INFO);
            error!(%err, "landing content failed to load");
            let message = err.to_string();
            leptos::mount::mount_to_body(move || view! { <ContentErrorNotice message=message /> });
        }
    }
}

#[component]
fn App(site: SiteContent) -> impl IntoView {
    let github = site.links.github.clone();

    view! {
        <style>{CAROUSEL_CSS}</style>
        <DefaultLayout
            company_name=site.company_name.clone()
            logo_url=site.company_logo_url.clone()
            nav_items=site.nav_items.clone()
        >
            <div class="snap-container">
                <Welcome
                    hero=site.hero
                    slides=site.slides
                    carousel=site.carousel
                    reveal=site.reveal
                    github_url=github.clone()
                />
                <Services title="Our Services".to_string() services=site.services reveal=site.reveal />
                <AboutSection about=site.about reveal=site.reveal github_url=github />
            </div>
        </DefaultLayout>
    }
}

#[component]
fn ContentErrorNotice(message: String) -> impl IntoView {
    view! {
        <main class="content-error" role="alert">
            <h1>"This page could not be loaded"</h1>
            <p>{message}</p>
        </main>
    }
}
