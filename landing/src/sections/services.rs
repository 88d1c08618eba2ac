use hero_carousel::RevealConfig;
use leptos::prelude::*;

use super::{PageSection, SectionTitle};
use crate::content::{ServiceAction, ServiceCard};

#[component]
pub fn Services(title: String, services: Vec<ServiceCard>, reveal: RevealConfig) -> impl IntoView {
    view! {
        <PageSection id="services" reveal=reveal>
            <div class="services-header">
                <SectionTitle text=title />
                <a href="#about" class="text-link text-primary">"Learn about us →"</a>
            </div>
            <ServicesGrid items=services />
        </PageSection>
    }
}

/// 1 / 2 / 3 columns depending on width.
#[component]
pub fn ServicesGrid(items: Vec<ServiceCard>) -> impl IntoView {
    view! {
        <div class="services-grid">
            {items
                .into_iter()
                .map(|card| view! { <ServiceCardView card=card /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ServiceCardView(card: ServiceCard) -> impl IntoView {
    let banner = card.image_url.clone().map(|src| {
        let alt = card.banner_alt().to_string();
        view! {
            <div class="service-banner">
                <img src=src alt=alt loading="lazy" />
            </div>
        }
    });

    let primary = card.primary_action.map(|action| {
        let target = action.target();
        let rel = action.rel();
        view! {
            <a href=action.href target=target rel=rel class="btn btn-primary btn-sm">
                {action.label}
            </a>
        }
    });
    let secondary = card.secondary_action.map(secondary_action);

    view! {
        <article class="service-card">
            {banner}
            <div class="service-body">
                <div class="service-heading">
                    <div class="service-icon" aria-hidden="true">{card.icon}</div>
                    <div>
                        <h3 class="service-title">{card.title}</h3>
                        {card.subtitle.map(|subtitle| view! { <p class="service-subtitle">{subtitle}</p> })}
                    </div>
                </div>
                <p class="service-description">{card.description}</p>
            </div>
            <div class="service-footer">
                {primary}
                {secondary}
            </div>
        </article>
    }
}

fn secondary_action(action: ServiceAction) -> AnyView {
    let target = action.target();
    let rel = action.rel();
    if action.as_button {
        view! {
            <a href=action.href target=target rel=rel class="btn btn-bordered btn-sm">
                {action.label}
            </a>
        }
        .into_any()
    } else {
        view! {
            <a href=action.href target=target rel=rel class="text-link">
                {action.label}
                " →"
            </a>
        }
        .into_any()
    }
}
