use leptos::prelude::*;

use super::{Footer, Nav};
use crate::content::NavItem;

/// Skip link, sticky navbar, `<main id="main">` and footer around the page.
#[component]
pub fn DefaultLayout(
    company_name: String,
    logo_url: Option<String>,
    nav_items: Vec<NavItem>,
    children: Children,
) -> impl IntoView {
    view! {
        <a href="#main" class="skip-link">"Skip to content"</a>
        <Nav company_name=company_name.clone() logo_url=logo_url items=nav_items />
        <main id="main" class="page-main">
            {children()}
        </main>
        <Footer company_name=company_name />
    }
}
