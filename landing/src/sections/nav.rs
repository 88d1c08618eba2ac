use leptos::prelude::*;

use crate::content::NavItem;

#[component]
pub fn Nav(
    company_name: String,
    logo_url: Option<String>,
    items: Vec<NavItem>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    let brand_label = format!("{company_name} home");
    let logo = match logo_url {
        Some(src) => view! { <img class="nav-logo" src=src alt="" /> }.into_any(),
        None => view! { <span class="nav-logo nav-logo-mark" aria-hidden="true">"◆"</span> }.into_any(),
    };

    let links = items
        .into_iter()
        .map(|item| {
            view! {
                <li>
                    <a href=item.href class="nav-link" on:click=close_menu>
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="nav" aria-label="Main">
            <div class="nav-inner">
                <a href="#welcome" class="nav-brand" aria-label=brand_label on:click=close_menu>
                    {logo}
                    <span class="nav-title">{company_name}</span>
                </a>
                <button
                    type="button"
                    class="nav-toggle"
                    aria-controls="nav-menu"
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span aria-hidden="true">{move || if menu_open.get() { "✕" } else { "☰" }}</span>
                </button>
                <ul
                    id="nav-menu"
                    class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }
                >
                    {links}
                </ul>
            </div>
        </nav>
    }
}
