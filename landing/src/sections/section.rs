use hero_carousel::RevealConfig;
use hero_carousel::components::Reveal;
use leptos::prelude::*;

/// Full-height snap section with an anchor offset for the sticky navbar.
/// Content fades in once through [`Reveal`].
#[component]
pub fn PageSection(
    id: &'static str,
    reveal: RevealConfig,
    /// Vertically center the content (welcome section).
    #[prop(optional)]
    center: bool,
    children: Children,
) -> impl IntoView {
    let class = if center {
        "page-section page-section-center"
    } else {
        "page-section"
    };

    view! {
        <section id=id class=class>
            <div class="container">
                <Reveal config=reveal>{children()}</Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn SectionTitle(text: String) -> impl IntoView {
    view! { <h2 class="section-title">{text}</h2> }
}
