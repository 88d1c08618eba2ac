//! Reveal-on-scroll wrapper

use leptos::html;
use leptos::prelude::*;
use tracing::warn;

use crate::config::RevealConfig;
use crate::reveal::reveal_style;

/// Fades and lifts its children into place the first time enough of the
/// wrapper scrolls into view. Never hides them again while mounted.
///
/// Where `IntersectionObserver` is missing the content is shown immediately.
#[component]
pub fn Reveal(
    #[prop(optional)] config: RevealConfig,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            warn!(%err, "invalid reveal config, using defaults");
            RevealConfig::default()
        }
    };
    let shown = RwSignal::new(false);
    let node = NodeRef::<html::Div>::new();

    #[cfg(target_arch = "wasm32")]
    reveal_when_visible(node, shown, config);

    let class = match class {
        Some(extra) => format!("reveal {extra}"),
        None => "reveal".to_string(),
    };
    let offset = config.offset_px;

    view! {
        <div node_ref=node class=class style=move || reveal_style(shown.get(), offset)>
            {children()}
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn reveal_when_visible(node: NodeRef<html::Div>, shown: RwSignal<bool>, config: RevealConfig) {
    use crate::dom::IntersectionSubscription;
    use crate::reveal::RevealLatch;

    let guard = StoredValue::new_local(None::<IntersectionSubscription>);

    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };
        if shown.get_untracked() || guard.with_value(Option::is_some) {
            return;
        }

        let mut latch = RevealLatch::new(config);
        let observed = IntersectionSubscription::observe(&element, config.threshold, move |sample, observer| {
            if latch.observe(sample) {
                observer.disconnect();
                shown.try_set(true);
            }
        });
        match observed {
            Ok(sub) => guard.set_value(Some(sub)),
            Err(err) => {
                warn!(?err, "IntersectionObserver unavailable, revealing immediately");
                shown.set(true);
            }
        }
    });

    on_cleanup(move || guard.dispose());
}
