// Core application modules and components
use crate::components::{error_template, navbar};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{footer, p},
    prelude::*,
};
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
pub mod dom;
mod landing;
pub mod nav;

pub use nav::NavConfig;

const PAGE_TITLE: &str = "DPM Properties \u{2013} Real Estate Solutions";
const PAGE_DESCRIPTION: &str =
    "DPM Properties helps you buy, sell and rent homes with local real estate expertise.";

#[must_use]
pub fn component() -> impl IntoView {
    // Provides context that manages titles and meta tags.
    provide_meta_context();

    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>
        <Router>
            <div class="overflow-x-hidden text-gray-900 bg-white font-poppins">
                {navbar::component()}
                <main>
                    <FlatRoutes fallback=error_template::not_found>
                        <Route path=StaticSegment("") view=landing::component/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

/// Root view with navbar thresholds overridden for the whole tree.
pub fn component_with_config(config: NavConfig) -> impl IntoView {
    provide_context(config);
    component()
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-6 text-center text-gray-500 bg-gray-100")
        .child(p().child(format!(
            "\u{a9} {} DPM Properties. All rights reserved.",
            Utc::now().year()
        )))
}

/// Root owner for rendering tests, marked as a server render so browser-only
/// listeners stay unregistered.
#[cfg(all(test, feature = "ssr"))]
fn ssr_test_owner() -> Owner {
    use std::sync::Arc;

    let owner = Owner::new_root(Some(Arc::new(hydration_context::SsrSharedContext::new())));
    owner.set();
    owner
}
