//! This module defines the `navbar` component, the fixed header of the landing page.
//!
//! The header restyles itself once the page is scrolled, shows a link row on
//! desktop and a slide-in panel on mobile, and turns every link into a smooth
//! scroll to the matching section. While the mobile panel is open the page
//! behind it cannot scroll; a click anywhere outside the panel or a resize to
//! desktop width dismisses it.

use icondata::{BsList, BsTelephone, BsX};
use leptos::{ev, html, prelude::*};
use wasm_bindgen::JsCast as _;

use crate::{
    components::icons,
    dom::{
        BrowserViewport, PassiveScrollListener, ScrollLock, Viewport as _, scroll_to_anchor,
        sync_scroll_lock,
    },
    nav::{self, CONTACT_ANCHOR, HOME_ANCHOR, NavConfig, NavState},
};

pub const MENU_ID: &str = "mobile-menu";
pub const TOGGLE_ID: &str = "menu-toggle";
const LOGO_SRC: &str = "/logo.png";

#[must_use]
pub const fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 right-0 left-0 z-50 transition-all duration-300 ease-in-out glass py-2"
    } else {
        "fixed top-0 right-0 left-0 z-50 transition-all duration-300 ease-in-out bg-transparent py-4"
    }
}

#[must_use]
pub const fn brand_class(scrolled: bool) -> &'static str {
    if scrolled {
        "flex items-center space-x-4 transition-all duration-300 scale-90"
    } else {
        "flex items-center space-x-4 transition-all duration-300 scale-100"
    }
}

/// The mobile panel is always rendered and slides in from the right.
#[must_use]
pub const fn panel_class(open: bool) -> &'static str {
    if open {
        "md:hidden fixed inset-0 z-40 pt-20 bg-white/95 backdrop-blur-sm transition-transform duration-300 ease-in-out translate-x-0"
    } else {
        "md:hidden fixed inset-0 z-40 pt-20 bg-white/95 backdrop-blur-sm transition-transform duration-300 ease-in-out translate-x-full"
    }
}

fn apply(state: RwSignal<NavState>, next: Option<NavState>) {
    if let Some(next) = next {
        state.set(next);
    }
}

/// Renders the navigation bar.
///
/// Thresholds come from a `NavConfig` in context when one is provided, and
/// from the defaults otherwise.
pub fn component() -> impl IntoView {
    let config = use_context::<NavConfig>().unwrap_or_default();
    let state = RwSignal::new(NavState::default());
    let menu_open = Memo::new(move |_| state.get().menu_open);
    let scrolled = Memo::new(move |_| state.get().scrolled);

    let menu_ref = NodeRef::<html::Div>::new();
    let toggle_ref = NodeRef::<html::Button>::new();

    // Passive, so scrolling is never held up by the handler. Effects only run
    // in the browser, and the listener is removed when the effect is disposed.
    Effect::new(move |previous: Option<Option<PassiveScrollListener>>| {
        previous.flatten().or_else(|| {
            PassiveScrollListener::register(move |_| match BrowserViewport.scroll_y() {
                Ok(scroll_y) => apply(state, state.get_untracked().on_scroll(scroll_y, &config)),
                Err(err) => log::warn!("reading scroll position failed: {err}"),
            })
            .inspect_err(|err| log::warn!("registering scroll listener failed: {err}"))
            .ok()
        })
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        match BrowserViewport.inner_width() {
            Ok(width) => apply(state, state.get_untracked().on_resize(width, &config)),
            Err(err) => log::warn!("reading viewport width failed: {err}"),
        }
    });

    let pointer_listener = window_event_listener(ev::mousedown, move |event| {
        if !state.get_untracked().menu_open {
            return;
        }
        let inside_menu = nav::pointer_inside_menu(
            event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok()),
            |target| {
                menu_ref
                    .get_untracked()
                    .is_some_and(|panel| panel.contains(Some(target)))
            },
            |target| {
                toggle_ref
                    .get_untracked()
                    .is_some_and(|toggle| toggle.contains(Some(target)))
            },
        );
        apply(state, state.get_untracked().on_pointer_down(inside_menu));
    });

    // The previous lock is handed back on every run; closing the menu drops it.
    Effect::new(move |previous: Option<Option<ScrollLock<BrowserViewport>>>| {
        sync_scroll_lock(menu_open.get(), previous.flatten(), BrowserViewport)
    });

    on_cleanup(move || {
        resize_listener.remove();
        pointer_listener.remove();
        #[cfg(not(feature = "ssr"))]
        {
            if let Err(err) = BrowserViewport.set_scroll_locked(false) {
                log::warn!("failed to restore page scrolling: {err}");
            }
        }
    });

    let navigate = move |event: ev::MouseEvent, id: &'static str| {
        event.prevent_default();
        apply(state, state.get_untracked().on_link_click());
        if let Err(err) = scroll_to_anchor(&BrowserViewport, id, &config) {
            log::warn!("scrolling to #{id} failed: {err}");
        }
    };

    let desktop_links = nav::nav_items()
        .into_iter()
        .map(|item| {
            let id = item.anchor_id();
            view! {
                <a
                    href=item.href
                    on:click=move |event| navigate(event, id)
                    class="flex items-center font-medium text-gray-800 transition-colors duration-200 hover:text-cherry-500 group"
                >
                    <span class="mr-1 opacity-0 transition-opacity duration-200 transform -translate-x-2 group-hover:opacity-100 group-hover:translate-x-0">
                        {icons::icon(item.icon, "size-4")}
                    </span>
                    <span>{item.label}</span>
                </a>
            }
        })
        .collect_view();

    let mobile_links = nav::nav_items()
        .into_iter()
        .map(|item| {
            let id = item.anchor_id();
            view! {
                <a
                    href=item.href
                    on:click=move |event| navigate(event, id)
                    class="flex items-center text-xl text-gray-800 transition-colors duration-200 hover:text-cherry-500"
                >
                    <span class="mr-3 text-cherry-500">{icons::icon(item.icon, "size-4")}</span>
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class=move || header_class(scrolled.get())>
            <div class="container flex justify-between items-center px-4 mx-auto">
                <a
                    href="#home"
                    on:click=move |event| navigate(event, HOME_ANCHOR)
                    class="flex relative z-50 items-center"
                >
                    <div class=move || brand_class(scrolled.get())>
                        <img
                            src=LOGO_SRC
                            alt="DPM Properties Logo"
                            loading="lazy"
                            class="object-contain w-20 h-20"
                        />
                        <div class="flex flex-col items-start">
                            <h1 class="text-3xl font-extrabold leading-tight text-gray-900">
                                <span class="text-cherry-600">"DPM"</span>
                                <span class="ml-2 text-transparent bg-clip-text bg-gradient-to-r from-cherry-600 to-cherry-400">
                                    "Properties"
                                </span>
                            </h1>
                            <p class="text-lg font-medium tracking-wide leading-tight text-gray-600">
                                "Real Estate Solutions"
                            </p>
                        </div>
                    </div>
                </a>

                <div class="hidden space-x-8 md:flex">{desktop_links}</div>

                <a
                    href="#contact"
                    on:click=move |event| navigate(event, CONTACT_ANCHOR)
                    class="hidden items-center py-2 px-6 font-medium text-white rounded-full transition-all duration-300 md:flex hover:shadow-lg hover:scale-105 cherry-gradient"
                >
                    <span class="mr-2">{icons::icon(BsTelephone, "size-4")}</span>
                    "Get in touch"
                </a>

                <button
                    id=TOGGLE_ID
                    node_ref=toggle_ref
                    on:click=move |_| state.update(|current| *current = current.toggled())
                    class="relative z-50 text-gray-800 transition-colors duration-200 md:hidden hover:text-cherry-500"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    <div class="flex relative justify-center items-center w-6 h-6">
                        {move || {
                            if menu_open.get() {
                                icons::icon(BsX, "absolute size-6 animate-scale-up")
                            } else {
                                icons::icon(BsList, "absolute size-6 animate-scale-up")
                            }
                        }}
                    </div>
                </button>
            </div>

            <div id=MENU_ID node_ref=menu_ref class=move || panel_class(menu_open.get())>
                <div class="flex flex-col items-center p-8 space-y-6">
                    {mobile_links}
                    <a
                        href="#contact"
                        on:click=move |event| navigate(event, CONTACT_ANCHOR)
                        class="flex justify-center items-center py-3 px-8 mt-4 w-full font-medium text-center text-white rounded-full cherry-gradient"
                    >
                        <span class="mr-2">{icons::icon(BsTelephone, "size-5")}</span>
                        "Get in touch"
                    </a>
                </div>
            </div>
        </nav>
    }
}
