//! Browser access for the navbar.
//!
//! All reads and writes against `window`/`document` go through the
//! [`Viewport`] trait so the scroll and lock logic can run against a mock.

use thiserror::Error;
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};
use web_sys::{AddEventListenerOptions, ScrollBehavior, ScrollToOptions};

use crate::nav::NavConfig;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("{operation} failed: {message}")]
    Js {
        operation: &'static str,
        message: String,
    },
}

impl DomError {
    fn js(operation: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |value| Self::Js {
            operation,
            message: format!("{value:?}"),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> Result<f64, DomError>;

    fn inner_width(&self) -> Result<f64, DomError>;

    /// Viewport-relative top of the element with `id`, if it exists.
    fn element_top(&self, id: &str) -> Result<Option<f64>, DomError>;

    fn smooth_scroll_to(&self, top: f64) -> Result<(), DomError>;

    /// Suppresses (or restores) document scrolling via the body's `overflow`.
    fn set_scroll_locked(&self, locked: bool) -> Result<(), DomError>;
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn scroll_y(&self) -> Result<f64, DomError> {
        (**self).scroll_y()
    }

    fn inner_width(&self) -> Result<f64, DomError> {
        (**self).inner_width()
    }

    fn element_top(&self, id: &str) -> Result<Option<f64>, DomError> {
        (**self).element_top(id)
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<(), DomError> {
        (**self).smooth_scroll_to(top)
    }

    fn set_scroll_locked(&self, locked: bool) -> Result<(), DomError> {
        (**self).set_scroll_locked(locked)
    }
}

/// The real browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl BrowserViewport {
    fn window() -> Result<web_sys::Window, DomError> {
        web_sys::window().ok_or(DomError::NoWindow)
    }

    fn document() -> Result<web_sys::Document, DomError> {
        Self::window()?.document().ok_or(DomError::NoDocument)
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> Result<f64, DomError> {
        Self::window()?.scroll_y().map_err(DomError::js("scrollY"))
    }

    fn inner_width(&self) -> Result<f64, DomError> {
        let width = Self::window()?
            .inner_width()
            .map_err(DomError::js("innerWidth"))?;
        width.as_f64().ok_or_else(|| DomError::Js {
            operation: "innerWidth",
            message: format!("not a number: {width:?}"),
        })
    }

    fn element_top(&self, id: &str) -> Result<Option<f64>, DomError> {
        Ok(Self::document()?
            .get_element_by_id(id)
            .map(|element| element.get_bounding_client_rect().top()))
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<(), DomError> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        Self::window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    fn set_scroll_locked(&self, locked: bool) -> Result<(), DomError> {
        let body = Self::document()?.body().ok_or(DomError::NoBody)?;
        let style = body.style();
        if locked {
            style
                .set_property("overflow", "hidden")
                .map_err(DomError::js("body.style.overflow"))
        } else {
            style
                .remove_property("overflow")
                .map(drop)
                .map_err(DomError::js("body.style.overflow"))
        }
    }
}

/// Smoothly scrolls so the element `id` sits just below the fixed header.
///
/// Returns the scroll position used, or `None` when there was nothing to do:
/// an empty id or an element missing from the page.
pub fn scroll_to_anchor<V>(viewport: &V, id: &str, config: &NavConfig) -> Result<Option<f64>, DomError>
where
    V: Viewport + ?Sized,
{
    if id.is_empty() {
        return Ok(None);
    }
    let Some(element_top) = viewport.element_top(id)? else {
        log::debug!("scroll target #{id} not found");
        return Ok(None);
    };
    let target = config.scroll_target(element_top, viewport.scroll_y()?);
    viewport.smooth_scroll_to(target)?;
    log::debug!("scrolling to #{id} at {target}px");
    Ok(Some(target))
}

/// Keeps document scrolling disabled for as long as it is alive.
pub struct ScrollLock<V: Viewport> {
    viewport: V,
}

impl<V: Viewport> ScrollLock<V> {
    pub fn acquire(viewport: V) -> Result<Self, DomError> {
        viewport.set_scroll_locked(true)?;
        Ok(Self { viewport })
    }
}

impl<V: Viewport> Drop for ScrollLock<V> {
    fn drop(&mut self) {
        if let Err(err) = self.viewport.set_scroll_locked(false) {
            log::warn!("failed to restore page scrolling: {err}");
        }
    }
}

/// Brings the scroll lock in line with the menu.
///
/// An open menu keeps `previous` or acquires a fresh lock; a closed menu drops
/// `previous`, which restores scrolling. A failed acquire is logged and leaves
/// the page scrollable.
pub fn sync_scroll_lock<V: Viewport>(
    menu_open: bool,
    previous: Option<ScrollLock<V>>,
    viewport: V,
) -> Option<ScrollLock<V>> {
    if !menu_open {
        return None;
    }
    previous.or_else(|| {
        ScrollLock::acquire(viewport)
            .inspect_err(|err| log::warn!("locking page scroll failed: {err}"))
            .ok()
    })
}

/// A passive `scroll` listener on the window, removed when dropped.
pub struct PassiveScrollListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl PassiveScrollListener {
    pub fn register(handler: impl FnMut(web_sys::Event) + 'static) -> Result<Self, DomError> {
        let window = BrowserViewport::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(DomError::js("addEventListener(scroll)"))?;
        Ok(Self { window, callback })
    }
}

impl Drop for PassiveScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
            .map_err(DomError::js("removeEventListener(scroll)"))
        {
            log::warn!("{err}");
        }
    }
}
