//! This module serves as a container for the reusable UI components of the landing page.
//!
//! Each sub-module defines a specific UI element: the navigation bar, icon
//! rendering, and the error page.

pub mod error_template;
pub mod icons;
pub mod navbar;
