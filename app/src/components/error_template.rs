//! This module defines the `error_template` component, which renders the page shown
//! when a route cannot be resolved.
//!
//! It includes an `AppError` enum for application-level errors and a component
//! that lists them with their HTTP status and a link back to the landing page.

use http::status::StatusCode;
use leptos::{
    html::{div, h1},
    prelude::*,
    svg::{path, svg},
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders an error page for every `AppError` found in `errors`.
///
/// Errors of other types are skipped; when none remain the heading still
/// renders so the page is never blank.
pub fn component(errors: Errors) -> impl IntoView {
    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect();

    div()
        .class("grid place-content-center px-4 pt-32 h-full antialiased text-gray-800")
        .child((
            h1().class("mb-6 text-center").child(if errors.len() > 1 { "Errors" } else { "Error" }),
            For(
                ForProps::builder()
                    .each(move || errors.clone().into_iter().enumerate())
                    .key(|(index, _error)| *index)
                    .children(|(_index, error)| {
                        div().class("flex flex-col gap-1 justify-center items-center").child((
                            h1().class("text-xl tracking-widest text-gray-500 uppercase").child(
                                format!("{}| {error}", error.status_code()),
                            ),
                            div()
                                .class("flex gap-1 justify-center items-center mt-6 text-center duration-200 hover:text-cherry-500")
                                .child(A(AProps::builder()
                                    .href("/")
                                    .children(ToChildren::to_children(move || {
                                        vec![
                                            svg()
                                                .attr("width", "1.1em")
                                                .attr("height", "1.1em")
                                                .attr("viewBox", "0 0 24 24")
                                                .attr("fill", "currentColor")
                                                .attr("role", "graphics-symbol")
                                                .child(path().attr(
                                                    "d",
                                                    "M21 11H6.414l5.293-5.293-1.414-1.414L2.586 12l7.707 7.707 1.414-1.414L6.414 13H21z",
                                                ))
                                                .into_any(),
                                            "Back to DPM Properties".into_any(),
                                        ]
                                    }))
                                    .build())),
                        ))
                    })
                    .build(),
            ),
        ))
}

/// Fallback view for unmatched routes.
pub fn not_found() -> impl IntoView {
    let mut errors = Errors::default();
    errors.insert_with_default_key(AppError::NotFound);
    component(errors)
}
