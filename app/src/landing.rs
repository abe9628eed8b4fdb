//! This module defines the `landing` component: the sections the navigation bar
//! scrolls between.
//!
//! Each section carries the id of the matching menu entry, so every nav link
//! has a target on the page.

use icondata::{BsEnvelope, BsGeoAlt, BsTelephone};
use leptos::prelude::*;

use crate::components::icons;

/// A featured listing shown in the properties section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub title: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

pub const LISTINGS: [Listing; 3] = [
    Listing {
        title: "Riverside Townhouse",
        location: "Downtown",
        summary: "Three bedrooms, private terrace, walking distance to the waterfront.",
    },
    Listing {
        title: "Garden Family Home",
        location: "Oak Park",
        summary: "Four bedrooms on a quiet street with a large landscaped garden.",
    },
    Listing {
        title: "City Loft",
        location: "Old Town",
        summary: "Open-plan loft with exposed brick and skyline views.",
    },
];

pub fn component() -> impl IntoView {
    let listings = LISTINGS
        .into_iter()
        .map(|listing| {
            view! {
                <article class="flex flex-col gap-2 p-6 bg-white rounded-2xl shadow-md">
                    <h3 class="text-xl font-semibold text-gray-900">{listing.title}</h3>
                    <p class="flex gap-1 items-center text-sm text-cherry-600">
                        {icons::icon(BsGeoAlt, "size-4")}
                        {listing.location}
                    </p>
                    <p class="text-gray-600">{listing.summary}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="flex flex-col justify-center px-4 pt-40 pb-24 mx-auto max-w-5xl min-h-screen">
            <h2 class="mb-6 text-5xl font-extrabold leading-tight text-gray-900 sm:text-6xl">
                "Find the place"
                <br/>
                <span class="text-cherry-600">"you belong"</span>
            </h2>
            <p class="max-w-2xl text-lg text-gray-600">
                "Buying, selling, or renting, we guide you through every step with local expertise."
            </p>
        </section>

        <section id="about" class="py-24 px-4 bg-gray-50">
            <div class="mx-auto max-w-5xl">
                <h2 class="mb-8 text-3xl font-bold text-gray-900">"About us"</h2>
                <p class="text-gray-600">
                    "DPM Properties is an independent brokerage helping families and investors find homes that fit their lives."
                </p>
            </div>
        </section>

        <section id="properties" class="py-24 px-4">
            <div class="mx-auto max-w-5xl">
                <h2 class="mb-8 text-3xl font-bold text-gray-900">"Featured properties"</h2>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-3">{listings}</div>
            </div>
        </section>

        <section id="contact" class="py-24 px-4 bg-gray-50">
            <div class="mx-auto max-w-3xl">
                <h2 class="mb-8 text-3xl font-bold text-gray-900">"Get in touch"</h2>
                <ul class="space-y-4 text-gray-700">
                    <li class="flex gap-3 items-center">
                        {icons::icon(BsTelephone, "size-5 text-cherry-500")}
                        <a href="tel:+15555550100" class="hover:underline">"+1 555 555 0100"</a>
                    </li>
                    <li class="flex gap-3 items-center">
                        {icons::icon(BsEnvelope, "size-5 text-cherry-500")}
                        <a href="mailto:info@dpmproperties.com" class="hover:underline">"info@dpmproperties.com"</a>
                    </li>
                </ul>
            </div>
        </section>
    }
}
