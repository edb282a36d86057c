//! Edition page
//!
//! One template for every conference edition. The `:edition` route param
//! selects the content; everything below the page is driven by the
//! [`PageTree`] built from it.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::hooks::use_params_map;

use super::NotFoundPage;
use crate::core::{Edition, EditionCatalog, PageMeta, PageTree};
use crate::ui::reveal::provide_motion_preference;
use crate::ui::sections::{HeroSection, PageSection, SiteFooter, SiteHeader};
use crate::ui::styles::ConferenceStyles;

/// Route component for `/:edition`
#[component]
pub fn EditionPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("edition").unwrap_or_default();

    // Re-rendered per slug so a route change tears down the old edition's
    // observers and timers
    move || {
        let slug = slug();
        let catalog = match EditionCatalog::embedded() {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!("edition content failed to load: {err}");
                return view! { <ContentUnavailable reason=err.to_string() /> }.into_any();
            }
        };

        match catalog.require(&slug) {
            Ok(edition) => view! { <EditionView edition /> }.into_any(),
            Err(err) => {
                warn!("{err}");
                view! { <NotFoundPage /> }.into_any()
            }
        }
    }
}

#[component]
fn EditionView(edition: &'static Edition) -> impl IntoView {
    provide_motion_preference();

    let PageTree {
        nav,
        hero,
        sections,
        footer,
    } = PageTree::build(edition);
    let brand = &edition.brand;

    view! {
        <SeoMeta meta=&edition.meta />
        <ConferenceStyles />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <SiteHeader brand nav />
            <main>
                <HeroSection brand hero />
                {sections.into_iter().map(|node| view! { <PageSection node /> }).collect_view()}
            </main>
            <SiteFooter brand footer />
        </div>
    }
}

/// SEO meta tags for one edition
#[component]
fn SeoMeta(meta: &'static PageMeta) -> impl IntoView {
    view! {
        <Title text=meta.title.as_str() />
        <Meta name="description" content=meta.description.as_str() />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=meta.title.as_str() />
        <Meta property="og:description" content=meta.description.as_str() />

        {meta
            .canonical_url
            .as_deref()
            .map(|url| {
                view! {
                    <Meta property="og:url" content=url />
                    <Link rel="canonical" href=url />
                }
            })}
    }
}

/// Shown when the embedded content cannot be parsed
#[component]
fn ContentUnavailable(reason: String) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4">
            <div class="text-center max-w-md">
                <h1 class="text-3xl font-bold text-gray-800 mb-4">"Content unavailable"</h1>
                <p class="text-gray-600 mb-2">
                    "The conference details could not be loaded. Please try again later."
                </p>
                <p class="text-sm text-gray-400 font-mono">{reason}</p>
            </div>
        </div>
    }
}
