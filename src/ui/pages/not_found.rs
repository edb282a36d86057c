//! Not found page component
//!
//! Rendered for unknown paths and unknown edition slugs.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::EditionCatalog;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    let editions = EditionCatalog::embedded()
        .map(|catalog| catalog.iter().collect::<Vec<_>>())
        .unwrap_or_default();

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="text-6xl font-bold text-gray-800 mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold text-gray-800 mb-2">"Page Not Found"</h2>

                // Description
                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist. Pick a conference edition below."
                </p>

                // Editions
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    {editions
                        .into_iter()
                        .map(|edition| {
                            view! {
                                <A
                                    href=format!("/{}", edition.slug)
                                    attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors"
                                >
                                    {format!("{}{}", edition.brand.short_name, edition.brand.suffix)}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
