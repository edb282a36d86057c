use leptos::prelude::*;

use super::SectionTitle;
use crate::core::{Feature, Revealable, SectionHeading};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealScope;

/// About section with feature cards
#[component]
pub fn AboutSection(
    heading: &'static SectionHeading,
    scope: RevealScope,
    features: Vec<Revealable<&'static Feature>>,
) -> impl IntoView {
    view! {
        <section id=heading.id.as_str() class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <SectionTitle heading scope />

                <div class="grid md:grid-cols-3 gap-8">
                    {features
                        .into_iter()
                        .map(|Revealable { index, item }| {
                            view! {
                                <div
                                    class="bg-gray-50 p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow"
                                    data-reveal=""
                                    style=scope.child(index)
                                >
                                    <div class="w-14 h-14 bg-blue-100 rounded-full flex items-center justify-center mb-4">
                                        <Icon
                                            name=icons::feature_icon(item.icon)
                                            class="w-8 h-8 text-blue-600"
                                        />
                                    </div>
                                    <h3 class="text-xl font-semibold text-gray-800 mb-3">
                                        {item.title.as_str()}
                                    </h3>
                                    <p class="text-gray-600">{item.text.as_str()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
