use leptos::prelude::*;

use super::SectionTitle;
use crate::core::{Accent, Revealable, SectionHeading, TrackCard};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealScope;

/// Conference tracks; each card's topics slide in after the card
#[component]
pub fn TracksSection(
    heading: &'static SectionHeading,
    scope: RevealScope,
    tracks: Vec<Revealable<TrackCard<'static>>>,
) -> impl IntoView {
    view! {
        <section id=heading.id.as_str() class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <SectionTitle heading scope />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {tracks
                        .into_iter()
                        .map(|Revealable { index, item }| view! { <TrackCardView index item scope /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TrackCardView(index: usize, item: TrackCard<'static>, scope: RevealScope) -> impl IntoView {
    let accent = item.accent;

    view! {
        <div
            class=format!(
                "bg-white rounded-xl shadow-md overflow-hidden hover:shadow-lg transition-shadow border-t-4 {}",
                accent.border_class(),
            )
            data-reveal=""
            style=scope.child(index)
        >
            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-800 mb-4">{item.title}</h3>
                <ul class="space-y-2 text-gray-600">
                    {item
                        .items
                        .iter()
                        .enumerate()
                        .map(|(i, topic)| {
                            view! {
                                <li
                                    class="flex items-start"
                                    data-reveal=""
                                    style=scope.item(index, i)
                                >
                                    <Icon
                                        name=icons::CHECK_CIRCLE
                                        class=accent_icon_class(accent)
                                    />
                                    <span>{topic.as_str()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// Check icon tinted to match the card's top border
fn accent_icon_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "w-5 h-5 text-blue-600 mr-2 mt-0.5 shrink-0",
        Accent::Indigo => "w-5 h-5 text-indigo-600 mr-2 mt-0.5 shrink-0",
        Accent::Purple => "w-5 h-5 text-purple-600 mr-2 mt-0.5 shrink-0",
        Accent::Green => "w-5 h-5 text-green-600 mr-2 mt-0.5 shrink-0",
        Accent::Red => "w-5 h-5 text-red-600 mr-2 mt-0.5 shrink-0",
        Accent::Amber => "w-5 h-5 text-amber-600 mr-2 mt-0.5 shrink-0",
    }
}
