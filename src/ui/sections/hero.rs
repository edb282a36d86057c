use leptos::prelude::*;

use crate::core::{Brand, HERO_ID, Hero, SectionMotion};
use crate::ui::icon::{Icon, SocialIcon, icons};
use crate::ui::reveal::use_mount_reveal;

/// Number of staggered hero blocks: badge, title, subtitle, actions, mascot
const HERO_BLOCKS: usize = 5;

/// Hero banner: copy cascades in on load, social icons pop in last
#[component]
pub fn HeroSection(brand: &'static Brand, hero: &'static Hero) -> impl IntoView {
    let scope = use_mount_reveal(SectionMotion::hero(), HERO_BLOCKS, hero.socials.len());

    view! {
        <section id=HERO_ID class="relative pt-28 pb-20 bg-gradient-to-br from-blue-50 to-indigo-50 overflow-hidden">
            // Background decoration
            <div class="absolute inset-0 -z-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="conf-blob absolute top-20 left-10 w-72 h-72 bg-blue-200/40 rounded-full blur-3xl"></div>
                <div class="conf-blob conf-blob-delay absolute bottom-10 right-10 w-72 h-72 bg-indigo-200/40 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 relative">
                <div class="flex flex-col md:flex-row items-center gap-12">
                    <div class="md:w-1/2" data-reveal="" style=scope.heading()>
                        <span
                            class="inline-block px-4 py-1 mb-4 text-sm font-semibold text-blue-700 bg-blue-100 rounded-full"
                            data-reveal=""
                            style=scope.child(0)
                        >
                            {hero.badge.as_str()}
                        </span>
                        <h1
                            class="text-5xl md:text-6xl font-bold text-gray-800 mb-4"
                            data-reveal=""
                            style=scope.child(1)
                        >
                            <span class="text-blue-600">{brand.short_name.as_str()}</span>
                            {brand.suffix.as_str()}
                        </h1>
                        <p class="text-lg text-gray-600 mb-8" data-reveal="" style=scope.child(2)>
                            {hero.subtitle.as_str()}
                        </p>

                        <div class="flex flex-wrap gap-4 mb-8" data-reveal="" style=scope.child(3)>
                            {hero
                                .actions
                                .iter()
                                .map(|action| {
                                    let class = if action.primary {
                                        "conf-btn-primary"
                                    } else {
                                        "conf-btn-secondary"
                                    };
                                    view! {
                                        <a href=action.href.as_str() class=class>
                                            <Icon name=icons::action_icon(action.icon) class="w-5 h-5" />
                                            {action.label.as_str()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex space-x-4">
                            {hero
                                .socials
                                .iter()
                                .enumerate()
                                .map(|(index, social)| {
                                    view! {
                                        <a
                                            href=social.href.as_str()
                                            class="text-gray-500 hover:text-blue-600 transition-colors"
                                            aria-label=social.network.label()
                                            data-reveal=""
                                            style=scope.item(0, index)
                                        >
                                            <SocialIcon network=social.network />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {hero
                        .mascot
                        .as_ref()
                        .map(|mascot| {
                            view! {
                                <div class="md:w-1/2 flex justify-center" data-reveal="" style=scope.child(4)>
                                    <img
                                        src=mascot.src.as_str()
                                        alt=mascot.alt.as_str()
                                        class="conf-float w-full max-w-md drop-shadow-2xl"
                                    />
                                </div>
                            }
                        })}
                </div>
            </div>
        </section>
    }
}
