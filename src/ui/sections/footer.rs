use leptos::prelude::*;

use crate::core::{Brand, FOOTER_ID, FooterNode, SectionMotion};
use crate::ui::icon::SocialIcon;
use crate::ui::reveal::use_reveal;

/// Page footer: blurb, quick links mirroring the nav, resources
#[component]
pub fn SiteFooter(brand: &'static Brand, footer: FooterNode<'static>) -> impl IntoView {
    let links = footer.quick_links.len().max(footer.resources.len());
    let scope = use_reveal(FOOTER_ID, SectionMotion::footer(), 3, links);

    view! {
        <footer id=FOOTER_ID class="bg-gray-900 text-white pt-16 pb-8">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-3 gap-12 mb-12">
                    <div data-reveal="" style=scope.child(0)>
                        <h3 class="text-2xl font-bold mb-4">
                            <span class="text-blue-400">{brand.short_name.as_str()}</span>
                            {brand.suffix.as_str()}
                        </h3>
                        <p class="text-gray-400 mb-4">{footer.blurb}</p>
                        <p class="text-gray-400">{footer.dates_line}</p>
                    </div>

                    <div data-reveal="" style=scope.child(1)>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {footer
                                .quick_links
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    view! {
                                        <li data-reveal="" style=scope.item(1, index)>
                                            <a href=item.href() class="text-gray-400 hover:text-white transition-colors">
                                                {item.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div data-reveal="" style=scope.child(2)>
                        <h4 class="text-lg font-semibold mb-4">"Resources"</h4>
                        <ul class="space-y-2">
                            {footer
                                .resources
                                .iter()
                                .enumerate()
                                .map(|(index, link)| {
                                    view! {
                                        <li data-reveal="" style=scope.item(2, index)>
                                            <a href=link.href.as_str() class="text-gray-400 hover:text-white transition-colors">
                                                {link.label.as_str()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div
                    class="border-t border-gray-800 pt-8 flex flex-col md:flex-row justify-between items-center gap-4"
                    data-reveal=""
                    style=scope.heading()
                >
                    <p class="text-gray-400 text-sm">{footer.copyright}</p>
                    <div class="flex space-x-4">
                        {footer
                            .socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href.as_str()
                                        class="text-gray-400 hover:text-white transition-colors"
                                        aria-label=social.network.label()
                                    >
                                        <SocialIcon network=social.network class="w-5 h-5" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
