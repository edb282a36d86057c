use leptos::prelude::*;

use crate::core::{Brand, NavItem, SectionMotion};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_mount_reveal;

/// Sticky header: slides down on load, nav links follow in order
#[component]
pub fn SiteHeader(brand: &'static Brand, nav: Vec<NavItem<'static>>) -> impl IntoView {
    let scope = use_mount_reveal(SectionMotion::header(), nav.len(), 1);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let mobile_nav = nav.clone();

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 bg-white/90 backdrop-blur-md shadow-sm"
            data-reveal=""
            style=scope.heading()
        >
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="#" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <img src=brand.logo.as_str() alt=brand.logo_alt.as_str() class="h-10 w-auto" />
                        <span class="text-xl font-bold text-blue-600">
                            {brand.short_name.as_str()}
                            <span class="text-gray-800">{brand.suffix.as_str()}</span>
                        </span>
                    </a>

                    // Desktop Navigation
                    <nav class="hidden md:flex items-center space-x-8">
                        {nav
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="text-gray-700 hover:text-blue-600 font-medium transition-colors"
                                        data-reveal=""
                                        style=scope.child(index)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center gap-2">
                        <a
                            href=brand.register.href.as_str()
                            class="hidden md:inline-flex conf-btn-primary"
                            data-reveal=""
                            style=scope.item(0, 0)
                        >
                            {brand.register.label.as_str()}
                        </a>

                        // Mobile menu button
                        <button
                            class="md:hidden p-2 rounded-lg hover:bg-gray-100 transition-colors"
                            on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || mobile_menu_open.get().to_string()
                        >
                            {move || {
                                if mobile_menu_open.get() {
                                    view! { <Icon name=icons::X class="w-6 h-6 text-gray-700" /> }
                                        .into_any()
                                } else {
                                    view! { <Icon name=icons::MENU class="w-6 h-6 text-gray-700" /> }
                                        .into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-gray-200">
                        {mobile_nav
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="block px-4 py-2 text-gray-700 hover:text-blue-600 hover:bg-gray-50 rounded-lg transition-colors"
                                        on:click=move |_| set_mobile_menu_open.set(false)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=brand.register.href.as_str()
                            class="conf-btn-primary justify-center mx-4"
                            on:click=move |_| set_mobile_menu_open.set(false)
                        >
                            {brand.register.label.as_str()}
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}
