use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;

use super::SectionTitle;
use crate::core::{
    ContactBody, ContactCard, ContactForm, MESSAGE_FIELD_ID, Revealable, SectionHeading, SocialLink,
};
use crate::ui::icon::{Icon, SocialIcon, icons};
use crate::ui::reveal::RevealScope;

/// Contact details beside an inert message form
#[component]
pub fn ContactSection(
    heading: &'static SectionHeading,
    scope: RevealScope,
    card_heading: &'static str,
    entries: Vec<Revealable<ContactCard<'static>>>,
    socials: &'static [SocialLink],
    form: &'static ContactForm,
) -> impl IntoView {
    view! {
        <section id=heading.id.as_str() class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <SectionTitle heading scope />

                <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <div data-reveal="" style=scope.heading()>
                        <h3 class="text-2xl font-bold text-gray-800 mb-6">{card_heading}</h3>
                        <div class="space-y-6">
                            {entries
                                .into_iter()
                                .map(|Revealable { index, item }| {
                                    view! { <ContactEntryView index item scope /> }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex space-x-4 mt-8">
                            {socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href.as_str()
                                            class="w-10 h-10 bg-blue-100 rounded-full flex items-center justify-center text-blue-600 hover:bg-blue-600 hover:text-white transition-colors"
                                            aria-label=social.network.label()
                                        >
                                            <SocialIcon network=social.network class="w-5 h-5" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <ContactFormView form scope />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactEntryView(index: usize, item: ContactCard<'static>, scope: RevealScope) -> impl IntoView {
    view! {
        <div class="flex items-start" data-reveal="" style=scope.child(index)>
            <div class="w-12 h-12 bg-blue-100 rounded-full flex items-center justify-center shrink-0">
                <Icon name=icons::contact_icon(item.title) class="w-6 h-6 text-blue-600" />
            </div>
            <div class="ml-4">
                <h4 class="text-lg font-semibold text-gray-800">{item.title}</h4>
                {item.subtitle.map(|subtitle| view! { <p class="text-gray-600">{subtitle}</p> })}
                {match item.body {
                    ContactBody::Link { href, text } => {
                        view! {
                            <a href=href class="text-blue-600 hover:underline">
                                {text}
                            </a>
                        }
                            .into_any()
                    }
                    ContactBody::Address(lines) => {
                        view! {
                            <address class="text-gray-600 not-italic">
                                {lines
                                    .iter()
                                    .map(|line| view! { <span class="block">{line.as_str()}</span> })
                                    .collect_view()}
                            </address>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Message form with no submission target; submit is swallowed
#[component]
fn ContactFormView(form: &'static ContactForm, scope: RevealScope) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log!("contact form submitted; no backend is configured");
    };

    view! {
        <div class="bg-gray-50 p-8 rounded-xl shadow-md" data-reveal="" style=scope.heading()>
            <h3 class="text-2xl font-bold text-gray-800 mb-6">{form.heading.as_str()}</h3>
            <form class="space-y-6" on:submit=on_submit>
                <div class="grid sm:grid-cols-2 gap-6">
                    {form
                        .fields
                        .iter()
                        .map(|field| {
                            view! {
                                <div>
                                    <label for=field.id.as_str() class="block text-gray-700 mb-2">
                                        {field.label.as_str()}
                                    </label>
                                    <input
                                        type=field.input_type.as_str()
                                        id=field.id.as_str()
                                        name=field.id.as_str()
                                        placeholder=field.placeholder.as_str()
                                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div>
                    <label for=MESSAGE_FIELD_ID class="block text-gray-700 mb-2">
                        {form.message_label.as_str()}
                    </label>
                    <textarea
                        id=MESSAGE_FIELD_ID
                        name=MESSAGE_FIELD_ID
                        rows="4"
                        placeholder=form.message_placeholder.as_str()
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    ></textarea>
                </div>
                <button type="submit" class="conf-btn-primary w-full justify-center">
                    {form.submit_label.as_str()}
                </button>
            </form>
        </div>
    }
}
