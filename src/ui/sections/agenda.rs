use leptos::prelude::*;

use super::SectionTitle;
use crate::core::{DayNode, Link, Revealable, SectionHeading, SessionCard};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealScope;

/// Agenda grouped by day; sessions stagger within each day
#[component]
pub fn AgendaSection(
    heading: &'static SectionHeading,
    scope: RevealScope,
    days: Vec<DayNode<'static>>,
    schedule_link: Option<&'static Link>,
) -> impl IntoView {
    view! {
        <section id=heading.id.as_str() class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <SectionTitle heading scope />

                <div class="max-w-4xl mx-auto space-y-12">
                    {days
                        .into_iter()
                        .map(|day| {
                            view! {
                                <div>
                                    <div class="flex items-center mb-6" data-reveal="" style=scope.heading()>
                                        <div class="w-12 h-12 bg-blue-600 text-white rounded-full flex items-center justify-center font-bold text-lg">
                                            {day.marker}
                                        </div>
                                        <h3 class="ml-4 text-2xl font-bold text-gray-800">{day.title}</h3>
                                    </div>
                                    <div class="ml-6 pl-10 border-l-2 border-blue-200 space-y-8">
                                        {day
                                            .sessions
                                            .into_iter()
                                            .map(|Revealable { index, item }| {
                                                view! { <SessionView index item scope /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                {schedule_link
                    .map(|link| {
                        view! {
                            <div class="text-center mt-12" data-reveal="" style=scope.heading()>
                                <a href=link.href.as_str() class="conf-btn-primary">
                                    {link.label.as_str()}
                                    <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5" />
                                </a>
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
fn SessionView(index: usize, item: SessionCard<'static>, scope: RevealScope) -> impl IntoView {
    view! {
        <div class="relative" data-reveal="" style=scope.child(index)>
            <div class=format!(
                "absolute -left-12 mt-1.5 w-4 h-4 rounded-full border-4 border-white {}",
                item.accent.bar_class(),
            )></div>
            <div class="bg-gray-50 p-6 rounded-lg shadow-sm">
                <span class=format!("text-sm font-semibold {}", item.accent.text_class())>
                    {item.time}
                </span>
                <h4 class="text-xl font-semibold text-gray-800 mt-1">{item.title}</h4>
                <p class="text-gray-600 mt-2">{item.description}</p>
                {item
                    .speaker
                    .map(|speaker| {
                        view! {
                            <div class="mt-4 flex items-center">
                                <div class="w-10 h-10 bg-gray-300 rounded-full flex items-center justify-center">
                                    <Icon name=icons::USERS class="w-5 h-5 text-gray-600" />
                                </div>
                                <div class="ml-3">
                                    <p class="font-medium text-gray-800">{speaker.name.as_str()}</p>
                                    <p class="text-sm text-gray-500">{speaker.role.as_str()}</p>
                                </div>
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
