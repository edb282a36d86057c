//! Edition page sections
//!
//! Each section reveals once when it scrolls into view; its heading block
//! enters first and its cards follow in stagger order. The header and hero
//! are in view on load and reveal on mount instead.

mod about;
mod agenda;
mod committee;
mod contact;
mod footer;
mod header;
mod hero;
mod tracks;

use leptos::prelude::*;

use crate::core::{SectionBody, SectionHeading, SectionMotion, SectionNode};
use crate::ui::reveal::{RevealScope, use_reveal};

pub use about::AboutSection;
pub use agenda::AgendaSection;
pub use committee::CommitteeSection;
pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::HeroSection;
pub use tracks::TracksSection;

/// One revealable section, dispatched on its body
#[component]
pub fn PageSection(node: SectionNode<'static>) -> impl IntoView {
    let scope = use_reveal(
        node.id(),
        SectionMotion::cards(),
        node.child_count(),
        node.max_items_per_child(),
    );
    let heading = node.heading;

    match node.body {
        SectionBody::About { features } => {
            view! { <AboutSection heading scope features /> }.into_any()
        }
        SectionBody::Tracks { tracks } => {
            view! { <TracksSection heading scope tracks /> }.into_any()
        }
        SectionBody::Agenda {
            days,
            schedule_link,
        } => view! { <AgendaSection heading scope days schedule_link /> }.into_any(),
        SectionBody::Committee {
            groups,
            roster_link,
        } => view! { <CommitteeSection heading scope groups roster_link /> }.into_any(),
        SectionBody::Contact {
            card_heading,
            entries,
            socials,
            form,
        } => view! {
            <ContactSection heading scope card_heading entries socials form />
        }
        .into_any(),
    }
}

/// Centered heading, accent bar, and lead paragraph
#[component]
fn SectionTitle(heading: &'static SectionHeading, scope: RevealScope) -> impl IntoView {
    view! {
        <div class="text-center mb-16" data-reveal="" style=scope.heading()>
            <h2 class="text-3xl md:text-4xl font-bold text-gray-800 mb-4">
                {heading.heading.as_str()}
            </h2>
            <div class="w-24 h-1 bg-blue-600 mx-auto mb-6"></div>
            <p class="max-w-3xl mx-auto text-gray-600 text-lg">{heading.lead.as_str()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EditionCatalog, PageTree};
    use crate::ui::reveal::provide_motion_preference;

    #[test]
    fn test_server_markup_is_visible_before_hydration() {
        let edition = EditionCatalog::embedded()
            .expect("embedded content should load")
            .require("2025")
            .expect("2025 edition exists");

        for node in PageTree::build(edition).sections {
            let id = node.id();
            let html = Owner::new().with(|| {
                provide_motion_preference();
                view! { <PageSection node /> }.to_html()
            });

            assert!(html.contains("data-reveal"), "#{id} has no reveal targets");
            assert!(!html.contains("opacity: 0"), "#{id} rendered hidden: {html}");
            assert!(!html.contains("translate3d"), "#{id} rendered offset");
        }
    }
}
