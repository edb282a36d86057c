use leptos::prelude::*;

use super::SectionTitle;
use crate::core::{GroupLayout, GroupNode, Link, MemberCard, Revealable, SectionHeading};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealScope;

/// Organizing committee, one block per group
#[component]
pub fn CommitteeSection(
    heading: &'static SectionHeading,
    scope: RevealScope,
    groups: Vec<GroupNode<'static>>,
    roster_link: Option<&'static Link>,
) -> impl IntoView {
    view! {
        <section id=heading.id.as_str() class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <SectionTitle heading scope />

                {groups
                    .into_iter()
                    .map(|group| view! { <GroupView group scope /> })
                    .collect_view()}

                {roster_link
                    .map(|link| {
                        view! {
                            <div class="text-center mt-12" data-reveal="" style=scope.heading()>
                                <a href=link.href.as_str() class="conf-btn-secondary">
                                    {link.label.as_str()}
                                    <Icon name=icons::USER_GROUP class="w-5 h-5" />
                                </a>
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
fn GroupView(group: GroupNode<'static>, scope: RevealScope) -> impl IntoView {
    let layout = group.layout;
    let grid_class = match layout {
        GroupLayout::Featured => "grid md:grid-cols-2 gap-8 max-w-4xl mx-auto",
        GroupLayout::Grid => "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
    };

    view! {
        <div class="mb-16" data-group=group.key>
            <h3 class="text-2xl font-bold text-gray-800 text-center mb-8" data-reveal="" style=scope.heading()>
                {group.title}
            </h3>
            <div class=grid_class>
                {group
                    .members
                    .into_iter()
                    .map(|Revealable { index, item }| match layout {
                        GroupLayout::Featured => view! { <FeaturedMember index item scope /> }.into_any(),
                        GroupLayout::Grid => view! { <GridMember index item scope /> }.into_any(),
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Wide card with photo, role, and description
#[component]
fn FeaturedMember(index: usize, item: MemberCard<'static>, scope: RevealScope) -> impl IntoView {
    view! {
        <div
            class="bg-white rounded-xl shadow-md overflow-hidden flex flex-col sm:flex-row"
            data-reveal=""
            style=scope.child(index)
        >
            <div class="sm:w-1/3 bg-gray-200 flex items-center justify-center min-h-40">
                {match item.photo {
                    Some(src) => {
                        view! { <img src=src alt=item.name class="w-full h-full object-cover" /> }
                            .into_any()
                    }
                    None => view! { <Avatar name=item.name /> }.into_any(),
                }}
            </div>
            <div class="p-6 sm:w-2/3">
                <h4 class="text-xl font-bold text-gray-800">{item.name}</h4>
                <p class=format!("font-medium {}", item.accent.text_class())>{item.role}</p>
                {item.position.map(|position| view! { <p class="text-gray-600 mt-1">{position}</p> })}
                {item
                    .qualification
                    .map(|qualification| view! { <p class="text-sm text-gray-500">{qualification}</p> })}
                {item
                    .description
                    .map(|description| view! { <p class="text-gray-600 mt-4 text-sm">{description}</p> })}
            </div>
        </div>
    }
}

/// Compact card with the role as a badge
#[component]
fn GridMember(index: usize, item: MemberCard<'static>, scope: RevealScope) -> impl IntoView {
    view! {
        <div
            class="bg-white p-6 rounded-xl shadow-md text-center hover:shadow-lg transition-shadow"
            data-reveal=""
            style=scope.child(index)
        >
            <div class="w-20 h-20 mx-auto mb-4 rounded-full overflow-hidden bg-gray-200 flex items-center justify-center">
                {match item.photo {
                    Some(src) => {
                        view! { <img src=src alt=item.name class="w-full h-full object-cover" /> }
                            .into_any()
                    }
                    None => view! { <Avatar name=item.name /> }.into_any(),
                }}
            </div>
            <h4 class="text-lg font-semibold text-gray-800">{item.name}</h4>
            {item
                .qualification
                .map(|qualification| view! { <p class="text-sm text-gray-500">{qualification}</p> })}
            {item.position.map(|position| view! { <p class="text-sm text-gray-600">{position}</p> })}
            <span class=format!(
                "inline-block mt-3 px-3 py-1 text-xs font-medium rounded-full {}",
                item.accent.badge_class(),
            )>{item.role}</span>
        </div>
    }
}

/// Initials placeholder when a member has no photo
#[component]
fn Avatar(name: &'static str) -> impl IntoView {
    view! { <span class="text-2xl font-bold text-gray-500">{initials(name)}</span> }
}

/// First letter of the first two name words, skipping honorifics
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !word.ends_with('.'))
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_skip_honorifics() {
        assert_eq!(initials("Dr. Sarah Johnson"), "SJ");
        assert_eq!(initials("Prof. Dr. A. Kumar"), "K");
        assert_eq!(initials("ada lovelace byron"), "AL");
        assert_eq!(initials(""), "");
    }
}
