//! Page tree builder
//!
//! [`PageTree::build`] turns an [`Edition`] into the structure the page
//! template renders: nav entries, the hero, one node per revealable section
//! with its children in display order, and the footer. It is a pure function
//! of the edition; the only omissions are role-gated sub-blocks (a speaker
//! only when a session has one, an address block only when a contact entry
//! has no link).

use super::content::{
    Accent, AgendaDay, CommitteeMember, ContactEntry, ContactForm, Edition, Feature, GroupLayout,
    Hero, Link, SectionHeading, Session, SocialLink, Speaker,
};

/// DOM id of the hero banner
pub const HERO_ID: &str = "home";
/// DOM id of the page footer, observed for its own reveal
pub const FOOTER_ID: &str = "site-footer";
/// DOM id of the contact form's message box
pub const MESSAGE_FIELD_ID: &str = "message";

/// Ids the page template assigns itself; content may not reuse them
pub const RESERVED_IDS: [&str; 3] = [HERO_ID, FOOTER_ID, MESSAGE_FIELD_ID];

/// Header nav entry pointing at a section anchor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem<'a> {
    pub label: &'a str,
    pub section_id: &'a str,
}

impl NavItem<'_> {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageTree<'a> {
    pub nav: Vec<NavItem<'a>>,
    pub hero: &'a Hero,
    pub sections: Vec<SectionNode<'a>>,
    pub footer: FooterNode<'a>,
}

/// A revealable section: heading block plus staggered children
#[derive(Clone, Debug, PartialEq)]
pub struct SectionNode<'a> {
    pub heading: &'a SectionHeading,
    pub body: SectionBody<'a>,
}

impl<'a> SectionNode<'a> {
    pub fn id(&self) -> &'a str {
        &self.heading.id
    }

    /// Number of top-level staggered children
    pub fn child_count(&self) -> usize {
        match &self.body {
            SectionBody::About { features } => features.len(),
            SectionBody::Tracks { tracks } => tracks.len(),
            SectionBody::Agenda { days, .. } => days.iter().map(|d| d.sessions.len()).max().unwrap_or(0),
            SectionBody::Committee { groups, .. } => {
                groups.iter().map(|g| g.members.len()).max().unwrap_or(0)
            }
            SectionBody::Contact { entries, .. } => entries.len(),
        }
    }

    /// Largest nested list inside one child, used for settle timing
    pub fn max_items_per_child(&self) -> usize {
        match &self.body {
            SectionBody::Tracks { tracks } => tracks.iter().map(|t| t.item.items.len()).max().unwrap_or(0),
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody<'a> {
    About {
        features: Vec<Revealable<&'a Feature>>,
    },
    Tracks {
        tracks: Vec<Revealable<TrackCard<'a>>>,
    },
    Agenda {
        days: Vec<DayNode<'a>>,
        schedule_link: Option<&'a Link>,
    },
    Committee {
        groups: Vec<GroupNode<'a>>,
        roster_link: Option<&'a Link>,
    },
    Contact {
        card_heading: &'a str,
        entries: Vec<Revealable<ContactCard<'a>>>,
        socials: &'a [SocialLink],
        form: &'a ContactForm,
    },
}

/// A child participating in a staggered entry
#[derive(Clone, Debug, PartialEq)]
pub struct Revealable<T> {
    /// Position within the parent's sequence
    pub index: usize,
    pub item: T,
}

fn indexed<T>(items: impl IntoIterator<Item = T>) -> Vec<Revealable<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Revealable { index, item })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackCard<'a> {
    pub title: &'a str,
    pub accent: Accent,
    pub items: &'a [String],
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayNode<'a> {
    pub marker: &'a str,
    pub title: &'a str,
    pub sessions: Vec<Revealable<SessionCard<'a>>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionCard<'a> {
    pub time: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub accent: Accent,
    /// Present only for sessions with a named speaker
    pub speaker: Option<&'a Speaker>,
}

impl<'a> From<&'a Session> for SessionCard<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            time: &session.time,
            title: &session.title,
            description: &session.description,
            accent: session.accent,
            speaker: session.speaker.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupNode<'a> {
    pub key: &'a str,
    pub title: &'a str,
    pub layout: GroupLayout,
    pub members: Vec<Revealable<MemberCard<'a>>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberCard<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub qualification: Option<&'a str>,
    pub position: Option<&'a str>,
    pub description: Option<&'a str>,
    pub accent: Accent,
    pub photo: Option<&'a str>,
}

impl<'a> From<&'a CommitteeMember> for MemberCard<'a> {
    fn from(member: &'a CommitteeMember) -> Self {
        Self {
            name: &member.name,
            role: &member.role,
            qualification: member.qualification.as_deref(),
            position: member.position.as_deref(),
            description: member.description.as_deref(),
            accent: member.accent,
            photo: member.photo.as_deref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactCard<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub body: ContactBody<'a>,
}

/// How a contact entry is presented
#[derive(Clone, Debug, PartialEq)]
pub enum ContactBody<'a> {
    Link { href: &'a str, text: &'a str },
    /// Literal address lines, rendered one per line
    Address(&'a [String]),
}

impl<'a> From<&'a ContactEntry> for ContactCard<'a> {
    fn from(entry: &'a ContactEntry) -> Self {
        let body = match entry.link.as_deref() {
            Some(href) => ContactBody::Link {
                href,
                text: entry.link_text.as_deref().unwrap_or(href),
            },
            None => ContactBody::Address(&entry.address),
        };
        Self {
            title: &entry.title,
            subtitle: entry.subtitle.as_deref(),
            body,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FooterNode<'a> {
    pub blurb: &'a str,
    pub dates_line: &'a str,
    /// Mirrors the header nav
    pub quick_links: Vec<NavItem<'a>>,
    pub resources: &'a [Link],
    pub socials: &'a [SocialLink],
    pub copyright: &'a str,
}

impl<'a> PageTree<'a> {
    pub fn build(edition: &'a Edition) -> Self {
        let nav: Vec<NavItem<'a>> = edition
            .section_headings()
            .into_iter()
            .filter_map(|heading| {
                heading.nav_label.as_deref().map(|label| NavItem {
                    label,
                    section_id: &heading.id,
                })
            })
            .collect();

        let sections = vec![
            SectionNode {
                heading: &edition.about.heading,
                body: SectionBody::About {
                    features: indexed(&edition.about.features),
                },
            },
            SectionNode {
                heading: &edition.tracks.heading,
                body: SectionBody::Tracks {
                    tracks: indexed(edition.tracks.tracks.iter().map(|track| TrackCard {
                        title: &track.title,
                        accent: track.accent,
                        items: &track.items,
                    })),
                },
            },
            SectionNode {
                heading: &edition.agenda.heading,
                body: SectionBody::Agenda {
                    days: edition.agenda.days.iter().map(DayNode::from).collect(),
                    schedule_link: edition.agenda.schedule_link.as_ref(),
                },
            },
            SectionNode {
                heading: &edition.committee.heading,
                body: SectionBody::Committee {
                    groups: edition
                        .committee
                        .groups
                        .iter()
                        .map(|group| GroupNode {
                            key: &group.key,
                            title: &group.title,
                            layout: group.layout,
                            members: indexed(group.members.iter().map(MemberCard::from)),
                        })
                        .collect(),
                    roster_link: edition.committee.roster_link.as_ref(),
                },
            },
            SectionNode {
                heading: &edition.contact.heading,
                body: SectionBody::Contact {
                    card_heading: &edition.contact.card_heading,
                    entries: indexed(edition.contact.entries.iter().map(ContactCard::from)),
                    socials: &edition.contact.socials,
                    form: &edition.contact.form,
                },
            },
        ];

        let footer = FooterNode {
            blurb: &edition.footer.blurb,
            dates_line: &edition.footer.dates_line,
            quick_links: nav.clone(),
            resources: &edition.footer.resources,
            socials: &edition.footer.socials,
            copyright: &edition.footer.copyright,
        };

        Self {
            nav,
            hero: &edition.hero,
            sections,
            footer,
        }
    }
}

impl<'a> From<&'a AgendaDay> for DayNode<'a> {
    fn from(day: &'a AgendaDay) -> Self {
        Self {
            marker: &day.marker,
            title: &day.title,
            sessions: indexed(day.sessions.iter().map(SessionCard::from)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::EditionCatalog;
    use crate::core::content::{CommitteeGroup, Track};

    fn edition_2025() -> Edition {
        EditionCatalog::embedded()
            .expect("embedded content should load")
            .require("2025")
            .expect("2025 edition exists")
            .clone()
    }

    fn section<'t, 'a>(tree: &'t PageTree<'a>, id: &str) -> Option<&'t SectionNode<'a>> {
        tree.sections.iter().find(|s| s.id() == id)
    }

    fn edition_2024() -> &'static Edition {
        EditionCatalog::embedded()
            .expect("embedded content should load")
            .require("2024")
            .expect("2024 edition exists")
    }

    #[test]
    fn test_build_is_deterministic() {
        let edition = edition_2025();
        let first = PageTree::build(&edition);
        let second = PageTree::build(&edition);
        assert_eq!(first, second);

        let copy = edition.clone();
        assert_eq!(PageTree::build(&copy), first);
    }

    #[test]
    fn test_sections_in_page_order() {
        let edition = edition_2025();
        let tree = PageTree::build(&edition);
        let ids: Vec<&str> = tree.sections.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["about", "tracks", "agenda", "committee", "contact"]);
    }

    #[test]
    fn test_nav_mirrors_labelled_sections() {
        let mut edition = edition_2025();
        edition.agenda.heading.nav_label = None;

        let tree = PageTree::build(&edition);
        let labels: Vec<&str> = tree.nav.iter().map(|n| n.label).collect();
        assert_eq!(labels, vec!["About", "Tracks", "Committee", "Contact"]);
        assert_eq!(tree.nav[0].href(), "#about");
        assert_eq!(tree.footer.quick_links, tree.nav);
    }

    #[test]
    fn test_three_tracks_render_in_order() {
        let mut edition = edition_2025();
        edition.tracks.tracks = ["Track A", "Track B", "Track C"]
            .iter()
            .enumerate()
            .map(|(i, title)| Track {
                title: title.to_string(),
                accent: Accent::default(),
                items: (0..=i).map(|n| format!("{title} topic {n}")).collect(),
            })
            .collect();

        let tree = PageTree::build(&edition);
        let Some(SectionNode {
            body: SectionBody::Tracks { tracks },
            ..
        }) = section(&tree, "tracks")
        else {
            panic!("tracks section missing");
        };

        assert_eq!(tracks.len(), 3);
        let titles: Vec<&str> = tracks.iter().map(|t| t.item.title).collect();
        assert_eq!(titles, vec!["Track A", "Track B", "Track C"]);
        for (i, card) in tracks.iter().enumerate() {
            assert_eq!(card.index, i);
            assert_eq!(card.item.items, edition.tracks.tracks[i].items.as_slice());
        }
    }

    #[test]
    fn test_coordinator_group_renders_four_cards() {
        let edition = edition_2024();
        let tree = PageTree::build(edition);
        let Some(SectionNode {
            body: SectionBody::Committee { groups, .. },
            ..
        }) = section(&tree, "committee")
        else {
            panic!("committee section missing");
        };

        let group = groups
            .iter()
            .find(|g| g.key == "coordinator")
            .expect("coordinator group");
        let source: &CommitteeGroup = edition
            .committee
            .groups
            .iter()
            .find(|g| g.key == "coordinator")
            .expect("coordinator content");

        assert_eq!(group.members.len(), 4);
        for (card, member) in group.members.iter().zip(&source.members) {
            assert_eq!(card.item.name, member.name);
            assert_eq!(card.item.qualification, member.qualification.as_deref());
            assert_eq!(card.item.role, member.role);
        }
        let indexes: Vec<usize> = group.members.iter().map(|m| m.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_address_without_link_renders_lines() {
        let edition = edition_2025();
        let tree = PageTree::build(&edition);
        let Some(SectionNode {
            body: SectionBody::Contact { entries, .. },
            ..
        }) = section(&tree, "contact")
        else {
            panic!("contact section missing");
        };

        let address = entries
            .iter()
            .find(|e| e.item.title == "Address")
            .expect("address entry");
        match &address.item.body {
            ContactBody::Address(lines) => {
                assert_eq!(lines.len(), 3);
                assert_eq!(lines[0], "Department of Computer Science & Engineering");
                assert_eq!(lines[2], "Chennai, Tamil Nadu, India - 602117");
            }
            other => panic!("expected address block, got {other:?}"),
        }

        let email = entries.iter().find(|e| e.item.title == "Email").expect("email entry");
        assert_eq!(
            email.item.body,
            ContactBody::Link {
                href: "mailto:icicrcet25@svce.edu.in",
                text: "icicrcet25@svce.edu.in",
            }
        );
    }

    #[test]
    fn test_link_without_text_uses_href() {
        let entry = ContactEntry {
            title: "Web".to_string(),
            subtitle: None,
            link: Some("https://svce.ac.in".to_string()),
            link_text: None,
            address: Vec::new(),
        };
        let card = ContactCard::from(&entry);
        assert_eq!(
            card.body,
            ContactBody::Link {
                href: "https://svce.ac.in",
                text: "https://svce.ac.in",
            }
        );
    }

    #[test]
    fn test_speaker_only_when_present() {
        let edition = edition_2025();
        let tree = PageTree::build(&edition);
        let Some(SectionNode {
            body: SectionBody::Agenda { days, .. },
            ..
        }) = section(&tree, "agenda")
        else {
            panic!("agenda section missing");
        };

        let speakers: Vec<bool> = days[0]
            .sessions
            .iter()
            .map(|s| s.item.speaker.is_some())
            .collect();
        assert_eq!(speakers, vec![true, false, false, false]);
        assert_eq!(days[0].sessions[0].item.speaker.unwrap().name, "Dr. Sarah Johnson");
    }

    #[test]
    fn test_child_counts() {
        let edition = edition_2025();
        let tree = PageTree::build(&edition);
        assert_eq!(section(&tree, "about").unwrap().child_count(), 3);
        assert_eq!(section(&tree, "tracks").unwrap().child_count(), 5);
        assert_eq!(section(&tree, "tracks").unwrap().max_items_per_child(), 9);
        assert_eq!(section(&tree, "committee").unwrap().child_count(), 6);
        assert_eq!(section(&tree, "contact").unwrap().child_count(), 3);
    }

    #[test]
    fn test_max_items_per_child_takes_longest_track() {
        let tree = PageTree::build(edition_2024());
        assert_eq!(section(&tree, "tracks").unwrap().max_items_per_child(), 4);
        assert_eq!(section(&tree, "agenda").unwrap().max_items_per_child(), 0);
    }
}
