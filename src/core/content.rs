//! Edition content model
//!
//! Plain immutable records deserialized from `content/*.json`. Every list is
//! display order; nothing here carries identity beyond its position.

use serde::{Deserialize, Serialize};

/// One conference edition: everything a single page needs to render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    /// URL segment, e.g. `"2025"` for `/2025`
    pub slug: String,
    pub year: u16,
    pub meta: PageMeta,
    pub brand: Brand,
    pub hero: Hero,
    pub about: AboutSection,
    pub tracks: TracksSection,
    pub agenda: AgendaSection,
    pub committee: CommitteeSection,
    pub contact: ContactSection,
    pub footer: Footer,
}

/// Document head metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub canonical_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub logo: String,
    pub logo_alt: String,
    /// Short conference acronym, e.g. `ICICRCET`
    pub short_name: String,
    /// Edition suffix appended to the acronym, e.g. `'25`
    pub suffix: String,
    pub register: Link,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    #[serde(default = "default_href")]
    pub href: String,
}

fn default_href() -> String {
    "#".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub subtitle: String,
    #[serde(default)]
    pub actions: Vec<HeroAction>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub mascot: Option<Image>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroAction {
    pub label: String,
    #[serde(default = "default_href")]
    pub href: String,
    pub icon: ActionIcon,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionIcon {
    Download,
    Document,
    ArrowRight,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    #[serde(default = "default_href")]
    pub href: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialNetwork {
    Website,
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Email,
}

impl SocialNetwork {
    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::Website => "Website",
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Linkedin => "LinkedIn",
            SocialNetwork::Email => "Email",
        }
    }
}

/// Heading block shared by every revealable section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeading {
    /// DOM anchor and nav target; unique within an edition
    pub id: String,
    /// Label in the header nav; sections without one are not linked
    #[serde(default)]
    pub nav_label: Option<String>,
    pub heading: String,
    pub lead: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    #[serde(flatten)]
    pub heading: SectionHeading,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureIcon {
    Innovation,
    Networking,
    Publication,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TracksSection {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub tracks: Vec<Track>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    #[serde(default)]
    pub accent: Accent,
    pub items: Vec<String>,
}

/// Accent palette. Each variant maps to complete utility class names so the
/// stylesheet purger can see them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    #[default]
    Blue,
    Indigo,
    Purple,
    Green,
    Red,
    Amber,
}

impl Accent {
    pub fn border_class(&self) -> &'static str {
        match self {
            Accent::Blue => "border-blue-600",
            Accent::Indigo => "border-indigo-600",
            Accent::Purple => "border-purple-600",
            Accent::Green => "border-green-600",
            Accent::Red => "border-red-600",
            Accent::Amber => "border-amber-600",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Blue => "text-blue-600",
            Accent::Indigo => "text-indigo-600",
            Accent::Purple => "text-purple-600",
            Accent::Green => "text-green-600",
            Accent::Red => "text-red-600",
            Accent::Amber => "text-amber-600",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-500",
            Accent::Indigo => "bg-indigo-500",
            Accent::Purple => "bg-purple-500",
            Accent::Green => "bg-green-500",
            Accent::Red => "bg-red-500",
            Accent::Amber => "bg-amber-500",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-100 text-blue-800",
            Accent::Indigo => "bg-indigo-100 text-indigo-800",
            Accent::Purple => "bg-purple-100 text-purple-800",
            Accent::Green => "bg-green-100 text-green-800",
            Accent::Red => "bg-red-100 text-red-800",
            Accent::Amber => "bg-amber-100 text-amber-800",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgendaSection {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub days: Vec<AgendaDay>,
    #[serde(default)]
    pub schedule_link: Option<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaDay {
    /// Short marker shown in the day bubble, e.g. `D1`
    pub marker: String,
    pub title: String,
    pub sessions: Vec<Session>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub time: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub speaker: Option<Speaker>,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitteeSection {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub groups: Vec<CommitteeGroup>,
    #[serde(default)]
    pub roster_link: Option<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeGroup {
    /// Stable key for the group, e.g. `patrons` or `coordinator`
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub layout: GroupLayout,
    pub members: Vec<CommitteeMember>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupLayout {
    /// Two wide cards per row, role shown under the name
    Featured,
    /// Three-column grid, role shown as a badge
    #[default]
    Grid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactSection {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub card_heading: String,
    pub entries: Vec<ContactEntry>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub form: ContactForm,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
    #[serde(default)]
    pub address: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub heading: String,
    pub fields: Vec<FormField>,
    pub message_label: String,
    pub message_placeholder: String,
    pub submit_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type", default = "default_input_type")]
    pub input_type: String,
    #[serde(default)]
    pub placeholder: String,
}

fn default_input_type() -> String {
    "text".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub dates_line: String,
    #[serde(default)]
    pub resources: Vec<Link>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub copyright: String,
}

impl Edition {
    /// All section heading blocks in page order
    pub fn section_headings(&self) -> [&SectionHeading; 5] {
        [
            &self.about.heading,
            &self.tracks.heading,
            &self.agenda.heading,
            &self.committee.heading,
            &self.contact.heading,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_entry_defaults() {
        let entry: ContactEntry = serde_json::from_str(
            r#"{ "title": "Address", "address": ["Line 1", "Line 2"] }"#,
        )
        .unwrap();

        assert!(entry.link.is_none());
        assert!(entry.subtitle.is_none());
        assert_eq!(entry.address, vec!["Line 1", "Line 2"]);
    }

    #[test]
    fn test_link_defaults_to_hash() {
        let link: Link = serde_json::from_str(r#"{ "label": "FAQs" }"#).unwrap();
        assert_eq!(link.href, "#");
    }

    #[test]
    fn test_accent_parses_lowercase() {
        let track: Track =
            serde_json::from_str(r#"{ "title": "T", "accent": "amber", "items": [] }"#).unwrap();
        assert_eq!(track.accent, Accent::Amber);
        assert_eq!(track.accent.border_class(), "border-amber-600");
    }

    #[test]
    fn test_accent_defaults_to_blue() {
        let session: Session = serde_json::from_str(
            r#"{ "time": "09:00", "title": "Opening", "description": "Welcome" }"#,
        )
        .unwrap();
        assert_eq!(session.accent, Accent::Blue);
        assert!(session.speaker.is_none());
    }

    #[test]
    fn test_form_field_type_rename() {
        let field: FormField = serde_json::from_str(
            r#"{ "id": "email", "label": "Email Address", "type": "email" }"#,
        )
        .unwrap();
        assert_eq!(field.input_type, "email");
        assert_eq!(field.placeholder, "");
    }

    #[test]
    fn test_group_layout_default_grid() {
        let group: CommitteeGroup =
            serde_json::from_str(r#"{ "key": "coordinator", "title": "Coordinators", "members": [] }"#)
                .unwrap();
        assert_eq!(group.layout, GroupLayout::Grid);
    }
}
