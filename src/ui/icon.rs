use leptos::prelude::*;

use crate::core::SocialNetwork;

/// Outline icon drawn with the current text color
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let path = icons::outline_path(name).unwrap_or_default();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            class=class
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
        </svg>
    }
}

/// Filled brand glyph for a social network
#[component]
pub fn SocialIcon(
    network: SocialNetwork,
    #[prop(default = "w-6 h-6")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path d=icons::social_path(network) />
        </svg>
    }
}

/// Predefined icon names
pub mod icons {
    use crate::core::{ActionIcon, FeatureIcon, SocialNetwork};

    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const DOWNLOAD: &str = "download";
    pub const DOCUMENT: &str = "document";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const LIGHTBULB: &str = "lightbulb";
    pub const USERS: &str = "users";
    pub const USER_GROUP: &str = "user-group";
    pub const COLLECTION: &str = "collection";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const LOCATION: &str = "location";

    /// Path data for an outline icon
    pub fn outline_path(name: &str) -> Option<&'static str> {
        let d = match name {
            MENU => "M4 6h16M4 12h16M4 18h16",
            X => "M6 18L18 6M6 6l12 12",
            DOWNLOAD => "M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-4l-4 4m0 0l-4-4m4 4V4",
            DOCUMENT => "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
            CHEVRON_RIGHT => "M9 5l7 7-7 7",
            CHECK_CIRCLE => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
            LIGHTBULB => "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z",
            USERS => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
            USER_GROUP => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z",
            COLLECTION => "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10",
            MAIL => "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            PHONE => "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z",
            LOCATION => "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0zM15 11a3 3 0 11-6 0 3 3 0 016 0z",
            _ => return None,
        };
        Some(d)
    }

    pub fn action_icon(icon: ActionIcon) -> &'static str {
        match icon {
            ActionIcon::Download => DOWNLOAD,
            ActionIcon::Document => DOCUMENT,
            ActionIcon::ArrowRight => CHEVRON_RIGHT,
        }
    }

    pub fn feature_icon(icon: FeatureIcon) -> &'static str {
        match icon {
            FeatureIcon::Innovation => LIGHTBULB,
            FeatureIcon::Networking => USERS,
            FeatureIcon::Publication => COLLECTION,
        }
    }

    /// Icon for a contact entry, chosen by its title
    pub fn contact_icon(title: &str) -> &'static str {
        match title.to_ascii_lowercase().as_str() {
            "email" | "e-mail" | "mail" => MAIL,
            "phone" | "telephone" | "mobile" => PHONE,
            _ => LOCATION,
        }
    }

    /// Path data for a social network glyph
    pub fn social_path(network: SocialNetwork) -> &'static str {
        match network {
            SocialNetwork::Website => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-1 17.93c-3.95-.49-7-3.85-7-7.93 0-.62.08-1.21.21-1.79L9 15v1c0 1.1.9 2 2 2v1.93zm6.9-2.54c-.26-.81-1-1.39-1.9-1.39h-1v-3c0-.55-.45-1-1-1H8v-2h2c.55 0 1-.45 1-1V7h2c1.1 0 2-.9 2-2v-.41c2.93 1.19 5 4.06 5 7.41 0 2.08-.8 3.97-2.1 5.39z",
            SocialNetwork::Facebook => "M22 12c0-5.523-4.477-10-10-10S2 6.477 2 12c0 4.991 3.657 9.128 8.438 9.878v-6.987h-2.54V12h2.54V9.797c0-2.506 1.492-3.89 3.777-3.89 1.094 0 2.238.195 2.238.195v2.46h-1.26c-1.243 0-1.63.771-1.63 1.562V12h2.773l-.443 2.89h-2.33v6.988C18.343 21.128 22 16.991 22 12z",
            SocialNetwork::Instagram => "M12.315 2c2.43 0 2.784.013 3.808.06 1.064.049 1.791.218 2.427.465.668.25 1.236.599 1.799 1.163.569.569.921 1.142 1.174 1.8.247.636.416 1.363.465 2.427.048 1.024.06 1.379.06 3.808 0 2.43-.013 2.784-.06 3.808-.049 1.064-.218 1.791-.465 2.427-.25.668-.599 1.236-1.163 1.799-.569.569-1.142.921-1.8 1.174-.636.247-1.363.416-2.427.465-1.024.048-1.379.06-3.808.06-2.43 0-2.784-.013-3.808-.06-1.064-.049-1.791-.218-2.427-.465-.668-.25-1.236-.599-1.799-1.163-.569-.569-.921-1.142-1.174-1.8-.247-.636-.416-1.363-.465-2.427-.048-1.024-.06-1.379-.06-3.808 0-2.43.013-2.784.06-3.808.049-1.064.218-1.791.465-2.427.25-.668.599-1.236 1.163-1.799.569-.569 1.142-.921 1.8-1.174.636-.247 1.363-.416 2.427-.465 1.024-.048 1.379-.06 3.808-.06zM12 7a5 5 0 100 10 5 5 0 000-10zm0 8.333a3.333 3.333 0 110-6.666 3.333 3.333 0 010 6.666z",
            SocialNetwork::Twitter => "M8.29 20.251c7.547 0 11.675-6.253 11.675-11.675 0-.178 0-.355-.012-.53A8.348 8.348 0 0022 5.92a8.19 8.19 0 01-2.357.646 4.118 4.118 0 001.804-2.27 8.224 8.224 0 01-2.605.996 4.107 4.107 0 00-6.993 3.743 11.65 11.65 0 01-8.457-4.287 4.106 4.106 0 001.27 5.477A4.072 4.072 0 012.8 9.713v.052a4.105 4.105 0 003.292 4.022 4.095 4.095 0 01-1.853.07 4.108 4.108 0 003.834 2.85A8.233 8.233 0 012 18.407a11.616 11.616 0 006.29 1.84",
            SocialNetwork::Linkedin => "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
            SocialNetwork::Email => "M20 4H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_every_named_icon_has_a_path() {
            for name in [
                MENU, X, DOWNLOAD, DOCUMENT, CHEVRON_RIGHT, CHECK_CIRCLE, LIGHTBULB, USERS,
                USER_GROUP, COLLECTION, MAIL, PHONE, LOCATION,
            ] {
                assert!(outline_path(name).is_some(), "missing path for {name}");
            }
            assert!(outline_path("unknown").is_none());
        }

        #[test]
        fn test_contact_icon_by_title() {
            assert_eq!(contact_icon("Email"), MAIL);
            assert_eq!(contact_icon("Phone"), PHONE);
            assert_eq!(contact_icon("Address"), LOCATION);
        }
    }
}
