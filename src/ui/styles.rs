//! Page-level styles that Tailwind utilities don't cover

use leptos::prelude::*;

use crate::ui::reveal::REVEAL_ATTR;

/// Stylesheet for `<noscript>`: every reveal-driven element is forced to rest
/// whatever inline style it carries.
pub fn noscript_reveal_css() -> String {
    format!("<style>[{REVEAL_ATTR}]{{opacity:1!important;transform:none!important;}}</style>")
}

/// `<noscript>` fallback, rendered once in the document head
#[component]
pub fn NoScriptReveal() -> impl IntoView {
    view! { <noscript inner_html=noscript_reveal_css()></noscript> }
}

/// Buttons, the floating mascot, and decorative blobs
#[component]
pub fn ConferenceStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
            }

            /* Button styles */
            .conf-btn-primary {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.75rem 1.5rem;
                font-weight: 600;
                color: white;
                background-color: #2563eb;
                border-radius: 0.5rem;
                transition: background-color 0.3s, transform 0.3s;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
            }
            .conf-btn-primary:hover {
                background-color: #1d4ed8;
                transform: scale(1.05);
            }

            .conf-btn-secondary {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.75rem 1.5rem;
                font-weight: 600;
                color: #2563eb;
                background-color: white;
                border: 1px solid #2563eb;
                border-radius: 0.5rem;
                transition: background-color 0.3s, transform 0.3s;
            }
            .conf-btn-secondary:hover {
                background-color: #eff6ff;
                transform: scale(1.05);
            }

            /* Floating mascot */
            @keyframes conf-float {
                0%, 100% {
                    transform: translateY(0);
                }
                50% {
                    transform: translateY(-15px);
                }
            }
            .conf-float {
                animation: conf-float 4s ease-in-out infinite;
            }

            /* Background blobs */
            @keyframes conf-blob {
                0%, 100% {
                    transform: translate(0, 0) scale(1);
                }
                33% {
                    transform: translate(30px, -50px) scale(1.1);
                }
                66% {
                    transform: translate(-20px, 20px) scale(0.9);
                }
            }
            .conf-blob {
                animation: conf-blob 7s infinite;
            }
            .conf-blob-delay {
                animation-delay: 2s;
            }

            @media (prefers-reduced-motion: reduce) {
                html {
                    scroll-behavior: auto;
                }
                .conf-float,
                .conf-blob {
                    animation: none;
                }
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noscript_rule_targets_reveal_attribute() {
        let css = noscript_reveal_css();
        assert!(css.starts_with("<style>[data-reveal]{"));
        assert!(css.contains("opacity:1!important"));
        assert!(css.contains("transform:none!important"));
    }
}
