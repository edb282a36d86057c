//! Edition catalog
//!
//! Editions are JSON files under `content/`, embedded at build time and parsed
//! once on first access. Both the server and the hydrated client read the same
//! catalog, so rendered markup matches on both sides.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::content::Edition;
use super::error::ContentError;
use super::page::RESERVED_IDS;

/// Edition files compiled into the binary, as `(name, json)` pairs
const EMBEDDED_EDITIONS: &[(&str, &str)] = &[
    ("icicrcet24", include_str!("../../content/icicrcet24.json")),
    ("icicrcet25", include_str!("../../content/icicrcet25.json")),
];

static EMBEDDED: LazyLock<Result<EditionCatalog, ContentError>> =
    LazyLock::new(|| EditionCatalog::from_sources(EMBEDDED_EDITIONS.iter().copied()));

/// Validated set of editions, newest first
#[derive(Clone, Debug, PartialEq)]
pub struct EditionCatalog {
    editions: Vec<Edition>,
}

impl EditionCatalog {
    /// The catalog built from the embedded edition files
    pub fn embedded() -> Result<&'static EditionCatalog, &'static ContentError> {
        EMBEDDED.as_ref()
    }

    /// Parse and validate editions from `(name, json)` pairs
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ContentError> {
        let editions = sources
            .into_iter()
            .map(|(name, json)| {
                serde_json::from_str::<Edition>(json).map_err(|source| ContentError::Parse {
                    edition: name.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_editions(editions)
    }

    /// Validate already-parsed editions
    pub fn from_editions(mut editions: Vec<Edition>) -> Result<Self, ContentError> {
        if editions.is_empty() {
            return Err(ContentError::EmptyCatalog);
        }

        let mut slugs = HashSet::new();
        for edition in &editions {
            if !slugs.insert(edition.slug.as_str()) {
                return Err(ContentError::DuplicateEdition(edition.slug.clone()));
            }
            validate_edition(edition)?;
        }

        // Stable sort keeps file order for editions of the same year
        editions.sort_by(|a, b| b.year.cmp(&a.year));

        Ok(Self { editions })
    }

    pub fn get(&self, slug: &str) -> Option<&Edition> {
        self.editions.iter().find(|e| e.slug == slug)
    }

    pub fn require(&self, slug: &str) -> Result<&Edition, ContentError> {
        self.get(slug)
            .ok_or_else(|| ContentError::UnknownEdition(slug.to_string()))
    }

    /// Newest edition by year
    pub fn latest(&self) -> &Edition {
        // Construction rejects empty catalogs
        &self.editions[0]
    }

    /// The preferred edition if it exists, otherwise the newest one
    pub fn resolve_default(&self, preferred: Option<&str>) -> &Edition {
        preferred
            .and_then(|slug| self.get(slug))
            .unwrap_or_else(|| self.latest())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edition> {
        self.editions.iter()
    }

    pub fn len(&self) -> usize {
        self.editions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editions.is_empty()
    }
}

/// Check per-edition invariants
///
/// Every section id is non-empty and unique, and no section or form field id
/// collides with an id the page template uses itself.
pub fn validate_edition(edition: &Edition) -> Result<(), ContentError> {
    let conflict = |id: &str| ContentError::IdConflict {
        edition: edition.slug.clone(),
        id: id.to_string(),
    };

    let mut seen: HashSet<&str> = RESERVED_IDS.into_iter().collect();
    for heading in edition.section_headings() {
        let id = heading.id.trim();
        if id.is_empty() {
            return Err(ContentError::EmptySectionId {
                edition: edition.slug.clone(),
            });
        }
        if RESERVED_IDS.contains(&id) {
            return Err(conflict(id));
        }
        if !seen.insert(id) {
            return Err(ContentError::DuplicateSection {
                edition: edition.slug.clone(),
                id: id.to_string(),
            });
        }
    }

    for field in &edition.contact.form.fields {
        let id = field.id.trim();
        if !seen.insert(id) {
            return Err(conflict(id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> &'static EditionCatalog {
        EditionCatalog::embedded().expect("embedded content should load")
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = embedded();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("2025").is_some());
        assert!(catalog.get("2024").is_some());
    }

    #[test]
    fn test_latest_is_newest_year() {
        assert_eq!(embedded().latest().year, 2025);
    }

    #[test]
    fn test_resolve_default() {
        let catalog = embedded();
        assert_eq!(catalog.resolve_default(Some("2024")).slug, "2024");
        assert_eq!(catalog.resolve_default(Some("1999")).slug, "2025");
        assert_eq!(catalog.resolve_default(None).slug, "2025");
    }

    #[test]
    fn test_require_unknown_edition() {
        let err = embedded().require("nope").unwrap_err();
        assert!(matches!(err, ContentError::UnknownEdition(slug) if slug == "nope"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = EditionCatalog::from_editions(Vec::new()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_edition_rejected() {
        let edition = embedded().latest().clone();
        let err = EditionCatalog::from_editions(vec![edition.clone(), edition]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateEdition(slug) if slug == "2025"));
    }

    #[test]
    fn test_duplicate_section_id_rejected() {
        let mut edition = embedded().latest().clone();
        edition.contact.heading.id = edition.about.heading.id.clone();

        let err = validate_edition(&edition).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSection { id, .. } if id == "about"));
    }

    #[test]
    fn test_empty_section_id_rejected() {
        let mut edition = embedded().latest().clone();
        edition.tracks.heading.id = "  ".to_string();

        let err = validate_edition(&edition).unwrap_err();
        assert!(matches!(err, ContentError::EmptySectionId { .. }));
    }

    #[test]
    fn test_section_id_cannot_take_template_ids() {
        for reserved in ["site-footer", "message", "home"] {
            let mut edition = embedded().latest().clone();
            edition.contact.heading.id = reserved.to_string();

            let err = validate_edition(&edition).unwrap_err();
            assert!(
                matches!(&err, ContentError::IdConflict { id, .. } if id == reserved),
                "`{reserved}` accepted as a section id"
            );
        }
    }

    #[test]
    fn test_section_id_cannot_match_form_field() {
        let mut edition = embedded().latest().clone();
        edition.about.heading.id = "email".to_string();

        let err = validate_edition(&edition).unwrap_err();
        assert!(matches!(err, ContentError::IdConflict { id, .. } if id == "email"));
    }

    #[test]
    fn test_form_field_cannot_take_message_id() {
        let mut edition = embedded().latest().clone();
        edition.contact.form.fields[0].id = "message".to_string();

        let err = validate_edition(&edition).unwrap_err();
        assert!(matches!(err, ContentError::IdConflict { id, .. } if id == "message"));
    }

    #[test]
    fn test_embedded_editions_pass_validation() {
        for edition in embedded().iter() {
            assert!(validate_edition(edition).is_ok(), "{} invalid", edition.slug);
        }
    }

    #[test]
    fn test_parse_error_names_edition() {
        let err = EditionCatalog::from_sources([("broken", "{ not json")]).unwrap_err();
        assert!(matches!(&err, ContentError::Parse { edition, .. } if edition == "broken"));
        assert!(err.to_string().contains("broken"));
    }
}
