//! Content loading errors

/// Errors raised while loading and validating edition content
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to parse edition `{edition}`: {source}")]
    Parse {
        edition: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Edition `{edition}` declares section id `{id}` more than once")]
    DuplicateSection { edition: String, id: String },

    #[error("Edition `{edition}` has a section with an empty id")]
    EmptySectionId { edition: String },

    #[error("Edition `{edition}` uses id `{id}`, which is already taken on the page")]
    IdConflict { edition: String, id: String },

    #[error("Edition slug `{0}` is declared more than once")]
    DuplicateEdition(String),

    #[error("Unknown edition `{0}`")]
    UnknownEdition(String),

    #[error("No editions available")]
    EmptyCatalog,
}
