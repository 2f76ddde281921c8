//! Error types for selector parsing and resolution.
use thiserror::Error;

/// Malformed selector text. Raised by the parser before any tree is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GrammarError {
    #[error("'#' selectors must be at the start of a provided path")]
    IdNotAtStart,
    #[error("'#' selectors require a following id")]
    IdMissingName,
    #[error("'>' selectors require a following node name")]
    DirectChildMissingName,
    #[error("'#' selectors must not be used in combination with multiple node names")]
    AlternationWithId,
    #[error("Multiple node names must be provided when using or selectors")]
    AlternationMissingNames,
    #[error("An or selector must not include any reserved characters '#>[]=\"()'")]
    AlternationReservedCharacter,
    #[error("An attribute must not include any reserved characters '#>[]=\"()'")]
    AttributeReservedCharacter,
    #[error("'(n)' selectors require an integer with a preceding node name, e.g. w:t(0)")]
    InvalidIndex,
    #[error("A node name must not include any reserved characters '#>[]=\"()'")]
    ReservedCharacterInName,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("'#' selectors must be used from a document node")]
    NotADocumentRoot,
}
