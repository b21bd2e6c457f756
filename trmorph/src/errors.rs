use thiserror::Error;

/// Fatal construction-time errors. The analyzer itself is total: `analyze`
/// never returns an error, only `Vec<Analysis>` (possibly empty).
#[derive(Error, Debug)]
pub enum MorphError {
    #[error("invalid lexicon line {line:?}: {reason}")]
    InvalidLexiconLine { line: String, reason: String },

    #[error("root mutation failed for {item}: letter {letter:?} does not voice")]
    InvalidRootMutation { item: String, letter: char },

    #[error("could not determine root state for {item}")]
    MissingRootState { item: String },
}
