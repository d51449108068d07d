use thiserror::Error;

/// Reasons a strict build ([`Builder::try_build`][crate::Builder::try_build]) rejects its input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Some values did not fit any open interval and were left out of the tree. The input was
    /// not the pre-order traversal of a strict BST.
    #[error("pre-order sequence truncated: placed {consumed} of {len} values")]
    Truncated {
        /// How many leading values made it into the tree.
        consumed: usize,
        /// Length of the input sequence.
        len: usize,
    },
    /// The configured lower bound is not below the configured upper bound, so no value can be
    /// placed.
    #[error("lower bound is not below upper bound")]
    EmptyInterval,
}
