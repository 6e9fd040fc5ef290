//! Error types for the vote chain.
//!
//! Integrity failures found during validation are reported results, not
//! faults: [`Chain::validate`](crate::Chain::validate) folds them into a
//! boolean, and [`Chain::verify`](crate::Chain::verify) hands back the
//! first one as a [`ChainError`].

use thiserror::Error;

/// Errors produced by chain operations and the JSON boundary.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The chain holds no blocks, so there is no tail to read or extend.
    /// Only reachable for a chain decoded from an empty array.
    #[error("chain is empty")]
    EmptyChain,

    /// The tail block's position is `u64::MAX`, so no successor position
    /// exists.
    #[error("cannot append after block {position}: position overflow")]
    PositionOverflow {
        /// Position of the current tail block.
        position: u64,
    },

    /// A block's stored digest does not match its content.
    #[error("block {position} digest mismatch: stored={stored}, computed={computed}")]
    DigestMismatch {
        /// Position of the offending block.
        position: u64,
        /// Digest stored on the block.
        stored: String,
        /// Digest recomputed from the block's fields.
        computed: String,
    },

    /// A block's previous digest does not match its predecessor's digest.
    #[error("block {position} broken link: expected previous={expected}, found={found}")]
    BrokenLink {
        /// Position of the offending block.
        position: u64,
        /// Digest of the preceding block.
        expected: String,
        /// Previous digest stored on the block.
        found: String,
    },

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Encoded output was not valid UTF-8.
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
