//! # Block Structure
//!
//! A block records a single vote and binds it to its place in the chain.
//!
//! ## Block Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Block                                       │
//! │  ├── position: u64        (genesis = 0)      │
//! │  ├── created_at: String   (RFC 3339, UTC)    │
//! │  ├── payload: Vote                           │
//! │  │   ├── voter_id: String                    │
//! │  │   └── choice: i64                         │
//! │  ├── previous_digest: String  ("0" genesis)  │
//! │  └── digest: String       (SHA-256, hex)     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Digest Computation
//!
//! The digest is SHA-256 over the UTF-8 concatenation, with no separators,
//! of `position || previous_digest || created_at || voter_id || choice`.
//! Integers are rendered in decimal, negative choices with a leading `-`.
//! The output is lowercase hex.
//!
//! `created_at` is wall-clock time captured at construction, so building
//! the same vote twice yields two different digests.
//!
//! ## Wire Names
//!
//! The JSON field names (`index`, `Timestamp`, `data.cpf`, `data.vote`,
//! `previousHash`, `hash`) are fixed by the export format and differ from
//! the Rust field names.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::hash::sha256_hex_multi;
use crate::error::ChainError;

// ---------------------------------------------------------------------------
// Vote
// ---------------------------------------------------------------------------

/// The payload of a block: who voted and for what.
///
/// Neither field is interpreted by the chain beyond being hashed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// Voter identifier. No format is enforced.
    #[serde(rename = "cpf")]
    pub voter_id: String,
    /// Choice identifier. No range is enforced.
    #[serde(rename = "vote")]
    pub choice: i64,
}

impl Vote {
    pub fn new(voter_id: impl Into<String>, choice: i64) -> Self {
        Vote {
            voter_id: voter_id.into(),
            choice,
        }
    }
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// A single chain entry.
///
/// Blocks are immutable after construction by convention: the fields are
/// public so tamper scenarios can be staged, but nothing in this crate
/// edits a block once it is built. Any edit that skips recomputing the
/// digest is caught by [`Block::verify`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Zero-based position in the chain.
    #[serde(rename = "index")]
    pub position: u64,
    /// Construction time, RFC 3339 UTC with nanoseconds.
    #[serde(rename = "Timestamp")]
    pub created_at: String,
    /// The recorded vote.
    #[serde(rename = "data")]
    pub payload: Vote,
    /// Digest of the block at `position - 1`, or `"0"` for genesis.
    #[serde(rename = "previousHash")]
    pub previous_digest: String,
    /// Digest of this block's fields.
    #[serde(rename = "hash")]
    pub digest: String,
}

impl Block {
    /// Construct a block stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `position` - Position in the chain.
    /// * `voter_id` - Voter identifier.
    /// * `choice` - Choice identifier.
    /// * `previous_digest` - Digest of the prior block, or `"0"` for genesis.
    pub fn new(
        position: u64,
        voter_id: impl Into<String>,
        choice: i64,
        previous_digest: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(position, voter_id, choice, previous_digest, now_timestamp())
    }

    /// Construct a block with an explicit timestamp.
    ///
    /// Same as [`Block::new`] but deterministic, which makes known-answer
    /// digests possible.
    pub fn with_timestamp(
        position: u64,
        voter_id: impl Into<String>,
        choice: i64,
        previous_digest: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        let mut block = Block {
            position,
            created_at: created_at.into(),
            payload: Vote::new(voter_id, choice),
            previous_digest: previous_digest.into(),
            digest: String::new(),
        };
        block.digest = block.compute_digest();
        block
    }

    /// Recompute the digest from the stored fields.
    pub fn compute_digest(&self) -> String {
        compute_digest(
            self.position,
            &self.previous_digest,
            &self.created_at,
            &self.payload.voter_id,
            self.payload.choice,
        )
    }

    /// Check that the stored digest matches the block's content.
    ///
    /// This covers content integrity only. Linkage to the predecessor is
    /// the chain's job.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::DigestMismatch`] when the digests differ.
    pub fn verify(&self) -> Result<(), ChainError> {
        let computed = self.compute_digest();
        if self.digest != computed {
            return Err(ChainError::DigestMismatch {
                position: self.position,
                stored: self.digest.clone(),
                computed,
            });
        }
        Ok(())
    }

    /// Whether this block sits at the genesis position.
    pub fn is_genesis(&self) -> bool {
        self.position == crate::config::GENESIS_POSITION
    }
}

// ---------------------------------------------------------------------------
// Digest Computation
// ---------------------------------------------------------------------------

/// Compute a block digest from its constituent fields.
///
/// Preimage: `position || previous_digest || created_at || voter_id ||
/// choice`, integers in decimal, no separators.
pub fn compute_digest(
    position: u64,
    previous_digest: &str,
    created_at: &str,
    voter_id: &str,
    choice: i64,
) -> String {
    sha256_hex_multi(&[
        position.to_string().as_bytes(),
        previous_digest.as_bytes(),
        created_at.as_bytes(),
        voter_id.as_bytes(),
        choice.to_string().as_bytes(),
    ])
}

/// Current UTC time in the canonical block timestamp format.
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}
