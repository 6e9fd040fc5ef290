//! # Chain Management
//!
//! An ordered, append-only sequence of [`Block`]s anchored by a genesis
//! block. The chain owns block creation: callers hand it a vote, and it
//! assigns the position and link.
//!
//! ## Validation
//!
//! Every non-genesis block must pass two checks:
//!
//! 1. **Content integrity** - the stored digest equals a recomputation.
//! 2. **Link integrity** - the stored previous digest equals the digest
//!    stored on the block before it.
//!
//! Genesis has no predecessor and is only checked at creation time. The
//! walk starts at index 1 and stops at the first failure.
//!
//! Positions are not compared against their neighbours. An edit to the
//! tail block that also recomputes its digest leaves nothing downstream to
//! disagree with it, so it goes unnoticed; any other edit is caught.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::block::Block;
use super::codec;
use crate::config::{GENESIS_CHOICE, GENESIS_POSITION, GENESIS_PREVIOUS_DIGEST, GENESIS_VOTER_ID};
use crate::error::ChainError;

/// Ordered chain of vote blocks.
///
/// Serializes as a bare JSON array of blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Build the genesis block: position 0, sentinel voter, zero choice,
    /// and `"0"` as the previous digest.
    pub fn create_genesis() -> Block {
        Block::new(
            GENESIS_POSITION,
            GENESIS_VOTER_ID,
            GENESIS_CHOICE,
            GENESIS_PREVIOUS_DIGEST,
        )
    }

    /// Create a chain holding only the genesis block.
    pub fn new() -> Self {
        Chain {
            blocks: vec![Self::create_genesis()],
        }
    }

    /// Adopt an existing block sequence as-is.
    ///
    /// No validation is performed; call [`Chain::validate`] or
    /// [`Chain::verify`] before trusting the result.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Chain { blocks }
    }

    /// Returns the block at the tail of the chain.
    ///
    /// # Errors
    ///
    /// [`ChainError::EmptyChain`] if the chain has no blocks, which can
    /// only happen for a chain built from an empty sequence.
    pub fn latest(&self) -> Result<&Block, ChainError> {
        self.blocks.last().ok_or(ChainError::EmptyChain)
    }

    /// Record a vote at the tail of the chain and return the new block.
    ///
    /// # Errors
    ///
    /// * [`ChainError::EmptyChain`] - there is no tail to link to.
    /// * [`ChainError::PositionOverflow`] - the tail already sits at
    ///   `u64::MAX`, which only a decoded chain can reach.
    ///
    /// The chain is left untouched on error.
    pub fn append(
        &mut self,
        voter_id: impl Into<String>,
        choice: i64,
    ) -> Result<&Block, ChainError> {
        let latest = self.latest()?;
        let position = latest
            .position
            .checked_add(1)
            .ok_or(ChainError::PositionOverflow {
                position: latest.position,
            })?;
        let block = Block::new(
            position,
            voter_id,
            choice,
            latest.digest.clone(),
        );

        debug!(
            position = block.position,
            digest = %block.digest,
            "block appended"
        );

        let index = self.blocks.len();
        self.blocks.push(block);
        Ok(&self.blocks[index])
    }

    /// Walk the chain and return the first integrity failure, if any.
    ///
    /// # Errors
    ///
    /// * [`ChainError::DigestMismatch`] - a block's content was altered.
    /// * [`ChainError::BrokenLink`] - a block does not point at its
    ///   predecessor (edited link, reordering, or removal).
    pub fn verify(&self) -> Result<(), ChainError> {
        for (previous, current) in self.blocks.iter().zip(self.blocks.iter().skip(1)) {
            current.verify()?;

            if current.previous_digest != previous.digest {
                return Err(ChainError::BrokenLink {
                    position: current.position,
                    expected: previous.digest.clone(),
                    found: current.previous_digest.clone(),
                });
            }
        }
        Ok(())
    }

    /// Whether every non-genesis block passes both integrity checks.
    pub fn validate(&self) -> bool {
        match self.verify() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "chain validation failed");
                false
            }
        }
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the block at `position`, if present.
    pub fn get(&self, position: usize) -> Option<&Block> {
        self.blocks.get(position)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Mutable view of the blocks.
    ///
    /// Allows editing or swapping blocks in place, never adding or removing
    /// them. Exists so tampering can be simulated; any edit that skips
    /// recomputing digests will fail validation.
    pub fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Render the chain as tab-indented JSON.
    pub fn to_json(&self) -> Result<String, ChainError> {
        codec::to_json(self)
    }

    /// Parse a chain from its JSON form without validating it.
    pub fn from_json(json: &str) -> Result<Self, ChainError> {
        codec::from_json(json)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
