// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # votechain - Core Library
//!
//! An append-only hash chain for recording votes in tamper-evident order.
//! Each block binds a `(voter_id, choice)` pair to a SHA-256 digest and to
//! the digest of the block before it, so editing, dropping, or reordering
//! any entry after the fact is caught by re-walking the chain.
//!
//! This is a single-process, single-writer, in-memory ledger primitive.
//! No consensus, no networking, no persistence, no signatures.
//!
//! ## Architecture
//!
//! - **config** - Genesis sentinels and format constants.
//! - **crypto** - SHA-256 digest helpers.
//! - **storage** - Blocks, the chain, and the JSON boundary.
//! - **error** - The crate-wide [`ChainError`](error::ChainError).
//!
//! ## Quick start
//!
//! ```
//! use votechain::Chain;
//!
//! let mut chain = Chain::new();
//! chain.append("000.000.000-00", 22).unwrap();
//! chain.append("000.000.000-01", 13).unwrap();
//!
//! assert_eq!(chain.len(), 3);
//! assert!(chain.validate());
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod storage;

pub use error::ChainError;
pub use storage::{Block, Chain, Vote};
