//! # Storage Module
//!
//! In-memory data structures for the vote chain. Nothing here touches
//! disk; a chain lives exactly as long as its owner.
//!
//! ## Architecture
//!
//! ```text
//! block.rs  - Block and Vote, digest computation, per-block verification
//! chain.rs  - Genesis, append, and whole-chain validation
//! codec.rs  - JSON export/import of a chain
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! (voter_id, choice) → Chain::append → Block::new → Vec<Block>
//!                                                      ↓
//!                                        Chain::validate / codec::to_json
//! ```

pub mod block;
pub mod chain;
pub mod codec;

pub use block::{compute_digest, Block, Vote};
pub use chain::Chain;
