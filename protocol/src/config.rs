//! # Protocol Configuration & Constants
//!
//! Every fixed value the chain depends on lives here. Two implementations
//! that disagree on any of these will produce different digests for the
//! same logical chain, so treat them as frozen.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// Version of the block format and digest preimage layout.
pub const PROTOCOL_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Genesis
// ---------------------------------------------------------------------------

/// Sentinel stored as the genesis block's `previous_digest`. There is no
/// predecessor, so this is a literal marker rather than a real digest.
pub const GENESIS_PREVIOUS_DIGEST: &str = "0";

/// Voter identifier carried by the genesis block.
pub const GENESIS_VOTER_ID: &str = "000.000.000-00";

/// Choice carried by the genesis block.
pub const GENESIS_CHOICE: i64 = 0;

/// Position of the genesis block.
pub const GENESIS_POSITION: u64 = 0;

// ---------------------------------------------------------------------------
// Digest
// ---------------------------------------------------------------------------

/// Name of the block digest algorithm.
pub const DIGEST_ALGORITHM: &str = "SHA-256";

/// Length of a hex-encoded digest (32 bytes, two chars per byte).
pub const DIGEST_HEX_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Indentation unit for pretty-printed chain exports.
pub const JSON_INDENT: &[u8] = b"\t";
