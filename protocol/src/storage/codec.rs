//! JSON export and import for chains.
//!
//! A chain is an array of block objects in chain order:
//!
//! ```text
//! [
//! 	{
//! 		"index": 0,
//! 		"Timestamp": "2026-01-01T00:00:00.000000000Z",
//! 		"data": { "cpf": "000.000.000-00", "vote": 0 },
//! 		"previousHash": "0",
//! 		"hash": "35b4d752…"
//! 	}
//! ]
//! ```
//!
//! Output is indented with one tab per level. Indentation carries no
//! meaning; any JSON with the same structure decodes to the same chain.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::chain::Chain;
use crate::config::JSON_INDENT;
use crate::error::ChainError;

/// Serialize `chain` as tab-indented JSON.
pub fn to_json(chain: &Chain) -> Result<String, ChainError> {
    let mut buf = Vec::with_capacity(256 * chain.len().max(1));
    {
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        chain.serialize(&mut serializer)?;
    }
    Ok(String::from_utf8(buf)?)
}

/// Parse a chain from JSON. The result is not validated.
pub fn from_json(json: &str) -> Result<Chain, ChainError> {
    Ok(serde_json::from_str(json)?)
}
