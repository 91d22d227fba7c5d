//! Record encoding
//!
//! Records are stored as tab-indented JSON followed by a single newline.
//! Field order is whatever the record's `Serialize` impl produces.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

/// Serialize a record to its on-disk bytes
pub fn encode<T: Serialize + ?Sized>(record: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    record.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Deserialize a record from on-disk bytes
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}
