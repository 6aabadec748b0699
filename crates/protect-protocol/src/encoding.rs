// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

//! Protocol encoding/decoding
//!
//! The deployed wire contract is bare protobuf, carried either as raw bytes
//! or as standard base64 text. Decoding is atomic: a payload that does not
//! parse as the top-level message fails as a whole, no partial value is
//! produced.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Protocol encoding/decoding
pub trait ProtocolEncoding: Sized {
    /// Error
    type Err: From<base64::DecodeError>;

    /// Encode to protobuf wire bytes
    fn encode(&self) -> Vec<u8>;

    /// Encode to standard base64 text
    fn encode_base64(&self) -> String {
        BASE64.encode(self.encode())
    }

    /// Decode protobuf wire bytes
    fn decode_protobuf(data: &[u8]) -> Result<Self, Self::Err>;

    /// Decode `payload`
    fn decode<T>(payload: T) -> Result<Self, Self::Err>
    where
        T: AsRef<[u8]>,
    {
        Self::decode_protobuf(payload.as_ref())
    }

    /// Decode base64 `payload`
    fn decode_base64<S>(payload: S) -> Result<Self, Self::Err>
    where
        S: AsRef<str>,
    {
        let data: Vec<u8> = BASE64.decode(payload.as_ref())?;
        Self::decode_protobuf(&data)
    }
}
