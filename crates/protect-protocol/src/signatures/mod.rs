// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

//! User signatures
//!
//! A detached, flat list of (user, signature) pairs over a rules container.
//! Unlike the embedded rule-source cells, every entry of the wire message is
//! mapped unconditionally; there is no best-effort dropping here.

use core::ops::Deref;

use prost::Message;
use serde::{Deserialize, Serialize};

mod proto;

use crate::encoding::ProtocolEncoding;
use crate::proto::ProtoUserSignatures;
use crate::Error;

/// One user's signature, with the raw bytes re-encoded as standard base64
/// text for transport-safe handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleUserSignature {
    pub user_id: String,
    /// Base64 text of the wire signature bytes
    pub signature: String,
}

/// List of user signatures, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleUserSignatures(Vec<RuleUserSignature>);

impl RuleUserSignatures {
    pub fn into_inner(self) -> Vec<RuleUserSignature> {
        self.0
    }
}

impl Deref for RuleUserSignatures {
    type Target = [RuleUserSignature];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<RuleUserSignature>> for RuleUserSignatures {
    fn from(signatures: Vec<RuleUserSignature>) -> Self {
        Self(signatures)
    }
}

impl IntoIterator for RuleUserSignatures {
    type Item = RuleUserSignature;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl ProtocolEncoding for RuleUserSignatures {
    type Err = Error;

    fn encode(&self) -> Vec<u8> {
        let signatures: ProtoUserSignatures = self.into();
        signatures.encode_to_vec()
    }

    fn decode_protobuf(data: &[u8]) -> Result<Self, Self::Err> {
        let signatures: ProtoUserSignatures = ProtoUserSignatures::decode(data)?;
        Ok(Self::from(signatures))
    }
}
