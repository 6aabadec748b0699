// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use super::{RuleUserSignature, RuleUserSignatures};
use crate::proto::{ProtoUserSignature, ProtoUserSignatures};

impl From<ProtoUserSignature> for RuleUserSignature {
    fn from(signature: ProtoUserSignature) -> Self {
        Self {
            user_id: signature.user_id,
            signature: BASE64.encode(signature.signature),
        }
    }
}

impl From<&RuleUserSignature> for ProtoUserSignature {
    fn from(signature: &RuleUserSignature) -> Self {
        Self {
            user_id: signature.user_id.clone(),
            // A non-base64 domain value encodes as empty signature bytes
            signature: BASE64.decode(&signature.signature).unwrap_or_default(),
        }
    }
}

impl From<ProtoUserSignatures> for RuleUserSignatures {
    fn from(signatures: ProtoUserSignatures) -> Self {
        Self(
            signatures
                .signatures
                .into_iter()
                .map(RuleUserSignature::from)
                .collect(),
        )
    }
}

impl From<&RuleUserSignatures> for ProtoUserSignatures {
    fn from(signatures: &RuleUserSignatures) -> Self {
        Self {
            signatures: signatures.0.iter().map(ProtoUserSignature::from).collect(),
        }
    }
}
