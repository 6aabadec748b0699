// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

//! Rule sources
//!
//! A rule source describes what the address in a whitelisting decision-table
//! cell is. It travels as an independently encoded message inside the cell's
//! byte string, tagged with a type. Cells may carry type tags newer than this
//! decoder; those must stay representable without error.

use prost::Message;
use serde::{Deserialize, Serialize};

use crate::proto::{ProtoRuleSource, ProtoRuleSourceInternalWallet, ProtoRuleSourceType};

/// Typed descriptor of the address held by a whitelisting cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSource {
    /// A wallet managed by the platform, identified by derivation path.
    ///
    /// `path` is `None` when the payload sub-message failed to parse: the
    /// tag survives, the detail does not.
    InternalWallet {
        /// Derivation path
        path: Option<String>,
    },
    /// A type tag this decoder version does not understand.
    Unknown {
        /// Raw wire type tag
        tag: i32,
    },
}

impl RuleSource {
    /// Decode a cell's byte string, best-effort.
    ///
    /// Returns `None` when the envelope does not parse; the caller drops the
    /// cell. A payload that does not parse degrades to a tag-only value
    /// instead. Neither case is an error.
    pub fn resolve(cell: &[u8]) -> Option<Self> {
        let source: ProtoRuleSource = match ProtoRuleSource::decode(cell) {
            Ok(source) => source,
            Err(e) => {
                tracing::debug!("dropping unparseable rule source cell: {e}");
                return None;
            }
        };
        Some(match ProtoRuleSourceType::try_from(source.r#type) {
            Ok(ProtoRuleSourceType::InternalWallet) => {
                match ProtoRuleSourceInternalWallet::decode(source.payload.as_slice()) {
                    Ok(wallet) => Self::InternalWallet {
                        path: Some(wallet.path),
                    },
                    Err(e) => {
                        tracing::debug!("unparseable internal wallet payload: {e}");
                        Self::InternalWallet { path: None }
                    }
                }
            }
            _ => Self::Unknown {
                tag: source.r#type,
            },
        })
    }

    /// Raw wire type tag
    pub fn tag(&self) -> i32 {
        match self {
            Self::InternalWallet { .. } => ProtoRuleSourceType::InternalWallet as i32,
            Self::Unknown { tag } => *tag,
        }
    }

    /// Encode back to a cell byte string
    pub(crate) fn to_cell(&self) -> Vec<u8> {
        let source: ProtoRuleSource = match self {
            Self::InternalWallet { path } => ProtoRuleSource {
                r#type: ProtoRuleSourceType::InternalWallet as i32,
                payload: match path {
                    Some(path) => ProtoRuleSourceInternalWallet { path: path.clone() }
                        .encode_to_vec(),
                    None => Vec::new(),
                },
            },
            Self::Unknown { tag } => ProtoRuleSource {
                r#type: *tag,
                payload: Vec::new(),
            },
        };
        source.encode_to_vec()
    }
}
