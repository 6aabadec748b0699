// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

//! Wire protocol for the Protect governance rules engine.
//!
//! Decodes the protobuf-encoded governance "rules container" (users, groups,
//! whitelisting and transaction rule tables, signature thresholds) and the
//! detached user-signature list into an owned, immutable domain model.

#![forbid(unsafe_code)]

mod encoding;
mod error;
mod proto;
pub mod rules;
pub mod signatures;

pub use self::encoding::ProtocolEncoding;
pub use self::error::Error;
pub use self::rules::{
    AddressWhitelistingLine, AddressWhitelistingRules, ContractAddressWhitelistingRules,
    DecodedRulesContainer, GroupThreshold, RuleGroup, RuleSource, RuleUser, SequentialThresholds,
    TransactionRuleColumn, TransactionRuleDetails, TransactionRuleLine, TransactionRules,
};
pub use self::signatures::{RuleUserSignature, RuleUserSignatures};
