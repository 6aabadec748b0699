// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

//! Wire message definitions.
//!
//! Written by hand with the `prost` derive macros instead of `prost-build`:
//! the field numbers below are the contract with the deployed rules engine
//! and must never be renumbered.

pub mod rules;
pub mod signatures;

pub use self::rules::{
    AddressWhitelistingLine as ProtoAddressWhitelistingLine,
    AddressWhitelistingRules as ProtoAddressWhitelistingRules, Blockchain as ProtoBlockchain,
    ColumnType as ProtoColumnType,
    ContractAddressWhitelistingRules as ProtoContractAddressWhitelistingRules,
    Group as ProtoGroup, GroupThreshold as ProtoGroupThreshold, RuleDomain as ProtoRuleDomain,
    RuleSource as ProtoRuleSource, RuleSourceInternalWallet as ProtoRuleSourceInternalWallet,
    RuleSourceType as ProtoRuleSourceType, RuleSubDomain as ProtoRuleSubDomain,
    RulesContainer as ProtoRulesContainer, SequentialThresholds as ProtoSequentialThresholds,
    TransactionRules as ProtoTransactionRules,
    TransactionRulesColumn as ProtoTransactionRulesColumn,
    TransactionRulesDetails as ProtoTransactionRulesDetails,
    TransactionRulesLine as ProtoTransactionRulesLine, User as ProtoUser, UserRole as ProtoUserRole,
};
pub use self::signatures::{
    UserSignature as ProtoUserSignature, UserSignatures as ProtoUserSignatures,
};
