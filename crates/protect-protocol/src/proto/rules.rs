// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

//! Rules container wire schema.

/// Top-level governance rules container.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RulesContainer {
    #[prost(uint32, tag = "1")]
    pub min_distinct_user_signatures: u32,
    #[prost(uint32, tag = "2")]
    pub min_distinct_group_signatures: u32,
    #[prost(string, tag = "3")]
    pub enforced_rules_hash: ::prost::alloc::string::String,
    /// Milliseconds since the Unix epoch.
    #[prost(int64, tag = "4")]
    pub timestamp: i64,
    #[prost(uint32, tag = "5")]
    pub min_commitment_signatures: u32,
    #[prost(string, repeated, tag = "6")]
    pub engines: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(uint32, tag = "7")]
    pub hsm_slot: u32,
    #[prost(message, repeated, tag = "8")]
    pub users: ::prost::alloc::vec::Vec<User>,
    #[prost(message, repeated, tag = "9")]
    pub groups: ::prost::alloc::vec::Vec<Group>,
    #[prost(message, repeated, tag = "10")]
    pub address_whitelisting_rules: ::prost::alloc::vec::Vec<AddressWhitelistingRules>,
    #[prost(message, repeated, tag = "11")]
    pub contract_address_whitelisting_rules:
        ::prost::alloc::vec::Vec<ContractAddressWhitelistingRules>,
    #[prost(message, repeated, tag = "12")]
    pub transaction_rules: ::prost::alloc::vec::Vec<TransactionRules>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct User {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// PEM-encoded PKIX public key.
    #[prost(string, tag = "2")]
    pub public_key: ::prost::alloc::string::String,
    #[prost(enumeration = "UserRole", repeated, tag = "3")]
    pub roles: ::prost::alloc::vec::Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Group {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub user_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// An ordered ladder of group thresholds, satisfied in sequence.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SequentialThresholds {
    #[prost(message, repeated, tag = "1")]
    pub thresholds: ::prost::alloc::vec::Vec<GroupThreshold>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GroupThreshold {
    #[prost(string, tag = "1")]
    pub group_id: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub minimum_signatures: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddressWhitelistingRules {
    #[prost(string, tag = "1")]
    pub currency: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub network: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub parallel_thresholds: ::prost::alloc::vec::Vec<SequentialThresholds>,
    #[prost(message, repeated, tag = "4")]
    pub lines: ::prost::alloc::vec::Vec<AddressWhitelistingLine>,
}

/// One row of an address whitelisting decision table. Each cell carries an
/// independently encoded [`RuleSource`] message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddressWhitelistingLine {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub cells: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(message, repeated, tag = "2")]
    pub parallel_thresholds: ::prost::alloc::vec::Vec<SequentialThresholds>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractAddressWhitelistingRules {
    #[prost(enumeration = "Blockchain", tag = "1")]
    pub blockchain: i32,
    #[prost(string, tag = "2")]
    pub network: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub parallel_thresholds: ::prost::alloc::vec::Vec<SequentialThresholds>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionRules {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub columns: ::prost::alloc::vec::Vec<TransactionRulesColumn>,
    #[prost(message, repeated, tag = "3")]
    pub lines: ::prost::alloc::vec::Vec<TransactionRulesLine>,
    #[prost(message, optional, tag = "4")]
    pub details: ::core::option::Option<TransactionRulesDetails>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionRulesColumn {
    #[prost(enumeration = "ColumnType", tag = "1")]
    pub r#type: i32,
}

/// One row of a transaction rule table. Cells are raw strings, not encoded
/// rule sources.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionRulesLine {
    #[prost(string, repeated, tag = "1")]
    pub cells: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "2")]
    pub parallel_thresholds: ::prost::alloc::vec::Vec<SequentialThresholds>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionRulesDetails {
    #[prost(enumeration = "RuleDomain", tag = "1")]
    pub domain: i32,
    #[prost(enumeration = "RuleSubDomain", tag = "2")]
    pub sub_domain: i32,
}

/// Typed descriptor embedded opaquely in a whitelisting cell. The payload is
/// a further encoded message whose schema depends on `type`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RuleSource {
    #[prost(enumeration = "RuleSourceType", tag = "1")]
    pub r#type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
}

/// Payload schema for `RULE_SOURCE_TYPE_INTERNAL_WALLET`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RuleSourceInternalWallet {
    #[prost(string, tag = "1")]
    pub path: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum UserRole {
    Unspecified = 0,
    Admin = 1,
    Operator = 2,
    SharedOwner = 3,
    Watcher = 4,
}

impl UserRole {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            UserRole::Unspecified => "USER_ROLE_UNSPECIFIED",
            UserRole::Admin => "USER_ROLE_ADMIN",
            UserRole::Operator => "USER_ROLE_OPERATOR",
            UserRole::SharedOwner => "USER_ROLE_SHARED_OWNER",
            UserRole::Watcher => "USER_ROLE_WATCHER",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "USER_ROLE_UNSPECIFIED" => Some(Self::Unspecified),
            "USER_ROLE_ADMIN" => Some(Self::Admin),
            "USER_ROLE_OPERATOR" => Some(Self::Operator),
            "USER_ROLE_SHARED_OWNER" => Some(Self::SharedOwner),
            "USER_ROLE_WATCHER" => Some(Self::Watcher),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Blockchain {
    Unspecified = 0,
    Bitcoin = 1,
    Ethereum = 2,
    Polygon = 3,
}

impl Blockchain {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Blockchain::Unspecified => "BLOCKCHAIN_UNSPECIFIED",
            Blockchain::Bitcoin => "BLOCKCHAIN_BITCOIN",
            Blockchain::Ethereum => "BLOCKCHAIN_ETHEREUM",
            Blockchain::Polygon => "BLOCKCHAIN_POLYGON",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "BLOCKCHAIN_UNSPECIFIED" => Some(Self::Unspecified),
            "BLOCKCHAIN_BITCOIN" => Some(Self::Bitcoin),
            "BLOCKCHAIN_ETHEREUM" => Some(Self::Ethereum),
            "BLOCKCHAIN_POLYGON" => Some(Self::Polygon),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ColumnType {
    Unspecified = 0,
    Initiator = 1,
    Destination = 2,
    AmountRange = 3,
    Currency = 4,
}

impl ColumnType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ColumnType::Unspecified => "COLUMN_TYPE_UNSPECIFIED",
            ColumnType::Initiator => "COLUMN_TYPE_INITIATOR",
            ColumnType::Destination => "COLUMN_TYPE_DESTINATION",
            ColumnType::AmountRange => "COLUMN_TYPE_AMOUNT_RANGE",
            ColumnType::Currency => "COLUMN_TYPE_CURRENCY",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "COLUMN_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
            "COLUMN_TYPE_INITIATOR" => Some(Self::Initiator),
            "COLUMN_TYPE_DESTINATION" => Some(Self::Destination),
            "COLUMN_TYPE_AMOUNT_RANGE" => Some(Self::AmountRange),
            "COLUMN_TYPE_CURRENCY" => Some(Self::Currency),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RuleDomain {
    Unspecified = 0,
    AssetTransfer = 1,
    Governance = 2,
}

impl RuleDomain {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            RuleDomain::Unspecified => "RULE_DOMAIN_UNSPECIFIED",
            RuleDomain::AssetTransfer => "RULE_DOMAIN_ASSET_TRANSFER",
            RuleDomain::Governance => "RULE_DOMAIN_GOVERNANCE",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "RULE_DOMAIN_UNSPECIFIED" => Some(Self::Unspecified),
            "RULE_DOMAIN_ASSET_TRANSFER" => Some(Self::AssetTransfer),
            "RULE_DOMAIN_GOVERNANCE" => Some(Self::Governance),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RuleSubDomain {
    Unspecified = 0,
    Wallet = 1,
    Whitelist = 2,
}

impl RuleSubDomain {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            RuleSubDomain::Unspecified => "RULE_SUB_DOMAIN_UNSPECIFIED",
            RuleSubDomain::Wallet => "RULE_SUB_DOMAIN_WALLET",
            RuleSubDomain::Whitelist => "RULE_SUB_DOMAIN_WHITELIST",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "RULE_SUB_DOMAIN_UNSPECIFIED" => Some(Self::Unspecified),
            "RULE_SUB_DOMAIN_WALLET" => Some(Self::Wallet),
            "RULE_SUB_DOMAIN_WHITELIST" => Some(Self::Whitelist),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RuleSourceType {
    Unspecified = 0,
    InternalWallet = 1,
    ExternalAddress = 2,
}

impl RuleSourceType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            RuleSourceType::Unspecified => "RULE_SOURCE_TYPE_UNSPECIFIED",
            RuleSourceType::InternalWallet => "RULE_SOURCE_TYPE_INTERNAL_WALLET",
            RuleSourceType::ExternalAddress => "RULE_SOURCE_TYPE_EXTERNAL_ADDRESS",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "RULE_SOURCE_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
            "RULE_SOURCE_TYPE_INTERNAL_WALLET" => Some(Self::InternalWallet),
            "RULE_SOURCE_TYPE_EXTERNAL_ADDRESS" => Some(Self::ExternalAddress),
            _ => None,
        }
    }
}
