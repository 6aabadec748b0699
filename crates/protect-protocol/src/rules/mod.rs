// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

//! Governance rules container
//!
//! The decoded governance policy document of an organization: users, groups,
//! whitelisting decision tables and transaction rule tables, together with
//! the signature thresholds that gate asset movement. Every decode call
//! produces a fresh, fully owned tree; nothing borrows the input buffer.

use k256::PublicKey;
use prost::Message;
use serde::{Deserialize, Serialize};

mod proto;
mod source;

pub use self::source::RuleSource;
use crate::encoding::ProtocolEncoding;
use crate::proto::ProtoRulesContainer;
use crate::Error;

/// Decoded governance rules container.
///
/// Collection fields keep wire order exactly: rules are matched line by line
/// in this order by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodedRulesContainer {
    /// Minimum number of distinct users that must sign
    pub min_distinct_user_signatures: u32,
    /// Minimum number of distinct groups that must sign
    pub min_distinct_group_signatures: u32,
    /// Content hash of the enforced rule set, opaque to this library
    pub enforced_rules_hash: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Minimum number of commitment signatures
    pub min_commitment_signatures: u32,
    /// Identities of the engines that enforce this container
    pub engines: Vec<String>,
    /// HSM slot holding the organization keys
    pub hsm_slot: u32,
    pub users: Vec<RuleUser>,
    pub groups: Vec<RuleGroup>,
    pub address_whitelisting_rules: Vec<AddressWhitelistingRules>,
    pub contract_address_whitelisting_rules: Vec<ContractAddressWhitelistingRules>,
    pub transaction_rules: Vec<TransactionRules>,
}

/// A user known to the rules container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleUser {
    pub id: String,
    /// PEM-encoded PKIX public key, as it travels on the wire
    pub public_key_pem: String,
    /// Parsed public key; `None` when the PEM field is empty or unparseable
    #[serde(skip)]
    pub public_key: Option<PublicKey>,
    /// Role names in wire order, rendered as the schema's symbolic names
    pub roles: Vec<String>,
}

/// A signing group: an identifier and its member users, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroup {
    pub id: String,
    pub user_ids: Vec<String>,
}

/// An ordered ladder of group thresholds. Later entries apply once the
/// earlier ones are satisfied. Sibling ladders in a `parallel_thresholds`
/// list are alternatives: any one of them suffices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequentialThresholds {
    pub thresholds: Vec<GroupThreshold>,
}

/// Minimum signature count required from one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupThreshold {
    pub group_id: String,
    pub minimum_signatures: u32,
}

/// Address whitelisting decision table for one currency/network pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressWhitelistingRules {
    pub currency: String,
    pub network: String,
    pub parallel_thresholds: Vec<SequentialThresholds>,
    pub lines: Vec<AddressWhitelistingLine>,
}

/// One row of an address whitelisting table.
///
/// Cells whose embedded rule source does not parse are dropped from `cells`,
/// never replaced by a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressWhitelistingLine {
    pub cells: Vec<RuleSource>,
    pub parallel_thresholds: Vec<SequentialThresholds>,
}

/// Whitelisting rule for contract addresses on one blockchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddressWhitelistingRules {
    /// Blockchain, rendered as the schema's symbolic name
    pub blockchain: String,
    pub network: String,
    pub parallel_thresholds: Vec<SequentialThresholds>,
}

/// Generic transaction rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRules {
    /// Rule-table identifier
    pub key: String,
    pub columns: Vec<TransactionRuleColumn>,
    pub lines: Vec<TransactionRuleLine>,
    pub details: Option<TransactionRuleDetails>,
}

/// Column of a transaction rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRuleColumn {
    /// Column type, rendered as the schema's symbolic name
    pub kind: String,
}

/// One row of a transaction rule table.
///
/// Unlike address whitelisting lines, cells here are raw strings: no rule
/// source decoding is applied to transaction rule cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRuleLine {
    pub cells: Vec<String>,
    pub parallel_thresholds: Vec<SequentialThresholds>,
}

/// Domain classification of a transaction rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRuleDetails {
    pub domain: String,
    pub sub_domain: String,
}

impl ProtocolEncoding for DecodedRulesContainer {
    type Err = Error;

    fn encode(&self) -> Vec<u8> {
        let container: ProtoRulesContainer = self.into();
        container.encode_to_vec()
    }

    fn decode_protobuf(data: &[u8]) -> Result<Self, Self::Err> {
        let container: ProtoRulesContainer = ProtoRulesContainer::decode(data)?;
        Ok(Self::from(container))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{
        ProtoAddressWhitelistingLine, ProtoAddressWhitelistingRules, ProtoBlockchain,
        ProtoColumnType, ProtoContractAddressWhitelistingRules, ProtoGroup, ProtoGroupThreshold,
        ProtoRuleDomain, ProtoRuleSource, ProtoRuleSourceInternalWallet, ProtoRuleSourceType,
        ProtoRuleSubDomain, ProtoRulesContainer, ProtoSequentialThresholds,
        ProtoTransactionRules, ProtoTransactionRulesColumn, ProtoTransactionRulesDetails,
        ProtoTransactionRulesLine, ProtoUser, ProtoUserRole,
    };

    // secp256k1 generator point as a PKIX public key
    const USER_PEM: &str = "-----BEGIN PUBLIC KEY-----\n\
MFYwEAYHKoZIzj0CAQYFK4EEAAoDQgAEeb5mfvncu6xVoGKVzocLBwKb/NstzijZ\n\
WfKBWxb4F5hIOtp3JqPEZV2k+/wOEQio/Re0SKaFVBmcR9CP+xDUuA==\n\
-----END PUBLIC KEY-----\n";

    fn internal_wallet_cell(path: &str) -> Vec<u8> {
        ProtoRuleSource {
            r#type: ProtoRuleSourceType::InternalWallet as i32,
            payload: ProtoRuleSourceInternalWallet {
                path: path.to_string(),
            }
            .encode_to_vec(),
        }
        .encode_to_vec()
    }

    fn sample_container() -> ProtoRulesContainer {
        ProtoRulesContainer {
            min_distinct_user_signatures: 2,
            min_distinct_group_signatures: 1,
            enforced_rules_hash: String::from("9f2c"),
            timestamp: 1_700_000_000_000,
            min_commitment_signatures: 1,
            engines: vec![String::from("engine-a"), String::from("engine-b")],
            hsm_slot: 3,
            users: vec![ProtoUser {
                id: String::from("u1"),
                public_key: String::from(USER_PEM),
                roles: vec![
                    ProtoUserRole::Admin as i32,
                    ProtoUserRole::Operator as i32,
                ],
            }],
            groups: vec![ProtoGroup {
                id: String::from("g1"),
                user_ids: vec![String::from("u1"), String::from("u2")],
            }],
            address_whitelisting_rules: vec![ProtoAddressWhitelistingRules {
                currency: String::from("ETH"),
                network: String::from("mainnet"),
                parallel_thresholds: vec![ProtoSequentialThresholds {
                    thresholds: vec![ProtoGroupThreshold {
                        group_id: String::from("g1"),
                        minimum_signatures: 1,
                    }],
                }],
                lines: vec![ProtoAddressWhitelistingLine {
                    cells: vec![internal_wallet_cell("m/44'/60'/0'/0/0")],
                    parallel_thresholds: Vec::new(),
                }],
            }],
            contract_address_whitelisting_rules: vec![ProtoContractAddressWhitelistingRules {
                blockchain: ProtoBlockchain::Ethereum as i32,
                network: String::from("mainnet"),
                parallel_thresholds: Vec::new(),
            }],
            transaction_rules: vec![ProtoTransactionRules {
                key: String::from("tx-rules-1"),
                columns: vec![
                    ProtoTransactionRulesColumn {
                        r#type: ProtoColumnType::Initiator as i32,
                    },
                    ProtoTransactionRulesColumn {
                        r#type: ProtoColumnType::AmountRange as i32,
                    },
                ],
                lines: vec![ProtoTransactionRulesLine {
                    cells: vec![String::from("u1"), String::from("0-1000")],
                    parallel_thresholds: vec![ProtoSequentialThresholds {
                        thresholds: vec![
                            ProtoGroupThreshold {
                                group_id: String::from("g1"),
                                minimum_signatures: 1,
                            },
                            ProtoGroupThreshold {
                                group_id: String::from("g2"),
                                minimum_signatures: 2,
                            },
                        ],
                    }],
                }],
                details: Some(ProtoTransactionRulesDetails {
                    domain: ProtoRuleDomain::AssetTransfer as i32,
                    sub_domain: ProtoRuleSubDomain::Wallet as i32,
                }),
            }],
        }
    }

    #[test]
    fn test_decode_container() {
        let container =
            DecodedRulesContainer::decode(sample_container().encode_to_vec()).unwrap();

        assert_eq!(container.min_distinct_user_signatures, 2);
        assert_eq!(container.min_distinct_group_signatures, 1);
        assert_eq!(container.enforced_rules_hash, "9f2c");
        assert_eq!(container.timestamp, 1_700_000_000_000);
        assert_eq!(container.min_commitment_signatures, 1);
        assert_eq!(container.engines, ["engine-a", "engine-b"]);
        assert_eq!(container.hsm_slot, 3);

        assert_eq!(container.groups.len(), 1);
        assert_eq!(container.groups[0].id, "g1");
        assert_eq!(container.groups[0].user_ids, ["u1", "u2"]);

        assert_eq!(container.address_whitelisting_rules.len(), 1);
        let awr = &container.address_whitelisting_rules[0];
        assert_eq!(awr.currency, "ETH");
        assert_eq!(awr.network, "mainnet");
        assert_eq!(awr.parallel_thresholds.len(), 1);
        assert_eq!(awr.parallel_thresholds[0].thresholds[0].group_id, "g1");
        assert_eq!(awr.lines.len(), 1);
        assert_eq!(
            awr.lines[0].cells,
            [RuleSource::InternalWallet {
                path: Some(String::from("m/44'/60'/0'/0/0")),
            }]
        );
    }

    #[test]
    fn test_user_roles_rendered_in_order() {
        let container =
            DecodedRulesContainer::decode(sample_container().encode_to_vec()).unwrap();
        assert_eq!(container.users.len(), 1);
        let user = &container.users[0];
        assert_eq!(user.id, "u1");
        assert_eq!(user.roles, ["USER_ROLE_ADMIN", "USER_ROLE_OPERATOR"]);
        assert!(user.public_key.is_some());
        assert_eq!(user.public_key_pem, USER_PEM);
    }

    #[test]
    fn test_unknown_role_rendered_as_number() {
        let mut proto = sample_container();
        proto.users[0].roles.push(42);
        let container = DecodedRulesContainer::decode(proto.encode_to_vec()).unwrap();
        assert_eq!(
            container.users[0].roles,
            ["USER_ROLE_ADMIN", "USER_ROLE_OPERATOR", "42"]
        );
    }

    #[test]
    fn test_user_without_pem_has_no_key() {
        let mut proto = sample_container();
        proto.users[0].public_key = String::new();
        let container = DecodedRulesContainer::decode(proto.encode_to_vec()).unwrap();
        assert!(container.users[0].public_key.is_none());
    }

    #[test]
    fn test_user_with_garbage_pem_has_no_key() {
        let mut proto = sample_container();
        proto.users[0].public_key = String::from("-----BEGIN PUBLIC KEY-----\nbm9wZQ==\n-----END PUBLIC KEY-----\n");
        let container = DecodedRulesContainer::decode(proto.encode_to_vec()).unwrap();
        let user = &container.users[0];
        assert!(user.public_key.is_none());
        // The PEM text itself survives untouched
        assert!(user.public_key_pem.contains("bm9wZQ=="));
    }

    #[test]
    fn test_malformed_cell_dropped() {
        let mut proto = sample_container();
        proto.address_whitelisting_rules[0].lines[0]
            .cells
            .insert(0, vec![0x05]);
        let container = DecodedRulesContainer::decode(proto.encode_to_vec()).unwrap();
        let line = &container.address_whitelisting_rules[0].lines[0];
        // Two raw cells on the wire, one decoded cell
        assert_eq!(line.cells.len(), 1);
        assert_eq!(
            line.cells[0],
            RuleSource::InternalWallet {
                path: Some(String::from("m/44'/60'/0'/0/0")),
            }
        );
    }

    #[test]
    fn test_transaction_rules_keep_raw_cells() {
        let container =
            DecodedRulesContainer::decode(sample_container().encode_to_vec()).unwrap();
        assert_eq!(container.transaction_rules.len(), 1);
        let rules = &container.transaction_rules[0];
        assert_eq!(rules.key, "tx-rules-1");
        assert_eq!(rules.columns[0].kind, "COLUMN_TYPE_INITIATOR");
        assert_eq!(rules.columns[1].kind, "COLUMN_TYPE_AMOUNT_RANGE");
        assert_eq!(rules.lines[0].cells, ["u1", "0-1000"]);
        assert_eq!(rules.lines[0].parallel_thresholds[0].thresholds.len(), 2);
        let details = rules.details.as_ref().unwrap();
        assert_eq!(details.domain, "RULE_DOMAIN_ASSET_TRANSFER");
        assert_eq!(details.sub_domain, "RULE_SUB_DOMAIN_WALLET");
    }

    #[test]
    fn test_contract_address_whitelisting() {
        let container =
            DecodedRulesContainer::decode(sample_container().encode_to_vec()).unwrap();
        assert_eq!(container.contract_address_whitelisting_rules.len(), 1);
        let rule = &container.contract_address_whitelisting_rules[0];
        assert_eq!(rule.blockchain, "BLOCKCHAIN_ETHEREUM");
        assert_eq!(rule.network, "mainnet");
    }

    #[test]
    fn test_decode_base64_matches_decode() {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine as _;

        let data: Vec<u8> = sample_container().encode_to_vec();
        let from_bytes = DecodedRulesContainer::decode(&data).unwrap();
        let from_base64 =
            DecodedRulesContainer::decode_base64(STANDARD.encode(&data)).unwrap();
        assert_eq!(from_bytes, from_base64);
    }

    #[test]
    fn test_decode_invalid_base64() {
        let err = DecodedRulesContainer::decode_base64("not base64!").unwrap_err();
        assert!(matches!(err, Error::Base64(_)));
    }

    #[test]
    fn test_decode_invalid_bytes() {
        // Valid base64, but field number 0 is invalid on the wire
        let err = DecodedRulesContainer::decode_base64("BQ==").unwrap_err();
        assert!(matches!(err, Error::Proto(_)));

        let err = DecodedRulesContainer::decode([0x05]).unwrap_err();
        assert!(matches!(err, Error::Proto(_)));
    }

    #[test]
    fn test_empty_container() {
        let container = DecodedRulesContainer::decode::<&[u8]>(&[]).unwrap();
        assert_eq!(container, DecodedRulesContainer::default());
        assert!(container.users.is_empty());
        assert!(container.transaction_rules.is_empty());
    }

    #[test]
    fn test_encode_round_trip() {
        let container =
            DecodedRulesContainer::decode(sample_container().encode_to_vec()).unwrap();
        let decoded = DecodedRulesContainer::decode(container.encode()).unwrap();
        assert_eq!(container, decoded);

        let decoded = DecodedRulesContainer::decode_base64(container.encode_base64()).unwrap();
        assert_eq!(container, decoded);
    }

    #[test]
    fn test_serialize_to_json() {
        let container =
            DecodedRulesContainer::decode(sample_container().encode_to_vec()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&container).unwrap();
        assert_eq!(json["users"][0]["roles"][0], "USER_ROLE_ADMIN");
        assert_eq!(
            json["contract_address_whitelisting_rules"][0]["blockchain"],
            "BLOCKCHAIN_ETHEREUM"
        );
    }
}
