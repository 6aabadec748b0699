// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

use k256::pkcs8::DecodePublicKey;
use k256::PublicKey;

use super::{
    AddressWhitelistingLine, AddressWhitelistingRules, ContractAddressWhitelistingRules,
    DecodedRulesContainer, GroupThreshold, RuleGroup, RuleSource, RuleUser, SequentialThresholds,
    TransactionRuleColumn, TransactionRuleDetails, TransactionRuleLine, TransactionRules,
};
use crate::proto::{
    ProtoAddressWhitelistingLine, ProtoAddressWhitelistingRules, ProtoBlockchain, ProtoColumnType,
    ProtoContractAddressWhitelistingRules, ProtoGroup, ProtoGroupThreshold, ProtoRuleDomain,
    ProtoRuleSubDomain, ProtoRulesContainer, ProtoSequentialThresholds, ProtoTransactionRules,
    ProtoTransactionRulesColumn, ProtoTransactionRulesDetails, ProtoTransactionRulesLine,
    ProtoUser, ProtoUserRole,
};

/// Render a wire enum value as its symbolic name, or as its decimal string
/// when the value is outside the known range.
macro_rules! enum_name {
    ($enum:ty, $raw:expr) => {
        <$enum>::try_from($raw)
            .map(|value| value.as_str_name().to_string())
            .unwrap_or_else(|_| $raw.to_string())
    };
}

/// Inverse of [`enum_name!`]; unknown names fall back to their decimal form.
macro_rules! enum_value {
    ($enum:ty, $name:expr) => {
        <$enum>::from_str_name($name)
            .map(|value| value as i32)
            .or_else(|| $name.parse().ok())
            .unwrap_or(0)
    };
}

fn parse_public_key(pem: &str) -> Option<PublicKey> {
    if pem.is_empty() {
        return None;
    }
    match PublicKey::from_public_key_pem(pem) {
        Ok(key) => Some(key),
        Err(e) => {
            tracing::debug!("unparseable user public key, continuing without: {e}");
            None
        }
    }
}

impl From<ProtoUser> for RuleUser {
    fn from(user: ProtoUser) -> Self {
        Self {
            public_key: parse_public_key(&user.public_key),
            id: user.id,
            public_key_pem: user.public_key,
            roles: user
                .roles
                .into_iter()
                .map(|role| enum_name!(ProtoUserRole, role))
                .collect(),
        }
    }
}

impl From<&RuleUser> for ProtoUser {
    fn from(user: &RuleUser) -> Self {
        Self {
            id: user.id.clone(),
            public_key: user.public_key_pem.clone(),
            roles: user
                .roles
                .iter()
                .map(|role| enum_value!(ProtoUserRole, role))
                .collect(),
        }
    }
}

impl From<ProtoGroup> for RuleGroup {
    fn from(group: ProtoGroup) -> Self {
        Self {
            id: group.id,
            user_ids: group.user_ids,
        }
    }
}

impl From<&RuleGroup> for ProtoGroup {
    fn from(group: &RuleGroup) -> Self {
        Self {
            id: group.id.clone(),
            user_ids: group.user_ids.clone(),
        }
    }
}

impl From<ProtoSequentialThresholds> for SequentialThresholds {
    fn from(thresholds: ProtoSequentialThresholds) -> Self {
        Self {
            thresholds: thresholds
                .thresholds
                .into_iter()
                .map(|threshold| GroupThreshold {
                    group_id: threshold.group_id,
                    minimum_signatures: threshold.minimum_signatures,
                })
                .collect(),
        }
    }
}

impl From<&SequentialThresholds> for ProtoSequentialThresholds {
    fn from(thresholds: &SequentialThresholds) -> Self {
        Self {
            thresholds: thresholds
                .thresholds
                .iter()
                .map(|threshold| ProtoGroupThreshold {
                    group_id: threshold.group_id.clone(),
                    minimum_signatures: threshold.minimum_signatures,
                })
                .collect(),
        }
    }
}

fn parallel_thresholds(
    thresholds: Vec<ProtoSequentialThresholds>,
) -> Vec<SequentialThresholds> {
    thresholds.into_iter().map(SequentialThresholds::from).collect()
}

fn proto_parallel_thresholds(
    thresholds: &[SequentialThresholds],
) -> Vec<ProtoSequentialThresholds> {
    thresholds.iter().map(ProtoSequentialThresholds::from).collect()
}

impl From<ProtoAddressWhitelistingRules> for AddressWhitelistingRules {
    fn from(rules: ProtoAddressWhitelistingRules) -> Self {
        Self {
            currency: rules.currency,
            network: rules.network,
            parallel_thresholds: parallel_thresholds(rules.parallel_thresholds),
            lines: rules
                .lines
                .into_iter()
                .map(AddressWhitelistingLine::from)
                .collect(),
        }
    }
}

impl From<&AddressWhitelistingRules> for ProtoAddressWhitelistingRules {
    fn from(rules: &AddressWhitelistingRules) -> Self {
        Self {
            currency: rules.currency.clone(),
            network: rules.network.clone(),
            parallel_thresholds: proto_parallel_thresholds(&rules.parallel_thresholds),
            lines: rules.lines.iter().map(ProtoAddressWhitelistingLine::from).collect(),
        }
    }
}

impl From<ProtoAddressWhitelistingLine> for AddressWhitelistingLine {
    fn from(line: ProtoAddressWhitelistingLine) -> Self {
        Self {
            // Best-effort: cells that do not parse are dropped, not replaced
            cells: line
                .cells
                .iter()
                .filter_map(|cell| RuleSource::resolve(cell))
                .collect(),
            parallel_thresholds: parallel_thresholds(line.parallel_thresholds),
        }
    }
}

impl From<&AddressWhitelistingLine> for ProtoAddressWhitelistingLine {
    fn from(line: &AddressWhitelistingLine) -> Self {
        Self {
            cells: line.cells.iter().map(RuleSource::to_cell).collect(),
            parallel_thresholds: proto_parallel_thresholds(&line.parallel_thresholds),
        }
    }
}

impl From<ProtoContractAddressWhitelistingRules> for ContractAddressWhitelistingRules {
    fn from(rules: ProtoContractAddressWhitelistingRules) -> Self {
        Self {
            blockchain: enum_name!(ProtoBlockchain, rules.blockchain),
            network: rules.network,
            parallel_thresholds: parallel_thresholds(rules.parallel_thresholds),
        }
    }
}

impl From<&ContractAddressWhitelistingRules> for ProtoContractAddressWhitelistingRules {
    fn from(rules: &ContractAddressWhitelistingRules) -> Self {
        Self {
            blockchain: enum_value!(ProtoBlockchain, &rules.blockchain),
            network: rules.network.clone(),
            parallel_thresholds: proto_parallel_thresholds(&rules.parallel_thresholds),
        }
    }
}

impl From<ProtoTransactionRules> for TransactionRules {
    fn from(rules: ProtoTransactionRules) -> Self {
        Self {
            key: rules.key,
            columns: rules
                .columns
                .into_iter()
                .map(|column| TransactionRuleColumn {
                    kind: enum_name!(ProtoColumnType, column.r#type),
                })
                .collect(),
            lines: rules
                .lines
                .into_iter()
                .map(|line| TransactionRuleLine {
                    cells: line.cells,
                    parallel_thresholds: parallel_thresholds(line.parallel_thresholds),
                })
                .collect(),
            details: rules.details.map(|details| TransactionRuleDetails {
                domain: enum_name!(ProtoRuleDomain, details.domain),
                sub_domain: enum_name!(ProtoRuleSubDomain, details.sub_domain),
            }),
        }
    }
}

impl From<&TransactionRules> for ProtoTransactionRules {
    fn from(rules: &TransactionRules) -> Self {
        Self {
            key: rules.key.clone(),
            columns: rules
                .columns
                .iter()
                .map(|column| ProtoTransactionRulesColumn {
                    r#type: enum_value!(ProtoColumnType, &column.kind),
                })
                .collect(),
            lines: rules
                .lines
                .iter()
                .map(|line| ProtoTransactionRulesLine {
                    cells: line.cells.clone(),
                    parallel_thresholds: proto_parallel_thresholds(&line.parallel_thresholds),
                })
                .collect(),
            details: rules.details.as_ref().map(|details| ProtoTransactionRulesDetails {
                domain: enum_value!(ProtoRuleDomain, &details.domain),
                sub_domain: enum_value!(ProtoRuleSubDomain, &details.sub_domain),
            }),
        }
    }
}

impl From<ProtoRulesContainer> for DecodedRulesContainer {
    fn from(container: ProtoRulesContainer) -> Self {
        Self {
            min_distinct_user_signatures: container.min_distinct_user_signatures,
            min_distinct_group_signatures: container.min_distinct_group_signatures,
            enforced_rules_hash: container.enforced_rules_hash,
            timestamp: container.timestamp,
            min_commitment_signatures: container.min_commitment_signatures,
            engines: container.engines,
            hsm_slot: container.hsm_slot,
            users: container.users.into_iter().map(RuleUser::from).collect(),
            groups: container.groups.into_iter().map(RuleGroup::from).collect(),
            address_whitelisting_rules: container
                .address_whitelisting_rules
                .into_iter()
                .map(AddressWhitelistingRules::from)
                .collect(),
            contract_address_whitelisting_rules: container
                .contract_address_whitelisting_rules
                .into_iter()
                .map(ContractAddressWhitelistingRules::from)
                .collect(),
            transaction_rules: container
                .transaction_rules
                .into_iter()
                .map(TransactionRules::from)
                .collect(),
        }
    }
}

impl From<&DecodedRulesContainer> for ProtoRulesContainer {
    fn from(container: &DecodedRulesContainer) -> Self {
        Self {
            min_distinct_user_signatures: container.min_distinct_user_signatures,
            min_distinct_group_signatures: container.min_distinct_group_signatures,
            enforced_rules_hash: container.enforced_rules_hash.clone(),
            timestamp: container.timestamp,
            min_commitment_signatures: container.min_commitment_signatures,
            engines: container.engines.clone(),
            hsm_slot: container.hsm_slot,
            users: container.users.iter().map(ProtoUser::from).collect(),
            groups: container.groups.iter().map(ProtoGroup::from).collect(),
            address_whitelisting_rules: container
                .address_whitelisting_rules
                .iter()
                .map(ProtoAddressWhitelistingRules::from)
                .collect(),
            contract_address_whitelisting_rules: container
                .contract_address_whitelisting_rules
                .iter()
                .map(ProtoContractAddressWhitelistingRules::from)
                .collect(),
            transaction_rules: container
                .transaction_rules
                .iter()
                .map(ProtoTransactionRules::from)
                .collect(),
        }
    }
}
