//! Detection of changes to security-sensitive wallet fields.
//!
//! Only a closed set of fields matters here: the ones that decide where funds
//! are paid out or whose identity a wallet is bound to. Editing anything else
//! (a label, a limit) is not reported.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Flat field-name to value view of a wallet used as the diff input.
pub type WalletSnapshot = HashMap<String, Option<String>>;

/// Wallet attributes whose change must be audited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalField {
    Phone,
    Card,
    OwnerFullName,
    NetworkId,
    NetworkTypeId,
    Address,
    AccountId,
    Username,
    ExchangeUid,
}

impl CriticalField {
    /// Every critical field in reporting order.
    pub const ALL: [CriticalField; 9] = [
        CriticalField::Phone,
        CriticalField::Card,
        CriticalField::OwnerFullName,
        CriticalField::NetworkId,
        CriticalField::NetworkTypeId,
        CriticalField::Address,
        CriticalField::AccountId,
        CriticalField::Username,
        CriticalField::ExchangeUid,
    ];

    /// Snapshot key of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            CriticalField::Phone => "phone",
            CriticalField::Card => "card",
            CriticalField::OwnerFullName => "owner_full_name",
            CriticalField::NetworkId => "network_id",
            CriticalField::NetworkTypeId => "network_type_id",
            CriticalField::Address => "address",
            CriticalField::AccountId => "account_id",
            CriticalField::Username => "username",
            CriticalField::ExchangeUid => "exchange_uid",
        }
    }

    /// Looks a field up by its snapshot key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

impl Display for CriticalField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected difference between two snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: CriticalField,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

/// Collapses a missing or empty value to `None`.
pub fn normalize(value: Option<&str>) -> Option<String> {
    match value {
        None | Some("") => None,
        Some(value) => Some(value.to_string()),
    }
}

fn lookup<'a>(snapshot: &'a WalletSnapshot, field: CriticalField) -> Option<&'a str> {
    snapshot.get(field.as_str()).and_then(|value| value.as_deref())
}

/// Compares two snapshots over the critical fields.
///
/// `None`, a missing key and `""` are the same "absent" value, so clearing a
/// field in a form that posts empty strings does not produce a change against
/// a stored `NULL`. The result follows [`CriticalField::ALL`] order.
pub fn detect_critical_changes(old: &WalletSnapshot, new: &WalletSnapshot) -> Vec<FieldChange> {
    CriticalField::ALL
        .into_iter()
        .filter_map(|field| {
            let old_value = normalize(lookup(old, field));
            let new_value = normalize(lookup(new, field));
            (old_value != new_value).then_some(FieldChange {
                field,
                old_value,
                new_value,
            })
        })
        .collect()
}

pub fn has_critical_changes(changes: &[FieldChange]) -> bool {
    !changes.is_empty()
}

/// Keeps only entries keyed by a critical field. Values are passed through
/// as-is, no normalization is applied.
pub fn filter_critical_changes<V: Clone>(all: &HashMap<String, V>) -> HashMap<String, V> {
    all.iter()
        .filter(|(key, _)| CriticalField::from_key(key).is_some())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, Option<&str>)]) -> WalletSnapshot {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.map(str::to_string)))
            .collect()
    }

    #[test]
    fn empty_null_and_missing_are_equal() {
        let old = snapshot(&[("phone", Some("123")), ("username", Some(""))]);
        let new = snapshot(&[("phone", Some("123")), ("username", None)]);

        assert!(detect_critical_changes(&old, &new).is_empty());
        assert_eq!(detect_critical_changes(&old, &WalletSnapshot::new()).len(), 1);

        let blank_card = snapshot(&[("card", Some(""))]);
        assert!(detect_critical_changes(&blank_card, &WalletSnapshot::new()).is_empty());
    }

    #[test]
    fn reports_changed_address() {
        let old = snapshot(&[("address", Some("A"))]);
        let new = snapshot(&[("address", Some("B"))]);

        assert_eq!(
            detect_critical_changes(&old, &new),
            vec![FieldChange {
                field: CriticalField::Address,
                old_value: Some("A".to_string()),
                new_value: Some("B".to_string()),
            }]
        );
    }

    #[test]
    fn set_and_cleared_values_are_reported() {
        let old = snapshot(&[("card", None), ("exchange_uid", Some("uid-1"))]);
        let new = snapshot(&[("card", Some("4111")), ("exchange_uid", Some(""))]);

        let changes = detect_critical_changes(&old, &new);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].field, CriticalField::Card);
        assert_eq!(changes[0].old_value, None);
        assert_eq!(changes[1].field, CriticalField::ExchangeUid);
        assert_eq!(changes[1].new_value, None);
    }

    #[test]
    fn non_critical_fields_are_ignored() {
        let old = snapshot(&[("label", Some("main")), ("monthly_limit", Some("10"))]);
        let new = snapshot(&[("label", Some("spare")), ("monthly_limit", Some("20"))]);

        assert!(detect_critical_changes(&old, &new).is_empty());
    }

    #[test]
    fn output_follows_fixed_field_order() {
        let old = snapshot(&[
            ("exchange_uid", Some("1")),
            ("phone", Some("1")),
            ("network_id", Some("1")),
        ]);
        let new = snapshot(&[
            ("exchange_uid", Some("2")),
            ("phone", Some("2")),
            ("network_id", Some("2")),
        ]);

        let fields: Vec<_> = detect_critical_changes(&old, &new)
            .into_iter()
            .map(|change| change.field)
            .collect();

        assert_eq!(
            fields,
            vec![
                CriticalField::Phone,
                CriticalField::NetworkId,
                CriticalField::ExchangeUid
            ]
        );
    }

    #[test]
    fn has_changes_matches_list_emptiness() {
        assert!(!has_critical_changes(&[]));
        assert!(has_critical_changes(&[FieldChange {
            field: CriticalField::Username,
            old_value: None,
            new_value: Some("bob".to_string()),
        }]));
    }

    #[test]
    fn filter_keeps_only_whitelisted_keys_untouched() {
        let all: HashMap<String, Option<String>> = [
            ("address", Some("")),
            ("account_id", None),
            ("label", Some("x")),
            ("Phone", Some("1")),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.map(str::to_string)))
        .collect();

        let filtered = filter_critical_changes(&all);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get("address"), Some(&Some(String::new())));
        assert_eq!(filtered.get("account_id"), Some(&None));
        assert!(
            filtered
                .keys()
                .all(|key| CriticalField::from_key(key).is_some())
        );
    }

    #[test]
    fn normalize_collapses_empty_values() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some(" ")), Some(" ".to_string()));
    }
}
