//! The supported-version table served in the public state.

use std::collections::BTreeMap;

use crate::order::{TYPE_CANCEL_ORDER, TYPE_ORDER};
use crate::request::REQUEST_CODES;
use crate::transactions::*;

/// Available versions for each type code, as served in `txVersion`.
pub fn default_tx_versions() -> BTreeMap<u16, Vec<u8>> {
    BTreeMap::from([
        (TYPE_ISSUE, vec![2]),
        (TYPE_TRANSFER, vec![2]),
        (TYPE_REISSUE, vec![2]),
        (TYPE_BURN, vec![2]),
        (TYPE_LEASE, vec![2]),
        (TYPE_LEASE_CANCEL, vec![2]),
        (TYPE_CREATE_ALIAS, vec![2]),
        (TYPE_MASS_TRANSFER, vec![1]),
        (TYPE_DATA, vec![1]),
        (TYPE_SET_SCRIPT, vec![1]),
        (TYPE_SPONSORED_FEE, vec![1]),
        (TYPE_SET_ASSET_SCRIPT, vec![1]),
        (TYPE_INVOKE_SCRIPT, vec![1]),
        (REQUEST_CODES[0], vec![1]),
        (REQUEST_CODES[1], vec![1]),
        (TYPE_ORDER, vec![1, 2, 3]),
        (TYPE_CANCEL_ORDER, vec![1]),
    ])
}

/// The newest supported version for a type code; 1 for unknown codes.
pub fn latest_version(code: u16) -> u8 {
    default_tx_versions()
        .get(&code)
        .and_then(|versions| versions.iter().max().copied())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_signable_code_is_listed() {
        let table = default_tx_versions();
        for code in [3u16, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14, 15, 16, 1001, 1002, 1003, 1004] {
            assert!(table.contains_key(&code), "missing code {code}");
        }
    }

    #[test]
    fn test_latest_version() {
        assert_eq!(latest_version(TYPE_ORDER), 3);
        assert_eq!(latest_version(TYPE_TRANSFER), 2);
        assert_eq!(latest_version(999), 1);
    }
}
