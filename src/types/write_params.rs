use super::transfer::Transfer;

/// Bolt parameters for one edge write, with every field already converted to
/// the representation the store keeps.
///
/// `value` stays a decimal string: transfer amounts are 256-bit and would be
/// truncated by Bolt's signed 64-bit integers. `block` and `timestamp` fit
/// and are stored as integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteParams {
    pub from: String,
    pub to: String,
    pub hash: String,
    pub value: String,
    pub block: i64,
    pub timestamp: i64,
}

impl From<&Transfer> for WriteParams {
    fn from(transfer: &Transfer) -> Self {
        Self {
            from: transfer.from.to_string(),
            to: transfer.to.to_string(),
            hash: transfer.hash.to_string(),
            value: transfer.value.to_string(),
            block: transfer.block as i64,
            timestamp: transfer.timestamp as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Transfer;
    use alloy::primitives::{address, b256, U256};

    #[test]
    fn value_keeps_full_precision() {
        // Larger than both u64 and f64 can represent exactly.
        let value: U256 = "123456789012345678901234567890".parse().unwrap();
        let transfer = Transfer {
            from: address!("00000000219ab540356cbb839cbe05303d7705fa"),
            to: address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
            hash: b256!("1111111111111111111111111111111111111111111111111111111111111111"),
            value,
            block: 1000,
            timestamp: 1_700_000_000,
        };

        let params = WriteParams::from(&transfer);

        assert_eq!(params.value, "123456789012345678901234567890");
        assert_eq!(params.block, 1000);
        assert_eq!(params.timestamp, 1_700_000_000);
    }

    #[test]
    fn addresses_and_hash_render_as_prefixed_hex() {
        let transfer = Transfer {
            from: address!("00000000219ab540356cbb839cbe05303d7705fa"),
            to: address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
            hash: b256!("00000000000000000000000000000000000000000000000000000000000000aa"),
            value: U256::from(1u64),
            block: 1,
            timestamp: 1,
        };

        let params = WriteParams::from(&transfer);

        assert!(params.from.starts_with("0x"));
        assert!(params.to.starts_with("0x"));
        assert_eq!(
            params.hash,
            "0x00000000000000000000000000000000000000000000000000000000000000aa"
        );
    }
}
