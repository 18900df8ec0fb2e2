use rand::Rng;

use crate::constants::{ADDRESS_HEX_CHARS, TX_HASH_HEX_CHARS};

const HEX_CHARSET: &[u8] = b"0123456789abcdef";

/// Source of random hex strings for fake addresses and transaction ids.
///
/// Injectable so tests can substitute a deterministic generator.
pub trait HexGenerator: Send + Sync {
    /// Produce `len` lowercase hex characters
    fn hex_string(&self, len: usize) -> String;

    /// A fresh address-shaped string: 0x followed by 40 hex characters
    fn address(&self) -> String {
        format!("0x{}", self.hex_string(ADDRESS_HEX_CHARS))
    }

    /// A fresh transaction-id-shaped string: 0x followed by 64 hex characters
    fn tx_hash(&self) -> String {
        format!("0x{}", self.hex_string(TX_HASH_HEX_CHARS))
    }
}

/// Thread-local RNG backed generator used in production
pub struct RandomHexGenerator;

impl HexGenerator for RandomHexGenerator {
    fn hex_string(&self, len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| HEX_CHARSET[rng.gen_range(0..HEX_CHARSET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_shape() {
        let address = RandomHexGenerator.address();
        assert_eq!(address.len(), 42);
        assert!(address.starts_with("0x"));
        assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tx_hash_shape() {
        let tx = RandomHexGenerator.tx_hash();
        assert_eq!(tx.len(), 66);
        assert!(tx.starts_with("0x"));
    }

    #[test]
    fn test_fresh_values_differ() {
        assert_ne!(RandomHexGenerator.address(), RandomHexGenerator.address());
    }
}
