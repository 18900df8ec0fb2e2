use crate::constants::ETH_ADDRESS_LEN;
use crate::errors::{BotError, Result};

pub struct Validator;

impl Validator {
    /// Validate a withdrawal destination address.
    ///
    /// Accepts exactly the strings that start with `0x` and are 42
    /// characters long. The tail is not required to be hex digits; the demo
    /// service only checks the shape.
    pub fn validate_eth_address(address: &str) -> Result<()> {
        if address.is_empty() {
            return Err(BotError::validation("Address cannot be empty"));
        }

        if !address.starts_with("0x") {
            return Err(BotError::validation("Address must start with 0x"));
        }

        if address.chars().count() != ETH_ADDRESS_LEN {
            return Err(BotError::validation(format!(
                "Address must be exactly {} characters",
                ETH_ADDRESS_LEN
            )));
        }

        Ok(())
    }
}
