//! Identifier shapes and the fixed figures shown in demo replies.

/// Hex characters in a generated deposit address, after the 0x prefix
pub const ADDRESS_HEX_CHARS: usize = 40;

/// Hex characters in a generated transaction id, after the 0x prefix
pub const TX_HASH_HEX_CHARS: usize = 64;

/// Full length of an accepted withdrawal address, 0x prefix included
pub const ETH_ADDRESS_LEN: usize = 42;

/// Balance shown in status replies
pub const DEMO_BALANCE_ETH: f64 = 15.5;

/// Open-trade count shown in status replies
pub const DEMO_ACTIVE_TRADES: u32 = 3;

/// Profit figure shown in status and withdrawal replies
pub const DEMO_PROFIT_ETH: f64 = 10.0;

/// Port the webhook listener binds to when PORT is not set
pub const DEFAULT_WEBHOOK_PORT: u16 = 8443;
