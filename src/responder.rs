use std::sync::Arc;

use chrono::Utc;
use teloxide::types::UserId;
use tracing::debug;

use crate::constants::{DEMO_ACTIVE_TRADES, DEMO_BALANCE_ETH, DEMO_PROFIT_ETH};
use crate::state::{SessionState, UserStore};
use crate::utils::{escape_markdown, format_address, HexGenerator, Validator};

/// Which keyboard a reply carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    Back,
}

/// A formatted reply: MarkdownV2 text plus an optional keyboard
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub menu: Option<Menu>,
}

impl Reply {
    fn with_menu(text: String, menu: Menu) -> Self {
        Self {
            text,
            menu: Some(menu),
        }
    }

    fn plain(text: String) -> Self {
        Self { text, menu: None }
    }
}

/// Maps user intents to replies, consulting and mutating per-user state.
///
/// Transport-agnostic: the store and the hex generator are injected, and the
/// handlers only forward intents and render the returned menus.
pub struct MenuResponder {
    store: Arc<UserStore>,
    hexgen: Arc<dyn HexGenerator>,
}

impl MenuResponder {
    pub fn new(store: Arc<UserStore>, hexgen: Arc<dyn HexGenerator>) -> Self {
        Self { store, hexgen }
    }

    /// Welcome message for /start. No state change.
    pub fn welcome(&self, first_name: &str) -> Reply {
        let text = format!(
            "👋 Welcome {}\\!\n\n\
            🤖 *ETH Trading Bot*\n\
            Start trading ETH with our automated bot\n\n\
            📊 *Available Commands:*\n\
            • /start \\- Show this menu\n\
            • /deposit \\- Deposit ETH\n\
            • /trade \\- Start trading\n\
            • /status \\- Check trading status\n\
            • /withdraw \\- Withdraw profits\n\
            • /help \\- Show help",
            escape_markdown(first_name)
        );
        Reply::with_menu(text, Menu::Main)
    }

    /// Deposit instructions around a fresh fake address. The address is not
    /// remembered; every call produces a new one.
    pub fn deposit(&self) -> Reply {
        let address = self.hexgen.address();
        let text = format!(
            "💰 *DEPOSIT ETH*\n\n\
            Send ETH to this address:\n\
            `{}`\n\n\
            📝 *Instructions:*\n\
            1\\. Copy the address above\n\
            2\\. Send ETH from your wallet\n\
            3\\. Minimum deposit: 0\\.1 ETH\n\
            4\\. Wait for 3 confirmations\n\n\
            ⚠️ *Only send ETH to this address\\!*\n\
            Do not send other tokens\\.",
            address
        );
        Reply::with_menu(text, Menu::Main)
    }

    /// Fake trade confirmation with a fresh order id. No state change.
    pub fn trade(&self) -> Reply {
        let order_id = self.hexgen.tx_hash();
        let text = format!(
            "🚀 *TRADE EXECUTED\\!*\n\n\
            ✅ Going into the ETH market now to make profit for you\\!\n\n\
            📊 *Trade Details:*\n\
            • Pair: ETH/USDT\n\
            • Direction: Long\n\
            • Entry: Market Price\n\
            • Leverage: 5x\n\
            • Risk: 2%\n\
            • Order ID: `{}`\n\n\
            ⏱️ The trade is monitored automatically\\.\n\
            You'll receive notifications on profit targets\\.",
            order_id
        );
        Reply::with_menu(text, Menu::Main)
    }

    /// Flip the trading flag and report the new state
    pub async fn toggle(&self, user: UserId) -> Reply {
        let is_trading = self.store.toggle_trading(user).await;
        debug!("User {} trading flag now {}", user, is_trading);

        let (status, detail) = if is_trading {
            (
                "✅ TRADING",
                "✅ Trading bot is now active and executing trades\\.",
            )
        } else {
            (
                "⏸️ STOPPED",
                "⏸️ Trading bot has been paused\\. No new trades will be executed\\.",
            )
        };
        let text = format!(
            "🔄 *TRADING STATUS UPDATED*\n\n\
            Current Status: *{}*\n\n\
            {}\n\n\
            Click again to toggle\\.",
            status, detail
        );
        Reply::with_menu(text, Menu::Main)
    }

    /// Prompt for a destination address and arm the intake flow
    pub async fn withdraw(&self, user: UserId) -> Reply {
        self.store
            .set_session(user, SessionState::AwaitingAddress)
            .await;

        let text = format!(
            "💸 *WITHDRAW PROFITS*\n\n\
            Send the ETH address where you want to receive your profits:\n\n\
            📝 *Format:* `0xYourEthereumAddress`\n\n\
            💰 *Pending Withdrawal:* `{} ETH`\n\
            ⏱️ *Processing Time:* 5\\-10 minutes\n\
            📦 *Network Fee:* `0.001 ETH`",
            DEMO_PROFIT_ETH
        );
        Reply::with_menu(text, Menu::Back)
    }

    /// Free-text intake. Returns `None` (no reply at all) unless the user is
    /// in the withdrawal flow. A valid address completes the flow; an
    /// invalid one re-prompts and leaves the flow armed.
    pub async fn handle_address(&self, user: UserId, text: &str) -> Option<Reply> {
        if self.store.session(user).await != SessionState::AwaitingAddress {
            return None;
        }

        match Validator::validate_eth_address(text) {
            Ok(()) => {
                self.store.set_session(user, SessionState::Idle).await;
                let tx_id = self.hexgen.tx_hash();
                let reply_text = format!(
                    "🎉 *WITHDRAWAL CONFIRMED\\!*\n\n\
                    ✅ Congratulations\\! {} ETH profit is coming your way\\!\n\n\
                    📬 *To Address:* `{}`\n\
                    💰 *Amount:* `{} ETH`\n\
                    📊 *Transaction ID:* `{}`\n\
                    ⏱️ *Estimated Arrival:* 5\\-10 minutes\n\n\
                    🔄 Refresh your wallet to see the balance\\.",
                    DEMO_PROFIT_ETH,
                    format_address(text),
                    DEMO_PROFIT_ETH,
                    tx_id
                );
                Some(Reply::with_menu(reply_text, Menu::Main))
            }
            Err(err) => {
                debug!("Rejected withdrawal address from {}: {}", user, err);
                Some(Reply::with_menu(
                    "⚠️ Please enter a valid ETH address \\(it should start with 0x \
                    and be 42 characters\\)\\."
                        .to_string(),
                    Menu::Back,
                ))
            }
        }
    }

    /// Status summary: fixed demo figures plus the live trading flag
    pub async fn status(&self, user: UserId) -> Reply {
        let indicator = if self.store.is_trading(user).await {
            "✅ ACTIVE"
        } else {
            "⏸️ PAUSED"
        };
        let text = format!(
            "📊 *TRADING STATUS*\n\n\
            🤖 *Bot Status:* {}\n\
            💰 *Balance:* `{} ETH`\n\
            📈 *Active Trades:* {}\n\
            💵 *Total Profit:* `{} ETH`\n\
            📅 *Last Trade:* `{}`\n\n\
            🔔 *Notifications:* Enabled\n\
            ⚡ *Response Time:* < 1s",
            indicator,
            DEMO_BALANCE_ETH,
            DEMO_ACTIVE_TRADES,
            DEMO_PROFIT_ETH,
            Utc::now().format("%Y-%m-%d %H:%M")
        );
        Reply::with_menu(text, Menu::Main)
    }

    /// Static help text. No keyboard, matching /help as a plain reply.
    pub fn help(&self) -> Reply {
        let text = "🤖 *ETH Trading Bot Help*\n\n\
            📋 *Commands:*\n\
            /start \\- Start the bot\n\
            /deposit \\- Deposit ETH\n\
            /trade \\- Execute trade\n\
            /status \\- Check status\n\
            /withdraw \\- Withdraw profits\n\
            /help \\- Show this message\n\n\
            📱 *How to use:*\n\
            1\\. Deposit ETH using the Deposit button\n\
            2\\. Start trading with the Trade button\n\
            3\\. Monitor your trades\n\
            4\\. Withdraw profits anytime\n\n\
            ⚠️ *Disclaimer:* This is a demo bot for educational purposes\\."
            .to_string();
        Reply::plain(text)
    }

    /// Back button: bare main-menu label with the keyboard reattached
    pub fn main_menu(&self) -> Reply {
        Reply::with_menu("Main Menu".to_string(), Menu::Main)
    }
}
