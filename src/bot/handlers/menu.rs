use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::responder::Menu;

/// Menu creator for all bot keyboards
pub struct MenuCreator;

impl MenuCreator {
    /// Create the five-button main menu
    pub fn create_main_menu() -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(vec![
            vec![
                InlineKeyboardButton::callback("💰 Deposit", "deposit"),
                InlineKeyboardButton::callback("📈 Trade", "trade"),
            ],
            vec![
                InlineKeyboardButton::callback("⏸️ Stop/Start", "toggle_trade"),
                InlineKeyboardButton::callback("💸 Withdraw", "withdraw"),
            ],
            vec![InlineKeyboardButton::callback("📊 Status", "status")],
        ])
    }

    /// Create the single back button shown during the withdrawal flow
    pub fn create_back_menu() -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            "↩️ Back", "back",
        )]])
    }

    /// Resolve a responder menu descriptor to its keyboard
    pub fn keyboard_for(menu: Menu) -> InlineKeyboardMarkup {
        match menu {
            Menu::Main => Self::create_main_menu(),
            Menu::Back => Self::create_back_menu(),
        }
    }
}
