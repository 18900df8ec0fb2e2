use std::sync::Arc;

use regex::Regex;
use teloxide::types::UserId;

use eth_trading_bot::responder::{Menu, MenuResponder};
use eth_trading_bot::state::UserStore;
use eth_trading_bot::utils::{HexGenerator, RandomHexGenerator};

/// Deterministic generator that repeats one character
struct FixedHexGenerator(char);

impl HexGenerator for FixedHexGenerator {
    fn hex_string(&self, len: usize) -> String {
        std::iter::repeat(self.0).take(len).collect()
    }
}

fn fixed_responder() -> MenuResponder {
    MenuResponder::new(Arc::new(UserStore::new()), Arc::new(FixedHexGenerator('a')))
}

fn random_responder() -> MenuResponder {
    MenuResponder::new(Arc::new(UserStore::new()), Arc::new(RandomHexGenerator))
}

fn address_pattern() -> Regex {
    Regex::new("0x[0-9a-f]{40}").unwrap()
}

#[test]
fn test_deposit_contains_fresh_address() {
    let responder = random_responder();
    let reply = responder.deposit();

    assert!(address_pattern().is_match(&reply.text));
    assert_eq!(reply.menu, Some(Menu::Main));
}

#[test]
fn test_consecutive_deposits_differ() {
    let responder = random_responder();
    let pattern = address_pattern();

    let first = pattern.find(&responder.deposit().text).unwrap().as_str().to_string();
    let second = pattern.find(&responder.deposit().text).unwrap().as_str().to_string();

    assert_ne!(first, second);
}

#[test]
fn test_trade_contains_hex_identifier() {
    let responder = random_responder();
    let reply = responder.trade();

    assert!(reply.text.contains("TRADE EXECUTED"));
    assert!(address_pattern().is_match(&reply.text));
}

#[test]
fn test_welcome_and_help_are_deterministic() {
    let responder = fixed_responder();

    assert_eq!(responder.welcome("Alice").text, responder.welcome("Alice").text);
    assert_eq!(responder.help().text, responder.help().text);
    assert!(responder.help().menu.is_none());
}

#[tokio::test]
async fn test_first_toggle_activates_trading() {
    let responder = fixed_responder();
    let user = UserId(1);

    let reply = responder.toggle(user).await;
    assert!(reply.text.contains("✅ TRADING"));
    assert!(!reply.text.contains("STOPPED"));

    let status = responder.status(user).await;
    assert!(status.text.contains("ACTIVE"));
}

#[tokio::test]
async fn test_toggle_pairs_restore_state() {
    let responder = fixed_responder();
    let user = UserId(2);

    assert!(responder.status(user).await.text.contains("PAUSED"));

    responder.toggle(user).await;
    assert!(responder.status(user).await.text.contains("ACTIVE"));

    let reply = responder.toggle(user).await;
    assert!(reply.text.contains("⏸️ STOPPED"));
    assert!(responder.status(user).await.text.contains("PAUSED"));
}

#[tokio::test]
async fn test_withdraw_flow_completes_on_valid_address() {
    let responder = fixed_responder();
    let user = UserId(3);

    let prompt = responder.withdraw(user).await;
    assert_eq!(prompt.menu, Some(Menu::Back));

    let address = format!("0x{}", "b".repeat(40));
    let reply = responder.handle_address(user, &address).await.unwrap();

    assert!(reply.text.contains("WITHDRAWAL CONFIRMED"));
    assert!(reply.text.contains("0xbbbbbbbb...bbbbbbbb"));
    assert!(reply.text.contains(&format!("0x{}", "a".repeat(64))));
    assert_eq!(reply.menu, Some(Menu::Main));

    // Flow is done; unrelated text is ignored again
    assert!(responder.handle_address(user, "hello").await.is_none());
}

#[tokio::test]
async fn test_invalid_address_reprompts_without_leaving_flow() {
    let responder = fixed_responder();
    let user = UserId(4);

    responder.withdraw(user).await;

    let too_short = responder.handle_address(user, "0xabc").await.unwrap();
    assert!(too_short.text.contains("valid ETH address"));
    assert_eq!(too_short.menu, Some(Menu::Back));

    let no_prefix = "c".repeat(42);
    assert!(responder.handle_address(user, &no_prefix).await.is_some());

    // Still armed: a valid address completes the flow after any number of retries
    let address = format!("0x{}", "d".repeat(40));
    let done = responder.handle_address(user, &address).await.unwrap();
    assert!(done.text.contains("WITHDRAWAL CONFIRMED"));
}

#[tokio::test]
async fn test_text_ignored_when_idle() {
    let responder = fixed_responder();
    let user = UserId(5);

    assert!(responder.handle_address(user, "0xabc").await.is_none());
    let address = format!("0x{}", "e".repeat(40));
    assert!(responder.handle_address(user, &address).await.is_none());
}
