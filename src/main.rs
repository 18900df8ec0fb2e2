use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eth_trading_bot::{
    bot::TelegramBot,
    responder::MenuResponder,
    state::UserStore,
    utils::{Config, HexGenerator, RandomHexGenerator},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);
    config.validate()?;

    let store = Arc::new(UserStore::new());
    let hexgen: Arc<dyn HexGenerator> = Arc::new(RandomHexGenerator);
    let responder = Arc::new(MenuResponder::new(store, hexgen));

    if config.use_webhook() {
        info!("Configured for webhook delivery");
    }

    let bot = TelegramBot::new(config, responder);
    bot.run().await?;

    Ok(())
}
