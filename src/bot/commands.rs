use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,

    #[command(description = "Deposit ETH")]
    Deposit,

    #[command(description = "Execute a trade")]
    Trade,

    #[command(description = "Check trading status")]
    Status,

    #[command(description = "Withdraw profits")]
    Withdraw,

    #[command(description = "Show help")]
    Help,
}
