use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use angebot_client::ClientError;
use cli::Commands;
use commands::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    angebot_observability::init();

    let mut ctx = Context::from_cli(&args)?;
    let result = dispatch(&mut ctx, &args.command).await;

    // A rejected token ends the session; wrong login credentials do not.
    let signing_in = matches!(args.command, Commands::Login(_) | Commands::Register(_));
    if let Err(err) = &result {
        let rejected = err
            .downcast_ref::<ClientError>()
            .is_some_and(ClientError::is_unauthorized);
        if rejected && !signing_in {
            if let Err(e) = ctx.sessions.teardown() {
                tracing::warn!(error = %e, "failed to clear session");
            }
            eprintln!("Sitzung ungültig oder abgelaufen. Bitte mit `angebot login` neu anmelden.");
        }
    }

    result
}

async fn dispatch(ctx: &mut Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Register(args) => commands::account::register(ctx, args).await,
        Commands::Login(args) => commands::account::login(ctx, args).await,
        Commands::Logout => commands::account::logout(ctx),
        Commands::Dashboard => commands::dashboard::show(ctx).await,
        Commands::Customers { action } => commands::customers::run(ctx, action).await,
        Commands::Settings { action } => commands::settings::run(ctx, action).await,
        Commands::RateCard { action } => commands::rate_card::run(ctx, action).await,
        Commands::Offers { action } => commands::offers::run(ctx, action).await,
        Commands::Quote {
            measurements,
            offline,
            prices,
        } => commands::quote::run(ctx, measurements, *offline, prices).await,
    }
}
