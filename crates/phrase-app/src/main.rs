use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backend;
mod cli;
mod commands;
mod controller;
mod events;
mod profile;
mod session;
mod state;
mod status;
mod ui;


use self::cli::{Cli, Command};

fn init_logging(json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new("phrase_bridge=info,phrase_translator=info,phrase_provider_google=info")
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = profile::load_config(cli.config.as_deref())?;

    init_logging(config.json_logs)?;

    // Only commands that reach the backend build it
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Translate {
            text,
            from,
            to,
            save,
            json,
        } => {
            let service = backend::build_service(&config.translator)?;
            commands::translate(&service, &config, text, from, to, save.as_deref(), json).await
        }
        Command::Detect { text } => {
            let service = backend::build_service(&config.translator)?;
            commands::detect(&service, text).await
        }
        Command::Languages { targets, search } => {
            commands::languages(targets, search.as_deref());
            Ok(())
        }
        Command::Check => {
            let service = backend::build_service(&config.translator)?;
            commands::check(&service).await;
            Ok(())
        }
        Command::Interactive => {
            let service = backend::build_service(&config.translator)?;
            commands::interactive(service, config).await
        }
        Command::InitConfig { path } => profile::write_config(&path, &config),
    }
}
