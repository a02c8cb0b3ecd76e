use std::process::ExitCode;

use clap::Parser;

use commands::Args;
use models::settings::{Settings, SettingsOverrides};
use session::store::SessionStore;
use utils::errors::AppError;
use utils::logger::Logger;
use views::AppContext;

mod commands;
mod fantasy;
mod http;
mod models;
mod session;
mod utils;
mod views;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, AppError> {
    let overrides = SettingsOverrides {
        api_base: args.api_base.clone(),
        session_file: args.session_file.clone(),
        log_level: args.verbose.then(|| "debug".to_string()),
    };
    let settings = Settings::load(&overrides)?;
    Logger::set_level(settings.level()?);

    let session = if args.ephemeral {
        SessionStore::in_memory()
    } else {
        SessionStore::open(&settings.session_path())?
    };
    crate::logger!(DEBUG, "[GRIDCAP] Using API at {}", settings.api_base);

    let mut ctx = AppContext::new(&settings.api_base, session);
    let status = commands::execute(args.command, &mut ctx).await;

    if let Some(success) = &status.success {
        println!("{success}");
    }
    match &status.error {
        Some(error) => {
            eprintln!("{error}");
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}
