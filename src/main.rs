mod body;
mod cli;
mod config;
mod github;
mod http;
mod logger;

use clap::Parser;
use cli::{Args, Token, USAGE};
use config::{Config, TOKEN_ENV};
use std::{env, process::ExitCode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = logger::init() {
        println!("❌ Error: {:#}", err);
        return ExitCode::FAILURE;
    }

    let Some(token) = Token::resolve(args.token, env::var(TOKEN_ENV).ok()) else {
        println!("⚠️  GitHub token required!");
        println!();
        println!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let config = Config::load();
    log::debug!("publishing {} to {}/{}", config.tag, config.owner, config.repo);

    match github::publish(&config, token).await {
        Ok(release) => {
            println!("✅ Release created successfully!");
            println!("🔗 URL: {}", release.url());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &anyhow::Error) {
    if let Some(http::Error::Api { status, body }) = err.downcast_ref::<http::Error>() {
        println!("❌ Failed to create release: {}", status);
        println!("Response: {}", body);
    } else if err.downcast_ref::<body::Error>().is_some() {
        println!("❌ {:#}", err);
    } else {
        println!("❌ Error: {:#}", err);
    }
}
