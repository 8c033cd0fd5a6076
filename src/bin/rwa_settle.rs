//! Oracle host entry point: settles one mint request and prints the
//! ABI-encoded result.

use clap::Parser;
use std::process::ExitCode;

use rwa_settlement::env::{setup_tracing, Env};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let env = Env::parse();
    setup_tracing(&env.log_level);

    let client = match env.build_client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build client");
            return ExitCode::FAILURE;
        }
    };

    match client.settlement().execute(&env.mint_request()).await {
        Ok(result) => {
            println!("{}", result.to_hex());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Settlement failed");
            ExitCode::FAILURE
        }
    }
}
