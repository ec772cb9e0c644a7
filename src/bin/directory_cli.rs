// ABOUTME: directory-cli - command-line front end for the directory client SDK
// ABOUTME: Signs in, lists records, and shows one record with its resolved location
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Usage:
//! ```bash
//! # Establish a session
//! directory-cli login --username jane --password hunter2
//!
//! # List directory records
//! directory-cli list --skip 0 --limit 20
//!
//! # Show one record with its map coordinate
//! directory-cli show 42
//!
//! # Drop the session
//! directory-cli logout
//! ```

use anyhow::bail;
use clap::{Parser, Subcommand};
use directory_client::app::DirectoryApp;
use directory_client::errors::FetchOutcome;
use directory_client::logging::LoggingConfig;
use directory_client::models::Credentials;

#[derive(Parser)]
#[command(
    name = "directory-cli",
    about = "Directory client CLI",
    long_about = "Command-line tool for the user directory: login, listing, and per-record detail with geocoded location."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Log in and persist the session token
    Login {
        /// Account user name
        #[arg(long)]
        username: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Clear the persisted session
    Logout,

    /// List directory records
    List {
        /// Records to skip
        #[arg(long, default_value_t = 0)]
        skip: u32,

        /// Page size
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },

    /// Show one record with its resolved location
    Show {
        /// Record identifier
        id: String,
    },
}

/// Renders a failure variant as a user-facing message
fn failure_message<T>(outcome: &FetchOutcome<T>) -> String {
    match outcome {
        FetchOutcome::Ok(_) => unreachable!("failure_message called on Ok"),
        FetchOutcome::Unauthenticated => "not signed in or session rejected; run `directory-cli login`".into(),
        FetchOutcome::NotFound => "not found".into(),
        FetchOutcome::NetworkFailure(message) => format!("network failure: {message}"),
        FetchOutcome::ServerRejected(message) => format!("server rejected the request: {message}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    LoggingConfig::from_env().init()?;

    let cli = Cli::parse();
    let app = DirectoryApp::from_env()?;

    match cli.command {
        Command::Login { username, password } => {
            let outcome = app.sign_in(&Credentials::new(username, password)).await?;
            match outcome {
                FetchOutcome::Ok(()) => println!("signed in"),
                failure => bail!(failure_message(&failure)),
            }
        }
        Command::Logout => {
            app.sign_out()?;
            println!("signed out");
        }
        Command::List { skip, limit } => match app.list_users(skip, limit).await {
            FetchOutcome::Ok(users) => {
                if users.is_empty() {
                    println!("no records in this page");
                }
                for user in users {
                    println!("{}\t{}\t{}", user.id, user.name, user.email);
                }
            }
            failure => bail!(failure_message(&failure)),
        },
        Command::Show { id } => match app.get_detail(&id).await {
            FetchOutcome::Ok(detail) => {
                println!("id:      {}", detail.user.id);
                println!("name:    {}", detail.user.name);
                println!("email:   {}", detail.user.email);
                println!("address: {}", detail.user.address);
                match detail.coordinate {
                    Some(coordinate) => println!(
                        "location: {:.6}, {:.6}",
                        coordinate.latitude, coordinate.longitude
                    ),
                    None => println!("location: (address could not be geocoded)"),
                }
            }
            failure => bail!(failure_message(&failure)),
        },
    }

    Ok(())
}
