//! sq - SciQuest Heroes account CLI
//!
//! Drives the sign-up, sign-in and profile flows against the hosted
//! service and prints each outcome as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in, arriving from a "parent" landing link
//! sq --type parent sign-in --email mum@home.org --password secret1 --pretty
//!
//! # Two-panel student sign-up
//! sq student-signup --age 9 --parent-email mum@home.org \
//!     --first-name Ada --email ada@school.org --password rocket1 --captcha 8
//!
//! # Edit the signed-in student's profile
//! sq profile update --email ada@school.org --password rocket1 --age 10
//! ```

use sq_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    run(cli).await
}
