use crate::profile_commands::ProfileCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Create an account and its profile
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in and resolve the dashboard to open
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Print the Google sign-in URL
    Google,

    /// Send a password reset email
    ResetPassword {
        #[arg(long)]
        email: String,
    },

    /// Student onboarding (both panels in one go)
    StudentSignup {
        /// Age in years, 5 to 12
        #[arg(long)]
        age: String,
        #[arg(long)]
        parent_email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Answer to "What is 5 + 3?"
        #[arg(long)]
        captcha: String,
    },

    /// Student profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Sign out and forget the local account state
    SignOut,
}
