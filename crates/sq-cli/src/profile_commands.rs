use clap::Subcommand;

/// Profile commands sign in first; the session lives for one invocation.
#[derive(Subcommand, Debug)]
pub(crate) enum ProfileCommands {
    /// Show the profile page
    Show {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Edit profile fields (omitted fields keep their current value)
    Update {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        age: Option<String>,
        #[arg(long)]
        parent_email: Option<String>,
    },
}
