//! Command dispatch: one flow per invocation, printed as JSON.

use crate::commands::Commands;
use crate::profile_commands::ProfileCommands;
use crate::{Cli, CliError, CliErrorResult, logger};

use sq_auth::{AuthFlows, ProfileScreen, ProfileView};
use sq_client::{AuthApi, ServiceClient};
use sq_config::{Config, LocalState};
use sq_core::{AccountForm, AccountTypeHint, FlowOutcome, ProfileForm};

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use log::{error, warn};
use serde::Serialize;
use tokio::sync::broadcast;

type Flows = AuthFlows<ServiceClient, ServiceClient>;

/// What a command prints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Outcome(FlowOutcome),
    Profile(ProfileView),
}

impl Reply {
    /// Error banners exit non-zero; everything else succeeded.
    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Outcome(outcome) if outcome.is_error())
    }

    pub fn render(&self, pretty: bool) -> CliErrorResult<String> {
        let output = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        output.map_err(CliError::output)
    }
}

/// Load config, start logging, run the command and print its reply.
pub async fn run(cli: Cli) -> ExitCode {
    let (config, config_dir) = match setup(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let reply = execute(&cli, &config, &config_dir).await;

    match reply.render(cli.pretty) {
        Ok(json) => {
            println!("{json}");
            if reply.is_failure() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn setup(cli: &Cli) -> CliErrorResult<(Config, PathBuf)> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => Config::config_dir()?,
    };

    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    logger::initialize(&config.logging, &config_dir)?;
    config.log_summary();

    Ok((config, config_dir))
}

/// Run one command against the configured service.
///
/// The profile provisioner listens for the whole invocation and is
/// drained before returning. Student sign-up writes its own row, so it
/// runs without one.
pub async fn execute(cli: &Cli, config: &Config, config_dir: &Path) -> Reply {
    let client = Arc::new(ServiceClient::from_config(&config.service));
    let flows = AuthFlows::new(
        Arc::clone(&client),
        Arc::clone(&client),
        config.site.clone(),
        config_dir,
    )
    .with_oauth_provider(&config.service.oauth_provider);

    if let Some(raw) = cli.r#type.as_deref()
        && AccountTypeHint::parse(raw).is_set()
        && let Err(e) = LocalState::remember_account_type_in(config_dir, raw)
    {
        warn!("Could not remember account type '{raw}': {e}");
    }
    let hint = flows.hint(cli.r#type.as_deref());

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let provisioner = listens_for_sign_in(&cli.command).then(|| {
        tokio::spawn(
            flows
                .profile_provisioner(hint)
                .run(client.subscribe(), shutdown_rx),
        )
    });

    let reply = dispatch(&cli.command, &flows, hint).await;

    let _ = shutdown_tx.send(());
    if let Some(provisioner) = provisioner
        && let Err(e) = provisioner.await
    {
        error!("Profile provisioner task failed: {e}");
    }

    reply
}

/// Whether the profile provisioner should run alongside `command`.
pub(crate) fn listens_for_sign_in(command: &Commands) -> bool {
    !matches!(command, Commands::StudentSignup { .. })
}

async fn dispatch(command: &Commands, flows: &Flows, hint: AccountTypeHint) -> Reply {
    match command {
        Commands::SignUp { email, password } => {
            Reply::Outcome(flows.sign_up(email, password, hint).await)
        }
        Commands::SignIn { email, password } => {
            Reply::Outcome(flows.sign_in(email, password, hint).await)
        }
        Commands::Google => Reply::Outcome(flows.sign_in_with_google(hint).await),
        Commands::ResetPassword { email } => {
            Reply::Outcome(flows.request_password_reset(email).await)
        }
        Commands::StudentSignup {
            age,
            parent_email,
            first_name,
            email,
            password,
            captcha,
        } => {
            let form = AccountForm {
                first_name: first_name.clone(),
                email: email.clone(),
                password: password.clone(),
                captcha: captcha.clone(),
            };
            Reply::Outcome(student_signup(flows, age, parent_email, &form).await)
        }
        Commands::Profile { action } => profile(flows, action, hint).await,
        Commands::SignOut => Reply::Outcome(flows.sign_out().await),
    }
}

async fn student_signup(
    flows: &Flows,
    age: &str,
    parent_email: &str,
    form: &AccountForm,
) -> FlowOutcome {
    let mut onboarding = flows.student_onboarding();

    if let Err(e) = onboarding.submit_details(age, parent_email) {
        return FlowOutcome::error(e.user_message());
    }

    onboarding.submit_account(form).await
}

async fn profile(flows: &Flows, action: &ProfileCommands, hint: AccountTypeHint) -> Reply {
    let (ProfileCommands::Show { email, password }
    | ProfileCommands::Update {
        email, password, ..
    }) = action;

    let signed_in = flows.sign_in(email, password, hint).await;
    if signed_in.is_error() {
        return Reply::Outcome(signed_in);
    }

    let mut editor = flows.profile_editor();
    let view = match editor.open().await {
        ProfileScreen::View(view) => view,
        ProfileScreen::Leave(outcome) => return Reply::Outcome(outcome),
    };

    match action {
        ProfileCommands::Show { .. } => Reply::Profile(view),
        ProfileCommands::Update {
            first_name,
            full_name,
            age,
            parent_email,
            ..
        } => {
            let form = edited_form(
                view.form,
                first_name.as_deref(),
                full_name.as_deref(),
                age.as_deref(),
                parent_email.as_deref(),
            );
            Reply::Outcome(editor.save(&form).await)
        }
    }
}

/// Apply the flags given on the command line over the pre-filled form.
pub(crate) fn edited_form(
    current: ProfileForm,
    first_name: Option<&str>,
    full_name: Option<&str>,
    age: Option<&str>,
    parent_email: Option<&str>,
) -> ProfileForm {
    let pick = |edited: Option<&str>, current: String| edited.map(String::from).unwrap_or(current);

    ProfileForm {
        first_name: pick(first_name, current.first_name),
        full_name: pick(full_name, current.full_name),
        age: pick(age, current.age),
        parent_email: pick(parent_email, current.parent_email),
    }
}
