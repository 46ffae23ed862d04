/// Panels of the student onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardPanel {
    /// Panel 1: age and parent email
    #[default]
    Details,
    /// Panel 2: name, email, password, CAPTCHA
    Account,
}

impl WizardPanel {
    /// 1-based step number shown in the progress indicator
    pub fn step(&self) -> u8 {
        match self {
            Self::Details => 1,
            Self::Account => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Details => "Let's Get Started!",
            Self::Account => "Create Your Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Details => "Tell us a bit about yourself",
            Self::Account => "Choose your username and password",
        }
    }
}

impl std::fmt::Display for WizardPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Details => write!(f, "details"),
            Self::Account => write!(f, "account"),
        }
    }
}
