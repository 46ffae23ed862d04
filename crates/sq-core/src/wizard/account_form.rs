/// Raw panel 2 inputs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub first_name: String,
    pub email: String,
    pub password: String,
    pub captcha: String,
}

impl std::fmt::Debug for AccountForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountForm")
            .field("first_name", &self.first_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("captcha", &self.captcha)
            .finish()
    }
}
