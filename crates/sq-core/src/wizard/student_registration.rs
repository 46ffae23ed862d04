/// Everything the onboarding wizard collected, validated and ready to submit.
#[derive(Clone, PartialEq, Eq)]
pub struct StudentRegistration {
    pub first_name: String,
    pub email: String,
    pub password: String,
    pub age: i32,
    pub parent_email: String,
}

impl std::fmt::Debug for StudentRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudentRegistration")
            .field("first_name", &self.first_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("age", &self.age)
            .field("parent_email", &self.parent_email)
            .finish()
    }
}
