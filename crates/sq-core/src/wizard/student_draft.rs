/// Panel 1 values, kept while the user moves back and forth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub age: Option<i32>,
    pub parent_email: Option<String>,
}
