use serde::Serialize;

/// Fields written by the profile editor.
///
/// Every field present here is overwritten unconditionally; `None`
/// serializes as `null` and clears the stored value. Student fields are
/// only sent for student profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    #[serde(flatten)]
    pub student: Option<StudentFields>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentFields {
    pub age: Option<i32>,
    pub parent_email: Option<String>,
}
