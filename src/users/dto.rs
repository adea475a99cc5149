use serde::Deserialize;

/// Request body for creating or renaming a user.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: String,
}
