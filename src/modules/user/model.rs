use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::utils::{validate_no_whitespace, validate_not_blank, validate_not_future};

/// Request body for both `POST /users` and `PUT /users`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserModel {
    pub id: Option<u64>,
    #[validate(
        custom(function = "validate_not_blank"),
        contains(pattern = "@", message = "Email must contain '@'")
    )]
    pub email: String,
    #[validate(custom(function = "validate_no_whitespace"))]
    pub login: String,
    pub name: Option<String>,
    #[validate(custom(function = "validate_not_future"))]
    pub birthday: NaiveDate,
}

impl UserModel {
    /// The display name, falling back to the login when none was given.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self.login.clone(),
        }
    }
}

pub struct InsertUser {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

impl From<UserModel> for InsertUser {
    fn from(model: UserModel) -> Self {
        let name = model.display_name();
        InsertUser { email: model.email, login: model.login, name, birthday: model.birthday }
    }
}
