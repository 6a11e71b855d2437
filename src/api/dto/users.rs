/*
 * Responsibility
 * - Users の request/response DTO
 * - password は validate 後に handler で hash する (ここでは平文のまま)
 */
use serde::{Deserialize, Serialize};

use crate::api::extractors::CurrentUser;
use crate::validation::{ValidationErrors, looks_like_email, required_text};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub password: Option<String>,
}

/// A registration that passed field validation. `password` is still plaintext.
#[derive(Debug)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<Registration, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = required_text(
            &mut errors,
            self.first_name.as_deref(),
            "A first name is required",
            "Please provide a first name",
        );
        let last_name = required_text(
            &mut errors,
            self.last_name.as_deref(),
            "A last name is required",
            "Please provide a last name",
        );
        let email_address = match self.email_address.as_deref() {
            None => {
                errors.push("An email address is required");
                None
            }
            Some(v) if !looks_like_email(v) => {
                errors.push("Please provide a valid email address");
                None
            }
            Some(v) => Some(v.trim().to_string()),
        };
        let password = required_text(
            &mut errors,
            self.password.as_deref(),
            "A password is required",
            "Please provide a password",
        );

        match (first_name, last_name, email_address, password) {
            (Some(first_name), Some(last_name), Some(email_address), Some(password))
                if errors.is_empty() =>
            {
                Ok(Registration {
                    first_name,
                    last_name,
                    email_address,
                    password,
                })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<CurrentUser> for UserResponse {
    fn from(user: CurrentUser) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
        }
    }
}
