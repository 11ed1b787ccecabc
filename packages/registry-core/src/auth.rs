//! Login credentials and the authenticated session

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{AuthUser, LoginResponse};

/// Body for `POST /api/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Trimmed credentials, or an error if either field is blank
    pub fn validated(&self) -> Result<Credentials, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::CredentialsMissing);
        }
        Ok(Credentials::new(email, self.password.clone()))
    }
}

/// Token and profile returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}

impl From<LoginResponse> for AuthSession {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_rejected() {
        assert_eq!(
            Credentials::new("  ", "secret").validated().unwrap_err(),
            ValidationError::CredentialsMissing
        );
        assert_eq!(
            Credentials::new("me@example.com", "").validated().unwrap_err(),
            ValidationError::CredentialsMissing
        );
    }

    #[test]
    fn email_is_trimmed() {
        let creds = Credentials::new(" me@example.com ", "secret").validated().unwrap();
        assert_eq!(creds.email, "me@example.com");
    }
}
