// Copyright (c) KAI
// SPDX-License-Identifier: Apache-2.0

//! Admin login check
//!
//! A plain comparison against one configured account. No session or token
//! is issued.

use serde::Deserialize;

use crate::AuthError;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@kai.id";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn verify(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email == self.email && password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Replace the password from the settings page.
    ///
    /// A blank value keeps the current password. Returns whether it changed.
    pub fn change_password(&mut self, new_password: &str) -> bool {
        if new_password.trim().is_empty() {
            return false;
        }
        self.password = new_password.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_account() {
        let creds = Credentials::default();
        assert!(creds.verify("admin@kai.id", "admin123").is_ok());
    }

    #[test]
    fn test_rejects_wrong_password_or_email() {
        let creds = Credentials::default();
        assert_eq!(
            creds.verify("admin@kai.id", "admin"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            creds.verify("Admin@kai.id", "admin123"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(creds.verify("", ""), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_change_password() {
        let mut creds = Credentials::default();
        assert!(!creds.change_password(""));
        assert!(!creds.change_password("   "));
        assert!(creds.verify(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD).is_ok());

        assert!(creds.change_password("kereta2024"));
        assert!(creds.verify(DEFAULT_ADMIN_EMAIL, "kereta2024").is_ok());
        assert!(creds.verify(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD).is_err());
    }

    #[test]
    fn test_custom_account() {
        let creds = Credentials::new("ops@kai.id", "s3cret");
        assert!(creds.verify("ops@kai.id", "s3cret").is_ok());
        assert!(creds.verify(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD).is_err());
    }
}
