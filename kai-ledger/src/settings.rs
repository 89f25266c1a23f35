// Copyright (c) KAI
// SPDX-License-Identifier: Apache-2.0

//! Admin preferences edited on the settings page
//!
//! Held in memory only. A save replaces the whole value after validation.

use serde::{Deserialize, Serialize};

use crate::SettingsError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub refund: bool,
    pub delay: bool,
    pub ticket: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub sender_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    pub profile: AdminProfile,
    pub notifications: NotificationSettings,
    pub smtp: SmtpSettings,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            profile: AdminProfile {
                name: "Admin KAI".to_string(),
                email: "admin@kai.id".to_string(),
            },
            notifications: NotificationSettings {
                email: true,
                refund: true,
                delay: true,
                ticket: true,
            },
            smtp: SmtpSettings {
                host: "smtp.kai.id".to_string(),
                port: 587,
                sender_email: "noreply@kai.id".to_string(),
            },
        }
    }
}

impl AdminSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.profile.name.trim().is_empty() {
            return Err(SettingsError::EmptyField("profile.name"));
        }
        check_email("profile.email", &self.profile.email)?;
        if self.smtp.host.trim().is_empty() {
            return Err(SettingsError::EmptyField("smtp.host"));
        }
        if self.smtp.port == 0 {
            return Err(SettingsError::InvalidPort);
        }
        check_email("smtp.sender_email", &self.smtp.sender_email)
    }
}

fn check_email(field: &'static str, value: &str) -> Result<(), SettingsError> {
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(SettingsError::InvalidEmail {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = AdminSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.smtp.port, 587);
        assert!(settings.notifications.delay);
    }

    #[test]
    fn test_rejects_bad_email() {
        let mut settings = AdminSettings::default();
        settings.profile.email = "admin.kai.id".to_string();
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvalidEmail {
                field: "profile.email",
                value: "admin.kai.id".to_string()
            })
        );

        let mut settings = AdminSettings::default();
        settings.smtp.sender_email = "noreply@".to_string();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidEmail { field: "smtp.sender_email", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_port_and_empty_host() {
        let mut settings = AdminSettings::default();
        settings.smtp.port = 0;
        assert_eq!(settings.validate(), Err(SettingsError::InvalidPort));

        let mut settings = AdminSettings::default();
        settings.smtp.host = "  ".to_string();
        assert_eq!(settings.validate(), Err(SettingsError::EmptyField("smtp.host")));
    }
}
