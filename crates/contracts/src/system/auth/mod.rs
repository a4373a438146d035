use crate::domain::a004_order::{is_valid_email, FieldError};
use anyhow::Context;
use serde::{Deserialize, Serialize};

const MIN_PASSWORD_LEN: usize = 6;

/// Signed-in customer, persisted in browser storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("stored user is not a valid profile")
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("failed to serialize user profile")
    }

    /// Emails compare trimmed and case-insensitively
    pub fn has_email(&self, email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim())
    }

    /// First letter of the name, for the avatar bubble
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: "email",
                message: "Please enter a valid email address",
            });
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError {
                field: "password",
                message: "Password must be at least 6 characters",
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Profile for a login without a registered name: the part of the
    /// email before `@`.
    pub fn into_profile(self) -> UserProfile {
        self.into_profile_with(None)
    }

    /// Like [`into_profile`](Self::into_profile), but keeps the name of
    /// `known` when it belongs to the same email.
    pub fn into_profile_with(self, known: Option<&UserProfile>) -> UserProfile {
        let email = self.email.trim().to_string();
        if let Some(known) = known.filter(|k| k.has_email(&email)) {
            return UserProfile {
                name: known.name.clone(),
                email,
            };
        }
        let name = email
            .split_once('@')
            .map(|(local, _)| local.to_string())
            .unwrap_or_else(|| email.clone());
        UserProfile { name, email }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Please enter your name",
            });
        }
        let login = LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        if let Err(mut login_errors) = login.validate() {
            errors.append(&mut login_errors);
        }
        if self.password != self.confirm_password {
            errors.push(FieldError {
                field: "confirm_password",
                message: "Passwords do not match",
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let ok = LoginRequest {
            email: "barista@brewhaven.cafe".into(),
            password: "espresso".into(),
        };
        assert!(ok.validate().is_ok());

        let errors = LoginRequest {
            email: "barista".into(),
            password: "short".into(),
        }
        .validate()
        .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn test_login_profile_uses_email_local_part() {
        let profile = LoginRequest {
            email: " sam@brewhaven.cafe ".into(),
            password: "secret1".into(),
        }
        .into_profile();
        assert_eq!(profile.name, "sam");
        assert_eq!(profile.email, "sam@brewhaven.cafe");
        assert_eq!(profile.initial(), 'S');
    }

    #[test]
    fn test_login_keeps_registered_name() {
        let registered = RegisterRequest {
            name: "Samantha Reyes".into(),
            email: "sam@brewhaven.cafe".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
        .into_profile();

        let profile = LoginRequest {
            email: " SAM@brewhaven.cafe".into(),
            password: "secret1".into(),
        }
        .into_profile_with(Some(&registered));
        assert_eq!(profile.name, "Samantha Reyes");
        assert_eq!(profile.email, "SAM@brewhaven.cafe");

        let other = LoginRequest {
            email: "kim@brewhaven.cafe".into(),
            password: "secret1".into(),
        }
        .into_profile_with(Some(&registered));
        assert_eq!(other.name, "kim");
    }

    #[test]
    fn test_register_validation() {
        let request = RegisterRequest {
            name: "  ".into(),
            email: "kim@brewhaven.cafe".into(),
            password: "latte-art".into(),
            confirm_password: "latte-arts".into(),
        };
        let fields: Vec<_> = request
            .validate()
            .unwrap_err()
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["name", "confirm_password"]);
    }

    #[test]
    fn test_profile_json() {
        let profile = UserProfile {
            name: "Kim".into(),
            email: "kim@brewhaven.cafe".into(),
        };
        let json = profile.to_json().unwrap();
        assert_eq!(UserProfile::from_json(&json).unwrap(), profile);
        assert!(UserProfile::from_json("null").is_err());
        assert!(UserProfile::from_json("{\"name\":1}").is_err());
    }

    #[test]
    fn test_initial_fallback() {
        let profile = UserProfile {
            name: "--".into(),
            email: "x@y.z".into(),
        };
        assert_eq!(profile.initial(), '?');
    }
}
