use crate::FieldErrors;

/// bcrypt only looks at the first 72 bytes
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Shortest user attribute considered by the similarity check
const MIN_SIMILARITY_ATTRIBUTE_LENGTH: usize = 3;

const COMMON_PASSWORDS: &[&str] = &[
    "123123",
    "123456",
    "1234567",
    "12345678",
    "123456789",
    "1234567890",
    "654321",
    "abc123",
    "admin123",
    "azerty",
    "azertyuiop",
    "baseball",
    "dragon",
    "football",
    "iloveyou",
    "letmein",
    "master",
    "monkey",
    "motdepasse",
    "passw0rd",
    "password",
    "password1",
    "password123",
    "qazwsx",
    "qwerty",
    "qwerty123",
    "shadow",
    "soleil",
    "sunshine",
    "superman",
    "trustno1",
    "welcome",
];

/// One reason a password was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    TooShort { min: usize },
    TooLong { max: usize },
    Common,
    EntirelyNumeric,
    TooSimilar { attribute: String },
}

impl std::fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { min } => write!(
                f,
                "This password is too short. It must contain at least {min} characters."
            ),
            Self::TooLong { max } => {
                write!(f, "This password is too long. It must not exceed {max} bytes.")
            }
            Self::Common => write!(f, "This password is too common."),
            Self::EntirelyNumeric => write!(f, "This password is entirely numeric."),
            Self::TooSimilar { attribute } => {
                write!(f, "The password is too similar to the {attribute}.")
            }
        }
    }
}

/// Password strength policy applied to temporary and rotated passwords.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub reject_common: bool,
    pub reject_numeric: bool,
    pub reject_similar_to_user: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_length: BCRYPT_MAX_PASSWORD_BYTES,
            reject_common: true,
            reject_numeric: true,
            reject_similar_to_user: true,
        }
    }
}

impl PasswordPolicy {
    /// Check `password` against every rule and report all violations.
    ///
    /// `user_attributes` are `(label, value)` pairs such as
    /// `("email", "jdoe")`; the label is only used in the message.
    pub fn validate(
        &self,
        password: &str,
        user_attributes: &[(&str, &str)],
    ) -> Result<(), Vec<PolicyViolation>> {
        let mut violations = Vec::new();

        if password.chars().count() < self.min_length {
            violations.push(PolicyViolation::TooShort {
                min: self.min_length,
            });
        }

        if password.len() > self.max_length {
            violations.push(PolicyViolation::TooLong {
                max: self.max_length,
            });
        }

        let lowered = password.to_lowercase();

        if self.reject_common && COMMON_PASSWORDS.contains(&lowered.as_str()) {
            violations.push(PolicyViolation::Common);
        }

        if self.reject_numeric && !password.is_empty() && password.chars().all(|c| c.is_ascii_digit())
        {
            violations.push(PolicyViolation::EntirelyNumeric);
        }

        if self.reject_similar_to_user && !lowered.is_empty() {
            for (label, value) in user_attributes {
                let value = value.trim().to_lowercase();
                if value.chars().count() < MIN_SIMILARITY_ATTRIBUTE_LENGTH {
                    continue;
                }
                if lowered.contains(&value) || value.contains(&lowered) {
                    violations.push(PolicyViolation::TooSimilar {
                        attribute: label.replace('_', " "),
                    });
                    break;
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Run [`PasswordPolicy::validate`] and record violations under `field`
    pub fn check_field(
        &self,
        field: &str,
        password: &str,
        user_attributes: &[(&str, &str)],
        errors: &mut FieldErrors,
    ) {
        if let Err(violations) = self.validate(password, user_attributes) {
            for violation in violations {
                errors.add(field, violation.to_string());
            }
        }
    }
}
