use serde::{Deserialize, Serialize};

/// Named permission tier checked by the authorization gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Held by `ADMIN` and `SUPER_ADMIN`
    #[serde(rename = "is_admin")]
    Admin,
    /// Held by `SUPER_ADMIN` only
    #[serde(rename = "is_super_admin")]
    SuperAdmin,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "is_admin",
            Self::SuperAdmin => "is_super_admin",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
