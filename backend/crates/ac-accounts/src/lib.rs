//! Account services: credential verification, onboarding, password rotation,
//! profile edits and superuser provisioning.

pub mod credential_verifier;
pub mod current_user;
pub mod error;
pub mod invitation;
pub mod onboarding_service;
pub mod password_rotation_service;
pub mod profile_service;
pub mod provisioning;

pub use credential_verifier::CredentialVerifier;
pub use current_user::load_active_user;
pub use error::{AccountsError, Result};
pub use invitation::{INVITATION_SUBJECT, invitation_message};
pub use onboarding_service::{InvitationRequest, OnboardingService, OnboardingSettings};
pub use password_rotation_service::{ChangePasswordRequest, PasswordRotationService};
pub use profile_service::{ProfileService, ProfileUpdate};
pub use provisioning::{ProvisionOutcome, ensure_superuser};
