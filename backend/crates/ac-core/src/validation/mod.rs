pub mod email;
pub mod field_errors;
pub mod password_policy;
