mod email;
mod field_errors;
mod password_policy;
