pub mod authorization;
pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod login_rate_limiter;
pub mod password;
pub mod principal;
pub mod rate_limit_config;
pub mod token_pair;
pub mod token_type;

pub use authorization::authorize;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::{JwtIssuer, TokenLifetimes};
pub use jwt_validator::JwtValidator;
pub use login_rate_limiter::LoginRateLimiter;
pub use password::{hash_password, verify_password};
pub use principal::Principal;
pub use rate_limit_config::RateLimitConfig;
pub use token_pair::TokenPair;
pub use token_type::TokenType;
