use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserDto,
}
