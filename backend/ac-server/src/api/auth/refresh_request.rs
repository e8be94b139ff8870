use serde::Deserialize;

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}
