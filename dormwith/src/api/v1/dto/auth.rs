use serde::{Deserialize, Serialize};

use super::profile::ProfileResponse;

/// Request body for `POST /api/v1/auth:login`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Profile of the signed-in viewer.
    pub user: ProfileResponse,
}
