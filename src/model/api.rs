use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
