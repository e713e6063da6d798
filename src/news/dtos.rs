use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub page: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
