use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResult {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: String,
}
