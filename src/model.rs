// ABOUTME: Serde wire envelopes for the note storage routes
// ABOUTME: Field order follows declaration order so request bytes are stable

use serde::{Deserialize, Serialize};

/// Body of `GET /read`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadRequest {
    pub id: String,
    pub pass: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadResponse {
    pub id: String,
    pub note: String,
}

/// Body of both `POST /create` and `PUT /update/note`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteRequest {
    pub id: String,
    pub pass: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteResponse {
    pub id: String,
}
