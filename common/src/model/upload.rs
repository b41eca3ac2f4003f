use serde::Deserialize;

/// Success body of `POST /upload`: the server-assigned record identifier.
/// Anything that fails to parse into this shape is treated as a failed
/// upload, whatever the HTTP status said.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    pub id: i64,
}
