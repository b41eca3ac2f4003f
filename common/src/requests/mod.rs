use serde::{Deserialize, Serialize};

#[derive(Serialize)]
/// Request payload for the rescan endpoint.
/// Carries the normalized URL to enqueue for crawling.
pub struct RescanRequest {
    pub url: String,
}

#[derive(Deserialize)]
/// Success body of `POST /crawler/submit`; `message` is shown to the user
/// verbatim.
pub struct RescanReceipt {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescan_request_wire_shape() {
        let body = serde_json::to_string(&RescanRequest {
            url: "https://example.com".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"url":"https://example.com"}"#);
    }

    #[test]
    fn rescan_receipt_parses_message() {
        let receipt: RescanReceipt =
            serde_json::from_str(r#"{"message":"queued for crawling"}"#).unwrap();
        assert_eq!(receipt.message, "queued for crawling");
    }
}
