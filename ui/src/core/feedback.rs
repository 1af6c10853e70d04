//! Collapses every request failure into the single message line a screen shows.

use tracing::warn;

/// Text for a failed request. The backend's own `message` wins; otherwise
/// rejections use `rejected` and transport/decoding problems use `unreachable`.
pub fn describe(
    err: &api::Error,
    rejected: impl FnOnce() -> String,
    unreachable: impl FnOnce() -> String,
) -> String {
    warn!(%err, "request failed");
    if let Some(message) = err.user_message() {
        return message.to_string();
    }
    if err.is_rejection() {
        rejected()
    } else {
        unreachable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_takes_priority() {
        let err = api::Error::Rejected {
            status: 400,
            message: Some("Usuário já existe".into()),
        };
        let text = describe(&err, || "rejected".into(), || "offline".into());
        assert_eq!(text, "Usuário já existe");
    }

    #[test]
    fn falls_back_by_failure_class() {
        let rejected = api::Error::Rejected {
            status: 401,
            message: None,
        };
        assert_eq!(
            describe(&rejected, || "rejected".into(), || "offline".into()),
            "rejected"
        );

        let decode = api::Error::Decode(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(
            describe(&decode, || "rejected".into(), || "offline".into()),
            "offline"
        );
    }
}
