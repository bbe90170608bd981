//! # Fallback Presentation
//!
//! Decides what a view shows once a request has finished: the live data, a
//! flagged placeholder standing in for it, or a bare failure. Keeping the
//! decision here means it can be tested without any network involved.

use crate::core::fetch::FetchError;

/// What the view should present for a finished request.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<T> {
    Live(T),
    /// A placeholder is shown, and `reason` is surfaced alongside it.
    Fallback { placeholder: T, reason: String },
    Failed(String),
}

impl<T> From<Result<T, FetchError>> for Presentation<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => Presentation::Live(data),
            Err(e) => Presentation::Failed(e.to_string()),
        }
    }
}

impl<T> Presentation<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Presentation::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Presentation::Live(_) => None,
            Presentation::Fallback { reason, .. } | Presentation::Failed(reason) => Some(reason),
        }
    }
}

/// Per-resource policy for turning failures into something renderable.
pub trait FallbackPolicy<T> {
    /// User-facing reason for `error`.
    fn reason(&self, error: &FetchError) -> String {
        error.to_string()
    }

    /// Placeholder to show instead of an empty view, if any.
    fn placeholder(&self, error: &FetchError) -> Option<T>;
}

/// Policy that never substitutes anything.
pub struct NoFallback;

impl<T> FallbackPolicy<T> for NoFallback {
    fn placeholder(&self, _error: &FetchError) -> Option<T> {
        None
    }
}

/// Applies `policy` to a finished request.
pub fn present<T>(result: Result<T, FetchError>, policy: &dyn FallbackPolicy<T>) -> Presentation<T> {
    match result {
        Ok(data) => Presentation::Live(data),
        Err(error) => {
            let reason = policy.reason(&error);
            match policy.placeholder(&error) {
                Some(placeholder) => Presentation::Fallback { placeholder, reason },
                None => Presentation::Failed(reason),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ZeroOnNotFound;

    impl FallbackPolicy<u32> for ZeroOnNotFound {
        fn reason(&self, error: &FetchError) -> String {
            format!("custom: {error}")
        }

        fn placeholder(&self, error: &FetchError) -> Option<u32> {
            (error.status() == Some(404)).then_some(0)
        }
    }

    fn not_found() -> FetchError {
        FetchError::Status {
            status: 404,
            body: String::new(),
        }
    }

    #[test]
    fn test_success_is_live() {
        assert_eq!(present(Ok(5), &ZeroOnNotFound), Presentation::Live(5));
    }

    #[test]
    fn test_policy_substitutes_and_keeps_reason() {
        let presented = present(Err(not_found()), &ZeroOnNotFound);
        assert!(presented.is_fallback());
        assert_eq!(
            presented,
            Presentation::Fallback {
                placeholder: 0,
                reason: "custom: API error (HTTP 404)".to_string()
            }
        );
    }

    #[test]
    fn test_policy_declines() {
        let presented = present(Err(FetchError::Timeout), &ZeroOnNotFound);
        assert!(matches!(presented, Presentation::Failed(ref r) if r.starts_with("custom:")));
    }

    #[test]
    fn test_no_fallback_matches_plain_conversion() {
        let err = FetchError::Shape("missing field".to_string());
        let via_policy: Presentation<u32> = present(Err(err.clone()), &NoFallback);
        let via_from: Presentation<u32> = Err(err).into();
        assert_eq!(via_policy, via_from);
        assert_eq!(via_from.reason(), Some("unexpected response: missing field"));
    }
}
