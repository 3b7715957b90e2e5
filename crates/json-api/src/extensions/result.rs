//! Mapping service failures onto HTTP errors.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Turn an unexpected service failure into a logged 500.
///
/// Failures the client can act on (unknown ids, validation) are mapped by the
/// resource's own `errors` module instead.
pub(crate) trait ResultExt<T> {
    fn or_500(self, operation: &'static str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, operation: &'static str) -> Result<T, StatusError> {
        self.map_err(|service_error| {
            error!(operation, error = %service_error, "unexpected failure while handling request");

            StatusError::internal_server_error().brief("The storefront is temporarily unavailable")
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn failures_become_internal_errors() {
        let result: Result<(), &str> = Err("catalog lock poisoned");

        let error = result.or_500("list products").err();

        assert_eq!(error.map(|e| e.code), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn successes_pass_through() {
        let result: Result<u8, &str> = Ok(3);

        assert_eq!(result.or_500("list products").ok(), Some(3));
    }
}
