//! `RangeParams` extractor: decodes range parameters from the request URI.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use rangefilter_core::config::filter::FilterConfig;
use rangefilter_core::error::AppError;
use rangefilter_core::types::FilterRequest;

/// Range parameters of the current request.
///
/// The parameter prefix comes from the [`FilterConfig`] in router state.
#[derive(Debug, Clone, Default)]
pub struct RangeParams(pub FilterRequest);

impl std::ops::Deref for RangeParams {
    type Target = FilterRequest;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RangeParams
where
    S: Send + Sync,
    FilterConfig: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = FilterConfig::from_ref(state);
        let query = parts.uri.query().unwrap_or_default();

        let request = FilterRequest::from_query(query, &config.parameter_name)?;
        Ok(Self(request))
    }
}
