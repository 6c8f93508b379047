//! Integration tests for extracting range parameters from HTTP requests.

mod helpers;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::Request;

use rangefilter::RangeParams;
use rangefilter_core::config::filter::FilterConfig;
use rangefilter_sql::SqlQuery;

/// Router state carrying the filter configuration.
#[derive(Clone)]
struct AppState {
    filter: FilterConfig,
}

impl FromRef<AppState> for FilterConfig {
    fn from_ref(state: &AppState) -> Self {
        state.filter.clone()
    }
}

async fn extract(uri: &str, state: &AppState) -> RangeParams {
    let (mut parts, _) = Request::builder()
        .uri(uri)
        .body(())
        .expect("request")
        .into_parts();
    RangeParams::from_request_parts(&mut parts, state)
        .await
        .expect("extract")
}

#[tokio::test]
async fn test_extracted_params_drive_sql() {
    let state = AppState {
        filter: FilterConfig::default(),
    };
    let params = extract(
        "/dummies?range%5BdummyPrice%5D%5Bbetween%5D=10..20&itemsPerPage=5",
        &state,
    )
    .await;

    let mut query = SqlQuery::new("Dummy");
    let outcome = helpers::dummy_filter().apply(&params, &mut query);

    assert_eq!(outcome.predicates, 1);
    assert_eq!(
        query.dql(),
        "SELECT o FROM Dummy o WHERE o.dummyPrice BETWEEN :dummyPrice_p1_1 AND :dummyPrice_p1_2"
    );
}

#[tokio::test]
async fn test_configured_parameter_name() {
    let state = AppState {
        filter: FilterConfig {
            parameter_name: "interval".to_string(),
            ..Default::default()
        },
    };
    let params = extract(
        "/dummies?interval%5BdummyPrice%5D%5Bgt%5D=1&range%5BdummyPrice%5D%5Blt%5D=9",
        &state,
    )
    .await;

    assert_eq!(params.len(), 1);
    let mut query = SqlQuery::new("Dummy");
    helpers::dummy_filter().apply(&params, &mut query);
    assert_eq!(
        query.dql(),
        "SELECT o FROM Dummy o WHERE o.dummyPrice > :dummyPrice_p1"
    );
}
