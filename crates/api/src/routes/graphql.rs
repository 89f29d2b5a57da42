use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql::parser::parse_query;
use async_graphql::parser::types::OperationType;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{RawQuery, State};
use axum::http::header::{ACCEPT, ALLOW};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Path serving both the GraphQL endpoint and the GraphiQL console.
pub const GRAPHQL_PATH: &str = "/graphql";

fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// GET /graphql -- GraphiQL for browsers, query-string execution otherwise.
///
/// The console is served when the client accepts `text/html` or sends no
/// `query` parameter. Mutations are refused with 405 since GET must not
/// change state.
async fn graphql_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    let raw = raw.unwrap_or_default();
    if accepts_html(&headers) || !has_query_param(&raw) {
        return graphiql().into_response();
    }

    let request = match parse_query_string(&raw) {
        Ok(request) => request,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    if is_mutation(&request.query, request.operation_name.as_deref()) {
        let mut response = error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Can only perform a mutation operation from a POST request",
        );
        response
            .headers_mut()
            .insert(ALLOW, axum::http::HeaderValue::from_static("POST"));
        return response;
    }

    tracing::debug!(operation = ?request.operation_name, "Executing GraphQL GET request");
    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

/// POST /graphql -- execute a GraphQL request against the schema.
///
/// Query-level failures (syntax, validation, resolver errors) are reported
/// in the response `errors` array with HTTP 200.
async fn graphql_post(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    tracing::debug!(operation = ?request.operation_name, "Executing GraphQL request");
    state.schema.execute(request).await.into()
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn has_query_param(raw: &str) -> bool {
    raw.split('&')
        .any(|pair| pair.split('=').next() == Some("query"))
}

/// Whether the operation selected by `operation_name` is a mutation.
///
/// Unparseable documents return `false` so execution reports the syntax error.
fn is_mutation(query: &str, operation_name: Option<&str>) -> bool {
    let Ok(document) = parse_query(query) else {
        return false;
    };

    document
        .operations
        .iter()
        .find(|(name, _)| match operation_name {
            Some(wanted) => name.map(|n| n.as_str()) == Some(wanted),
            None => true,
        })
        .is_some_and(|(_, op)| op.node.ty == OperationType::Mutation)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "errors": [{ "message": message }] }))).into_response()
}

/// Mount the GraphQL route.
pub fn router() -> Router<AppState> {
    Router::new().route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_query_param() {
        assert!(has_query_param("query=%7Bvideos%7Bid%7D%7D"));
        assert!(has_query_param("operationName=A&query=x"));
        assert!(!has_query_param(""));
        assert!(!has_query_param("queryx=1"));
    }

    #[test]
    fn mutation_detection_follows_operation_name() {
        let doc = "query Q { videos { id } } mutation M { createVideo(video: {id: \"x\"}) { id } }";
        assert!(is_mutation(doc, Some("M")));
        assert!(!is_mutation(doc, Some("Q")));
        assert!(is_mutation("mutation { createVideo(video: {id: \"x\"}) { id } }", None));
        assert!(!is_mutation("{ videos { id } }", None));
        assert!(!is_mutation("{ videos { id ", None));
    }
}
