use dongopet_core::domain::common::value_objects::{MAX_PAGE_VALUE, Pagination};
use serde::{Deserialize, Deserializer, de::Error};
use utoipa::IntoParams;

/// `skip`/`limit` offset pagination, `limit` defaulting to 100.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    #[serde(default, deserialize_with = "deserialize_page_value")]
    pub skip: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_page_value")]
    pub limit: Option<u64>,
}

fn deserialize_page_value<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<u64>::deserialize(deserializer)? {
        Some(value) if value > MAX_PAGE_VALUE => Err(D::Error::custom(format!(
            "pagination values must not exceed {MAX_PAGE_VALUE}"
        ))),
        value => Ok(value),
    }
}

impl From<PaginationQuery> for Pagination {
    fn from(query: PaginationQuery) -> Self {
        Pagination::new(query.skip, query.limit)
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, extract::Query, routing::get};
    use axum_test::TestServer;

    use super::*;

    async fn page(Query(query): Query<PaginationQuery>) -> String {
        let pagination = Pagination::from(query);
        format!("{}:{}", pagination.skip, pagination.limit)
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/items", get(page))).unwrap()
    }

    #[tokio::test]
    async fn defaults_apply_when_absent() {
        server().get("/items").await.assert_text("0:100");
    }

    #[tokio::test]
    async fn explicit_values_are_kept() {
        server()
            .get("/items")
            .add_query_param("skip", 20)
            .add_query_param("limit", 5)
            .await
            .assert_text("20:5");
    }

    #[tokio::test]
    async fn negative_skip_is_rejected() {
        server()
            .get("/items")
            .add_query_param("skip", -1)
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn oversized_limit_is_rejected() {
        server()
            .get("/items")
            .add_query_param("limit", u64::MAX)
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn largest_bigint_limit_is_accepted() {
        server()
            .get("/items")
            .add_query_param("limit", i64::MAX)
            .await
            .assert_text(format!("0:{}", i64::MAX));
    }
}
