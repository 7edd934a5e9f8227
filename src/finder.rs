// src/finder.rs
// =============================================================================
// Ties the pieces together for one invocation:
//
//   build query -> send to backend -> parse response -> print results
//
// The backend and the output sink are passed in, so the same function runs
// against ClickHouse in main.rs and against a fake in the tests. There is
// exactly one request per run and no retry.
// =============================================================================

use std::io::Write;

use crate::backend::QueryBackend;
use crate::error::Result;
use crate::query::QueryParameters;
use crate::results::{print_results, process_response, OutputFormat};

pub async fn run(
    params: &QueryParameters,
    format: OutputFormat,
    backend: &dyn QueryBackend,
    sink: &mut dyn Write,
) -> Result<()> {
    let query = params.build_query()?;
    tracing::debug!(%query, "built query");

    tracing::info!(
        repo = %params.repo_name,
        order = %params.order_by,
        limit = params.limit,
        "looking for repositories starred by the same users"
    );
    let response = backend.execute(&query).await?;

    let rows = process_response(&response)?;
    tracing::info!(rows = rows.len(), "parsed response");

    print_results(&rows, format, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RawResponse;
    use crate::error::FinderError;
    use crate::query::OrderBy;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // Backend that records every query and replies with a canned response
    struct FakeBackend {
        response: RawResponse,
        queries: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn new(status_code: u16, body: &str) -> Self {
            Self {
                response: RawResponse::new(status_code, body),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.queries.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl QueryBackend for FakeBackend {
        async fn execute(&self, query: &str) -> Result<RawResponse> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok(self.response.clone())
        }
    }

    fn params(repo_name: &str) -> QueryParameters {
        QueryParameters {
            repo_name: repo_name.to_string(),
            limit: 50,
            order_by: OrderBy::Stargazers,
            min_stargazers: None,
            min_forkers: None,
            min_ratio: None,
        }
    }

    #[tokio::test]
    async fn test_run_prints_table() {
        let backend = FakeBackend::new(200, "test_repo\t100\t20\t5\n");
        let mut out = Vec::new();

        run(&params("test_repo"), OutputFormat::Table, &backend, &mut out)
            .await
            .unwrap();

        assert_eq!(backend.calls(), 1);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("test_repo"));
        assert!(printed.contains("Stargazers"));
    }

    #[tokio::test]
    async fn test_run_sends_built_query() {
        let backend = FakeBackend::new(200, "");
        let mut out = Vec::new();
        let mut params = params("rust-lang/rust");
        params.min_forkers = Some(5);

        run(&params, OutputFormat::Json, &backend, &mut out).await.unwrap();

        let queries = backend.queries.lock().unwrap();
        assert_eq!(queries.as_slice(), [params.build_query().unwrap()]);
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }

    #[tokio::test]
    async fn test_run_backend_error_prints_nothing() {
        let backend = FakeBackend::new(403, "Code: 497. Not enough privileges");
        let mut out = Vec::new();

        let result = run(&params("test_repo"), OutputFormat::Table, &backend, &mut out).await;

        assert!(matches!(result, Err(FinderError::Backend { status: 403, .. })));
        assert_eq!(backend.calls(), 1);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_invalid_parameters_skip_request() {
        let backend = FakeBackend::new(200, "");
        let mut out = Vec::new();
        let mut params = params("test_repo");
        params.limit = 0;

        let result = run(&params, OutputFormat::Table, &backend, &mut out).await;

        assert!(matches!(result, Err(FinderError::InvalidParameter(_))));
        assert_eq!(backend.calls(), 0);
        assert!(out.is_empty());
    }
}
