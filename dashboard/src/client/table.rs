//! Table-scoped query builder for the hosted backend's REST interface
//!
//! Requests follow the backend's PostgREST conventions: column selection
//! with embedded joins (`*, categories(name)`), equality filters
//! (`col=eq.value`), `order=col.desc` and `limit=N` parameters. Writes are
//! an insert of a row array, a partial PATCH keyed by filters, or a DELETE
//! keyed by filters.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use super::Session;
use crate::error::{AppError, AppResult};

/// Sort direction for an `order` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl OrderDirection {
    fn suffix(&self) -> &'static str {
        match self {
            OrderDirection::Ascending => "asc",
            OrderDirection::Descending => "desc",
        }
    }
}

/// Builder for a single request against one table
pub struct TableQuery {
    http: Client,
    base_url: String,
    anon_key: String,
    session: Arc<RwLock<Option<Session>>>,
    table: String,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
}

impl TableQuery {
    pub(crate) fn new(
        http: Client,
        base_url: String,
        anon_key: String,
        session: Arc<RwLock<Option<Session>>>,
        table: &str,
    ) -> Self {
        Self {
            http,
            base_url,
            anon_key,
            session,
            table: table.to_string(),
            select: None,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Columns to return, including embedded joins
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    /// Equality filter on a column
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order(mut self, column: &str, direction: OrderDirection) -> Self {
        self.order = Some(format!("{}.{}", column, direction.suffix()));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// Query parameters in request order; read requests carry the column
    /// selection, writes only the filters
    fn query_params(&self, include_read_params: bool) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if include_read_params {
            if let Some(select) = &self.select {
                params.push(("select".to_string(), select.clone()));
            }
        }
        for (column, condition) in &self.filters {
            params.push((column.clone(), condition.clone()));
        }
        if include_read_params {
            if let Some(order) = &self.order {
                params.push(("order".to_string(), order.clone()));
            }
            if let Some(limit) = self.limit {
                params.push(("limit".to_string(), limit.to_string()));
            }
        }
        params
    }

    /// The bearer token is the session token once signed in, the public key
    /// otherwise
    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self
            .session
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.anon_key.clone());
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }

    /// Execute a read, decoding the rows into `T`
    pub async fn fetch<T: DeserializeOwned>(self) -> AppResult<Vec<T>> {
        let request = self
            .http
            .get(self.url())
            .query(&self.query_params(true));
        let response = self.authorize(request).await.send().await?;
        let response = check(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::Decode(format!("{} rows: {}", self.table, e)))
    }

    /// Insert an array of rows; the backend's generated columns are not
    /// returned
    pub async fn insert<T: Serialize>(self, rows: &[T]) -> AppResult<()> {
        let request = self
            .http
            .post(self.url())
            .query(&self.query_params(false))
            .header("Prefer", "return=minimal")
            .json(rows);
        let response = self.authorize(request).await.send().await?;
        check(response).await?;
        Ok(())
    }

    /// Apply a partial update to the rows matching the filters
    pub async fn update<T: Serialize>(self, patch: &T) -> AppResult<()> {
        let request = self
            .http
            .patch(self.url())
            .query(&self.query_params(false))
            .header("Prefer", "return=minimal")
            .json(patch);
        let response = self.authorize(request).await.send().await?;
        check(response).await?;
        Ok(())
    }

    /// Delete the rows matching the filters
    pub async fn delete(self) -> AppResult<()> {
        let request = self
            .http
            .delete(self.url())
            .query(&self.query_params(false));
        let response = self.authorize(request).await.send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Surface non-success responses with the backend's message string
async fn check(response: Response) -> AppResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    Err(AppError::Backend { status, message })
}
