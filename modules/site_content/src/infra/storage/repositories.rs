//! Repository implementation over raw JSON row sources

use super::entity;
use crate::contract::{BlogPost, Branding, CompanySettings, ContentError, Property};
use crate::domain::query::{Columns, Query};
use crate::domain::repository::{ContentRepository, Rows};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Anything that can answer a [`Query`] with raw JSON rows
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self, query: &Query) -> Result<Vec<Value>, ContentError>;
}

#[async_trait]
impl<S: RowSource> ContentRepository for S {
    async fn company_settings(
        &self,
        query: &Query,
    ) -> Result<Rows<CompanySettings>, ContentError> {
        let rows = self.fetch_rows(query).await?;
        Ok(decode::<entity::company_settings::Row, _>(query, rows, CompanySettings::try_from))
    }

    async fn branding(&self, query: &Query) -> Result<Rows<Branding>, ContentError> {
        let rows = self.fetch_rows(query).await?;
        Ok(decode::<entity::branding::Row, _>(query, rows, |row| Ok(Branding::from(row))))
    }

    async fn properties(&self, query: &Query) -> Result<Rows<Property>, ContentError> {
        let rows = self.fetch_rows(query).await?;
        Ok(decode::<entity::property::Row, _>(query, rows, Property::try_from))
    }

    async fn blog_posts(&self, query: &Query) -> Result<Rows<BlogPost>, ContentError> {
        let rows = self.fetch_rows(query).await?;
        Ok(decode::<entity::blog_post::Row, _>(query, rows, BlogPost::try_from))
    }

    async fn column_values(&self, query: &Query) -> Result<Vec<Option<String>>, ContentError> {
        let column = match query.columns() {
            Columns::Only(cols) if cols.len() == 1 => cols[0],
            other => {
                return Err(ContentError::Decode {
                    collection: query.collection().table().to_string(),
                    message: format!("expected exactly one projected column, got {:?}", other),
                })
            }
        };

        let rows = self.fetch_rows(query).await?;
        Ok(rows
            .iter()
            .map(|row| match row.get(column) {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            })
            .collect())
    }
}

/// Deserialize each row and map it into its model, setting aside the rows
/// that do not fit
fn decode<R, T>(
    query: &Query,
    rows: Vec<Value>,
    map: impl Fn(R) -> Result<T, String>,
) -> Rows<T>
where
    R: DeserializeOwned,
{
    let table = query.collection().table();
    let mut decoded = Rows::new(Vec::with_capacity(rows.len()));
    for value in rows {
        let row = serde_json::from_value::<R>(value)
            .map_err(|e| e.to_string())
            .and_then(&map);
        match row {
            Ok(item) => decoded.items.push(item),
            Err(message) => {
                tracing::warn!(collection = table, error = %message, "skipping undecodable row");
                decoded.rejected.push(ContentError::Decode {
                    collection: table.to_string(),
                    message,
                });
            }
        }
    }
    decoded
}
