//! Repository trait for data access
//!
//! This trait defines the typed read operations the domain service needs.
//! Implementations are in infra/storage.

use super::query::Query;
use crate::contract::{BlogPost, Branding, CompanySettings, ContentError, Property};
use async_trait::async_trait;

/// Rows of one fetch: those that decoded, and an error for each that did not
#[derive(Debug, Clone, PartialEq)]
pub struct Rows<T> {
    pub items: Vec<T>,
    pub rejected: Vec<ContentError>,
}

impl<T> Rows<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            rejected: Vec::new(),
        }
    }

    /// Number of rows the backend returned
    pub fn total(&self) -> usize {
        self.items.len() + self.rejected.len()
    }
}

/// Typed reads over the four backend collections.
///
/// A row that fails to decode lands in [`Rows::rejected`] and never hides
/// the rest of the result.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Rows of `company_settings` matching `query`
    async fn company_settings(
        &self,
        query: &Query,
    ) -> Result<Rows<CompanySettings>, ContentError>;

    /// Rows of `branding` matching `query`
    async fn branding(&self, query: &Query) -> Result<Rows<Branding>, ContentError>;

    /// Rows of `properties` matching `query`
    async fn properties(&self, query: &Query) -> Result<Rows<Property>, ContentError>;

    /// Rows of `blog_posts` matching `query`
    async fn blog_posts(&self, query: &Query) -> Result<Rows<BlogPost>, ContentError>;

    /// Values of the single projected text column of `query`, one per row
    async fn column_values(&self, query: &Query) -> Result<Vec<Option<String>>, ContentError>;
}
