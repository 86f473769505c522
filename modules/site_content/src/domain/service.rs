//! Domain service - query composition and result shaping

use super::filters::{
    apply_property_filters, apply_search_term, published, CITY, CREATED_AT, FEATURED,
    PROPERTY_TYPE, PUBLISHED_AT, SLUG, STATUS,
};
use super::query::{Collection, Query};
use super::repository::{ContentRepository, Rows};
use crate::contract::{
    BlogPost, Branding, CompanySettings, ContentError, Property, PropertyFilters, RecordStatus,
};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Domain service for site content reads.
///
/// Every method returns the technical error; settling into fallback values is
/// the job of the native client.
pub struct Service {
    repo: Arc<dyn ContentRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    // ===== Company =====

    /// The single published company settings row
    pub async fn company_settings(&self) -> Result<CompanySettings, ContentError> {
        let query = published(Collection::CompanySettings).single();
        let rows = self.repo.company_settings(&query).await?;
        expect_single(&query, rows)
    }

    /// The singleton branding row. The branding collection carries no
    /// lifecycle status, so no status restriction applies.
    pub async fn branding(&self) -> Result<Branding, ContentError> {
        let query = Query::on(Collection::Branding).single();
        let rows = self.repo.branding(&query).await?;
        expect_single(&query, rows)
    }

    // ===== Properties =====

    /// Published properties, featured first then newest
    pub async fn properties(
        &self,
        filters: &PropertyFilters,
    ) -> Result<Rows<Property>, ContentError> {
        let query = apply_property_filters(published(Collection::Properties), filters)
            .order_desc(FEATURED)
            .order_desc(CREATED_AT);
        self.repo.properties(&query).await
    }

    /// The published property with `slug`
    pub async fn property(&self, slug: &str) -> Result<Property, ContentError> {
        let query = Query::on(Collection::Properties)
            .eq(SLUG, slug)
            .eq(STATUS, RecordStatus::Published.as_str())
            .single();
        let rows = self.repo.properties(&query).await?;
        expect_single(&query, rows)
    }

    /// Newest featured properties
    pub async fn featured_properties(&self, limit: usize) -> Result<Rows<Property>, ContentError> {
        let query = published(Collection::Properties)
            .eq(FEATURED, true)
            .order_desc(CREATED_AT)
            .limit(limit);
        self.repo.properties(&query).await
    }

    /// Distinct non-empty property types, in first-seen order
    pub async fn property_types(&self) -> Result<Vec<String>, ContentError> {
        let query = published(Collection::Properties).select(&[PROPERTY_TYPE]);
        let values = self.repo.column_values(&query).await?;

        let mut seen = HashSet::new();
        Ok(values
            .into_iter()
            .flatten()
            .filter(|v| !v.is_empty())
            .filter(|v| seen.insert(v.clone()))
            .collect())
    }

    /// Distinct non-empty cities, sorted ascending
    pub async fn cities(&self) -> Result<Vec<String>, ContentError> {
        let query = published(Collection::Properties).select(&[CITY]);
        let values = self.repo.column_values(&query).await?;

        Ok(values
            .into_iter()
            .flatten()
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    /// Published properties matching `term` in title, description or
    /// neighborhood, narrowed by every filter including `featured`
    pub async fn search_properties(
        &self,
        term: &str,
        filters: &PropertyFilters,
    ) -> Result<Rows<Property>, ContentError> {
        let query = apply_search_term(published(Collection::Properties), term);
        let query = apply_property_filters(query, filters)
            .order_desc(FEATURED)
            .order_desc(CREATED_AT);
        self.repo.properties(&query).await
    }

    // ===== Blog =====

    /// Published posts, newest first
    pub async fn blog_posts(&self, limit: Option<usize>) -> Result<Rows<BlogPost>, ContentError> {
        let mut query = published(Collection::BlogPosts).order_desc(PUBLISHED_AT);
        if let Some(limit) = limit.filter(|l| *l > 0) {
            query = query.limit(limit);
        }
        self.repo.blog_posts(&query).await
    }

    /// The published post with `slug`
    pub async fn blog_post(&self, slug: &str) -> Result<BlogPost, ContentError> {
        let query = Query::on(Collection::BlogPosts)
            .eq(SLUG, slug)
            .eq(STATUS, RecordStatus::Published.as_str())
            .single();
        let rows = self.repo.blog_posts(&query).await?;
        expect_single(&query, rows)
    }
}

/// Exactly one row, or [`ContentError::NotSingle`]. A lone row that failed
/// to decode yields its decode error.
fn expect_single<T>(query: &Query, mut rows: Rows<T>) -> Result<T, ContentError> {
    match (rows.total(), rows.items.pop(), rows.rejected.pop()) {
        (1, Some(item), _) => Ok(item),
        (1, None, Some(error)) => Err(error),
        (n, _, _) => Err(ContentError::NotSingle {
            collection: query.collection().table().to_string(),
            rows: n,
        }),
    }
}
