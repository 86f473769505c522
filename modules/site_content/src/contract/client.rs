//! Native client trait consumed by UI-facing code
//!
//! Every operation settles to a value: failures are reported through the
//! configured failure hook and replaced by `None` or an empty `Vec`. Callers
//! never see a [`ContentError`](super::ContentError) from this trait.

use super::model::{BlogPost, Branding, CompanySettings, Property, PropertyFilters};
use async_trait::async_trait;

/// Site content API for in-process consumers
#[async_trait]
pub trait SiteContentApi: Send + Sync {
    // ===== Company =====

    /// The single published company settings row
    async fn fetch_company_settings(&self) -> Option<CompanySettings>;

    /// The singleton branding row
    async fn fetch_branding(&self) -> Option<Branding>;

    // ===== Properties =====

    /// Published properties narrowed by `filters`, featured first then newest
    async fn fetch_properties(&self, filters: &PropertyFilters) -> Vec<Property>;

    /// The published property with the given slug
    async fn fetch_property(&self, slug: &str) -> Option<Property>;

    /// Newest featured properties, at most `limit`
    async fn fetch_featured_properties(&self, limit: usize) -> Vec<Property>;

    /// Distinct property types of published properties
    async fn fetch_property_types(&self) -> Vec<String>;

    /// Distinct cities of published properties, sorted ascending
    async fn fetch_cities(&self) -> Vec<String>;

    /// Case-insensitive text search over title, description and neighborhood
    async fn search_properties(&self, term: &str, filters: &PropertyFilters) -> Vec<Property>;

    // ===== Blog =====

    /// Published posts, newest first; `None` or `Some(0)` means no limit
    async fn fetch_blog_posts(&self, limit: Option<usize>) -> Vec<BlogPost>;

    /// The published post with the given slug
    async fn fetch_blog_post(&self, slug: &str) -> Option<BlogPost>;
}
