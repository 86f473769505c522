//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{
    BlogPost, Branding, CompanySettings, ContentError, Property, PropertyFilters, SiteContentApi,
};
use crate::domain::{Collection, FailureReporter, QueryFailure, Rows, Service};
use async_trait::async_trait;
use std::sync::Arc;

/// Native client that calls the domain service directly.
///
/// Errors stop here: each one is handed to the failure reporter and replaced
/// by the operation's fallback (`None` or an empty `Vec`). Listings keep the
/// rows that decoded and report each one that did not.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
    reporter: Arc<dyn FailureReporter>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>, reporter: Arc<dyn FailureReporter>) -> Self {
        Self { service, reporter }
    }

    fn settle<T: Default>(
        &self,
        operation: &'static str,
        collection: Collection,
        result: Result<T, ContentError>,
    ) -> T {
        match result {
            Ok(value) => value,
            Err(error) => {
                self.report(operation, collection, error);
                T::default()
            }
        }
    }

    fn settle_rows<T>(
        &self,
        operation: &'static str,
        collection: Collection,
        result: Result<Rows<T>, ContentError>,
    ) -> Vec<T> {
        match result {
            Ok(rows) => {
                for error in rows.rejected {
                    self.report(operation, collection, error);
                }
                rows.items
            }
            Err(error) => {
                self.report(operation, collection, error);
                Vec::new()
            }
        }
    }

    fn report(&self, operation: &'static str, collection: Collection, error: ContentError) {
        self.reporter.report(&QueryFailure::new(operation, collection, error));
    }
}

#[async_trait]
impl SiteContentApi for NativeClient {
    async fn fetch_company_settings(&self) -> Option<CompanySettings> {
        let result = self.service.company_settings().await.map(Some);
        self.settle("fetch_company_settings", Collection::CompanySettings, result)
    }

    async fn fetch_branding(&self) -> Option<Branding> {
        let result = self.service.branding().await.map(Some);
        self.settle("fetch_branding", Collection::Branding, result)
    }

    async fn fetch_properties(&self, filters: &PropertyFilters) -> Vec<Property> {
        let result = self.service.properties(filters).await;
        self.settle_rows("fetch_properties", Collection::Properties, result)
    }

    async fn fetch_property(&self, slug: &str) -> Option<Property> {
        let result = self.service.property(slug).await.map(Some);
        self.settle("fetch_property", Collection::Properties, result)
    }

    async fn fetch_featured_properties(&self, limit: usize) -> Vec<Property> {
        let result = self.service.featured_properties(limit).await;
        self.settle_rows("fetch_featured_properties", Collection::Properties, result)
    }

    async fn fetch_property_types(&self) -> Vec<String> {
        let result = self.service.property_types().await;
        self.settle("fetch_property_types", Collection::Properties, result)
    }

    async fn fetch_cities(&self) -> Vec<String> {
        let result = self.service.cities().await;
        self.settle("fetch_cities", Collection::Properties, result)
    }

    async fn search_properties(&self, term: &str, filters: &PropertyFilters) -> Vec<Property> {
        let result = self.service.search_properties(term, filters).await;
        self.settle_rows("search_properties", Collection::Properties, result)
    }

    async fn fetch_blog_posts(&self, limit: Option<usize>) -> Vec<BlogPost> {
        let result = self.service.blog_posts(limit).await;
        self.settle_rows("fetch_blog_posts", Collection::BlogPosts, result)
    }

    async fn fetch_blog_post(&self, slug: &str) -> Option<BlogPost> {
        let result = self.service.blog_post(slug).await.map(Some);
        self.settle("fetch_blog_post", Collection::BlogPosts, result)
    }
}
