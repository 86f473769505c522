//! Site Content Module
//!
//! Data layer of the real-estate website: a company provider caching the
//! published company settings, and a query layer over the `company_settings`,
//! `properties`, `blog_posts` and `branding` collections of a PostgREST
//! backend. Query operations never fail towards callers; failures are
//! reported and replaced by empty fallbacks.

// Public exports
pub mod contract;
pub use contract::{
    client::SiteContentApi, error::ContentError, BlogPost, Branding, CompanyAddress,
    CompanyBranding, CompanyBusiness, CompanyContact, CompanySettings, CompanySocial, Property,
    PropertyFilters, RecordStatus,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::SiteContentModule;

pub mod api;
pub mod domain;
pub mod infra;
