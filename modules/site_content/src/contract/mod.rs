//! Contract layer - public API for in-process consumers
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::SiteContentApi;
pub use error::ContentError;
pub use model::{
    BlogPost, Branding, CompanyAddress, CompanyBranding, CompanyBusiness, CompanyContact,
    CompanySettings, CompanySocial, Property, PropertyFilters, RecordStatus, DEFAULT_COUNTRY,
    FALLBACK_COMPANY_NAME,
};
