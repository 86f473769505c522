//! Mapping of caller-facing options onto [`Query`] restrictions

use super::query::{Collection, Query};
use crate::contract::{PropertyFilters, RecordStatus};

pub const STATUS: &str = "status";
pub const SLUG: &str = "slug";
pub const PROPERTY_TYPE: &str = "property_type";
pub const PRICE: &str = "price";
pub const CITY: &str = "address_city";
pub const BEDROOMS: &str = "bedrooms";
pub const FEATURED: &str = "featured";
pub const CREATED_AT: &str = "created_at";
pub const PUBLISHED_AT: &str = "published_at";

/// Columns searched by free-text property search
pub const SEARCH_COLUMNS: &[&str] = &["title", "description", "address_neighborhood"];

/// Base query restricted to records visible to this layer
pub fn published(collection: Collection) -> Query {
    Query::on(collection).eq(STATUS, RecordStatus::Published.as_str())
}

/// Add one conjunctive restriction per present option
pub fn apply_property_filters(mut query: Query, filters: &PropertyFilters) -> Query {
    if let Some(property_type) = non_empty(&filters.property_type) {
        query = query.eq(PROPERTY_TYPE, property_type);
    }
    if let Some(min_price) = filters.min_price {
        query = query.gte(PRICE, min_price);
    }
    if let Some(max_price) = filters.max_price {
        query = query.lte(PRICE, max_price);
    }
    if let Some(city) = non_empty(&filters.city) {
        query = query.eq(CITY, city);
    }
    if let Some(bedrooms) = filters.bedrooms {
        query = query.gte(BEDROOMS, bedrooms);
    }
    if filters.featured {
        query = query.eq(FEATURED, true);
    }
    query
}

/// Add the free-text condition when `term` has content
pub fn apply_search_term(query: Query, term: &str) -> Query {
    let term = term.trim();
    if term.is_empty() {
        query
    } else {
        query.any_contains(SEARCH_COLUMNS, term)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
