//! Contract models for the site content module
//!
//! These models are transport-agnostic. NO serde derives - backend rows are
//! decoded in `infra::storage` and mapped into these types.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Country used when the company record does not carry one
pub const DEFAULT_COUNTRY: &str = "Brasil";

/// Display name used when no company record is cached
pub const FALLBACK_COMPANY_NAME: &str = "Imobiliária";

/// Lifecycle status of a backend record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordStatus {
    Draft,
    Published,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("unknown record status '{}'", other)),
        }
    }
}

/// The singleton company settings record
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySettings {
    pub id: String,
    pub company_name: String,
    pub address_street: Option<String>,
    pub address_number: Option<String>,
    pub address_complement: Option<String>,
    pub address_neighborhood: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip_code: Option<String>,
    pub address_country: Option<String>,
    pub phone_main: Option<String>,
    pub phone_secondary: Option<String>,
    pub whatsapp: Option<String>,
    pub email_main: Option<String>,
    pub email_contact: Option<String>,
    pub cnpj: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub creci: Option<String>,
    pub business_hours: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub company_description: Option<String>,
    pub status: RecordStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Postal address projection of [`CompanySettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyAddress {
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    /// Always set; falls back to the configured default country
    pub country: String,
}

/// Contact projection of [`CompanySettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyContact {
    pub phone_main: Option<String>,
    pub phone_secondary: Option<String>,
    pub whatsapp: Option<String>,
    pub email_main: Option<String>,
    pub email_contact: Option<String>,
}

/// Business registration projection of [`CompanySettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyBusiness {
    pub cnpj: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub creci: Option<String>,
    pub business_hours: Option<String>,
}

/// Social links projection of [`CompanySettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanySocial {
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
}

/// Branding assets projection of [`CompanySettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyBranding {
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub description: Option<String>,
}

impl CompanySettings {
    pub fn address(&self, default_country: &str) -> CompanyAddress {
        CompanyAddress {
            street: self.address_street.clone(),
            number: self.address_number.clone(),
            complement: self.address_complement.clone(),
            neighborhood: self.address_neighborhood.clone(),
            city: self.address_city.clone(),
            state: self.address_state.clone(),
            zip_code: self.address_zip_code.clone(),
            country: self
                .address_country
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| default_country.to_string()),
        }
    }

    pub fn contact(&self) -> CompanyContact {
        CompanyContact {
            phone_main: self.phone_main.clone(),
            phone_secondary: self.phone_secondary.clone(),
            whatsapp: self.whatsapp.clone(),
            email_main: self.email_main.clone(),
            email_contact: self.email_contact.clone(),
        }
    }

    pub fn business(&self) -> CompanyBusiness {
        CompanyBusiness {
            cnpj: self.cnpj.clone(),
            inscricao_estadual: self.inscricao_estadual.clone(),
            creci: self.creci.clone(),
            business_hours: self.business_hours.clone(),
        }
    }

    pub fn social(&self) -> CompanySocial {
        CompanySocial {
            website: self.website.clone(),
            instagram: self.instagram.clone(),
            facebook: self.facebook.clone(),
            linkedin: self.linkedin.clone(),
        }
    }

    pub fn branding(&self) -> CompanyBranding {
        CompanyBranding {
            logo: self.logo_url.clone(),
            favicon: self.favicon_url.clone(),
            description: self.company_description.clone(),
        }
    }
}

impl CompanyAddress {
    /// Single-line rendering: `street, number, complement, neighborhood,
    /// city - state, CEP: zip, country`. Absent parts are skipped.
    pub fn one_line(&self) -> String {
        let present = |v: &Option<String>| {
            v.as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let city_state = [present(&self.city), present(&self.state)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        let city_state = (!city_state.is_empty()).then(|| city_state.join(" - "));

        [
            present(&self.street),
            present(&self.number),
            present(&self.complement),
            present(&self.neighborhood),
            city_state,
            present(&self.zip_code).map(|zip| format!("CEP: {}", zip)),
            Some(self.country.clone()).filter(|c| !c.is_empty()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// A property listing
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<String>,
    pub price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub address_street: Option<String>,
    pub address_number: Option<String>,
    pub address_neighborhood: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip_code: Option<String>,
    pub featured: bool,
    pub status: RecordStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Remaining backend columns, untouched
    pub extra: Map<String, Value>,
}

/// A blog article
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub status: RecordStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Remaining backend columns, untouched
    pub extra: Map<String, Value>,
}

/// The singleton branding record
#[derive(Debug, Clone, PartialEq)]
pub struct Branding {
    pub id: String,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Remaining backend columns, untouched
    pub extra: Map<String, Value>,
}

/// Optional narrowing options for property listings.
///
/// Every present option adds one conjunctive restriction; `None`, empty
/// strings and `featured: false` impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilters {
    /// `property_type = value`
    pub property_type: Option<String>,
    /// `price >= value`
    pub min_price: Option<f64>,
    /// `price <= value`
    pub max_price: Option<f64>,
    /// `address_city = value`
    pub city: Option<String>,
    /// `bedrooms >= value`
    pub bedrooms: Option<u32>,
    /// `featured = true` when set
    pub featured: bool,
}

impl PropertyFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property_type(mut self, value: impl Into<String>) -> Self {
        self.property_type = Some(value.into());
        self
    }

    pub fn min_price(mut self, value: f64) -> Self {
        self.min_price = Some(value);
        self
    }

    pub fn max_price(mut self, value: f64) -> Self {
        self.max_price = Some(value);
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn bedrooms(mut self, value: u32) -> Self {
        self.bedrooms = Some(value);
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}
