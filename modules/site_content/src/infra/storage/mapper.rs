//! Row to model mappers
//!
//! Conversions between backend rows and contract models

use super::entity;
use crate::contract::{BlogPost, Branding, CompanySettings, Property, RecordStatus};

// ===== Company Settings =====

impl TryFrom<entity::company_settings::Row> for CompanySettings {
    type Error = String;

    fn try_from(row: entity::company_settings::Row) -> Result<Self, Self::Error> {
        Ok(Self {
            status: row.status.parse::<RecordStatus>()?,
            id: row.id,
            company_name: row.company_name,
            address_street: row.address_street,
            address_number: row.address_number,
            address_complement: row.address_complement,
            address_neighborhood: row.address_neighborhood,
            address_city: row.address_city,
            address_state: row.address_state,
            address_zip_code: row.address_zip_code,
            address_country: row.address_country,
            phone_main: row.phone_main,
            phone_secondary: row.phone_secondary,
            whatsapp: row.whatsapp,
            email_main: row.email_main,
            email_contact: row.email_contact,
            cnpj: row.cnpj,
            inscricao_estadual: row.inscricao_estadual,
            creci: row.creci,
            business_hours: row.business_hours,
            website: row.website,
            instagram: row.instagram,
            facebook: row.facebook,
            linkedin: row.linkedin,
            logo_url: row.logo_url,
            favicon_url: row.favicon_url,
            company_description: row.company_description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// ===== Property =====

impl TryFrom<entity::property::Row> for Property {
    type Error = String;

    fn try_from(row: entity::property::Row) -> Result<Self, Self::Error> {
        Ok(Self {
            status: row.status.parse::<RecordStatus>()?,
            id: row.id,
            slug: row.slug,
            title: row.title,
            description: row.description,
            property_type: row.property_type,
            price: row.price,
            bedrooms: row.bedrooms,
            address_street: row.address_street,
            address_number: row.address_number,
            address_neighborhood: row.address_neighborhood,
            address_city: row.address_city,
            address_state: row.address_state,
            address_zip_code: row.address_zip_code,
            featured: row.featured.unwrap_or(false),
            created_at: row.created_at,
            updated_at: row.updated_at,
            extra: row.extra,
        })
    }
}

// ===== Blog Post =====

impl TryFrom<entity::blog_post::Row> for BlogPost {
    type Error = String;

    fn try_from(row: entity::blog_post::Row) -> Result<Self, Self::Error> {
        Ok(Self {
            status: row.status.parse::<RecordStatus>()?,
            id: row.id,
            slug: row.slug,
            title: row.title,
            excerpt: row.excerpt,
            content: row.content,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            extra: row.extra,
        })
    }
}

// ===== Branding =====

impl From<entity::branding::Row> for Branding {
    fn from(row: entity::branding::Row) -> Self {
        Self {
            id: row.id,
            logo_url: row.logo_url,
            favicon_url: row.favicon_url,
            primary_color: row.primary_color,
            secondary_color: row.secondary_color,
            updated_at: row.updated_at,
            extra: row.extra,
        }
    }
}
