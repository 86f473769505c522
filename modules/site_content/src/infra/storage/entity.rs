//! Backend row shapes, one module per collection
//!
//! Rows mirror the JSON the backend returns. Columns not named here are kept
//! in `extra` so records reach callers untouched.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept both text and numeric primary keys
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Accept RFC 3339 timestamps and zone-less `timestamp` columns (read as UTC)
fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
}

/// `company_settings` table
pub mod company_settings {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct Row {
        #[serde(deserialize_with = "super::id_string")]
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
        pub status: String,
        #[serde(default, deserialize_with = "super::timestamp")]
        pub created_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "super::timestamp")]
        pub updated_at: Option<DateTime<Utc>>,
    }
}

/// `properties` table
pub mod property {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;
    use serde_json::{Map, Value};

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct Row {
        #[serde(deserialize_with = "super::id_string")]
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
        pub featured: Option<bool>,
        pub status: String,
        #[serde(default, deserialize_with = "super::timestamp")]
        pub created_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "super::timestamp")]
        pub updated_at: Option<DateTime<Utc>>,
        #[serde(flatten)]
        pub extra: Map<String, Value>,
    }
}

/// `blog_posts` table
pub mod blog_post {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;
    use serde_json::{Map, Value};

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct Row {
        #[serde(deserialize_with = "super::id_string")]
        pub id: String,
        pub slug: String,
        pub title: Option<String>,
        pub excerpt: Option<String>,
        pub content: Option<String>,
        #[serde(default, deserialize_with = "super::timestamp")]
        pub published_at: Option<DateTime<Utc>>,
        pub status: String,
        #[serde(default, deserialize_with = "super::timestamp")]
        pub created_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "super::timestamp")]
        pub updated_at: Option<DateTime<Utc>>,
        #[serde(flatten)]
        pub extra: Map<String, Value>,
    }
}

/// `branding` table
pub mod branding {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;
    use serde_json::{Map, Value};

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct Row {
        #[serde(deserialize_with = "super::id_string")]
        pub id: String,
        pub logo_url: Option<String>,
        pub favicon_url: Option<String>,
        pub primary_color: Option<String>,
        pub secondary_color: Option<String>,
        #[serde(default, deserialize_with = "super::timestamp")]
        pub updated_at: Option<DateTime<Utc>>,
        #[serde(flatten)]
        pub extra: Map<String, Value>,
    }
}
