//! Common test utilities and a shared real-estate catalog

#![allow(dead_code)]

use parking_lot::Mutex;
use serde_json::{json, Value};
use site_content::api::native::NativeClient;
use site_content::domain::{Collection, FailureReporter, QueryFailure, Service};
use site_content::infra::storage::InMemorySource;
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Reporter that keeps every failure for later inspection
#[derive(Default)]
pub struct RecordingReporter {
    failures: Mutex<Vec<QueryFailure>>,
}

impl RecordingReporter {
    pub fn failures(&self) -> Vec<QueryFailure> {
        self.failures.lock().clone()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.failures.lock().iter().map(|f| f.operation).collect()
    }
}

impl FailureReporter for RecordingReporter {
    fn report(&self, failure: &QueryFailure) {
        println!("   ⚠️  {} failed: {}", failure.operation, failure.error);
        self.failures.lock().push(failure.clone());
    }
}

pub fn company_row(id: &str, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "company_name": name,
        "address_street": "Rua Oscar Freire",
        "address_number": "1200",
        "address_complement": "Sala 4",
        "address_neighborhood": "Jardins",
        "address_city": "São Paulo",
        "address_state": "SP",
        "address_zip_code": "01426-001",
        "address_country": null,
        "phone_main": "1133334444",
        "phone_secondary": null,
        "whatsapp": "11988887777",
        "email_main": "contato@horizonte.com.br",
        "email_contact": "vendas@horizonte.com.br",
        "cnpj": "12345678000190",
        "inscricao_estadual": null,
        "creci": "J-30123",
        "business_hours": "Seg a Sex, 9h às 18h",
        "website": "https://horizonte.com.br",
        "instagram": "@horizonteimoveis",
        "facebook": null,
        "linkedin": null,
        "logo_url": "https://cdn.horizonte.com.br/logo.svg",
        "favicon_url": "https://cdn.horizonte.com.br/favicon.ico",
        "company_description": "Imóveis residenciais em São Paulo",
        "status": status,
        "created_at": "2024-01-10T12:00:00+00:00",
        "updated_at": "2024-06-01T08:30:00+00:00"
    })
}

#[allow(clippy::too_many_arguments)]
pub fn property_row(
    slug: &str,
    title: &str,
    property_type: &str,
    price: f64,
    bedrooms: u32,
    city: &str,
    neighborhood: &str,
    featured: bool,
    status: &str,
    created_at: &str,
) -> Value {
    json!({
        "id": format!("prop-{}", slug),
        "slug": slug,
        "title": title,
        "description": format!("{} em {}", title, neighborhood),
        "property_type": property_type,
        "price": price,
        "bedrooms": bedrooms,
        "address_street": null,
        "address_number": null,
        "address_neighborhood": neighborhood,
        "address_city": city,
        "address_state": "SP",
        "address_zip_code": null,
        "featured": featured,
        "status": status,
        "created_at": created_at,
        "updated_at": created_at,
        "images": ["https://cdn.horizonte.com.br/p/1.jpg"],
        "area_m2": 85
    })
}

pub fn blog_row(id: i64, slug: &str, status: &str, published_at: Option<&str>) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "title": format!("Post {}", slug),
        "excerpt": null,
        "content": "Conteúdo",
        "published_at": published_at,
        "status": status,
        "created_at": "2024-01-01T00:00:00+00:00",
        "updated_at": "2024-01-01T00:00:00+00:00",
        "author": "Equipe Horizonte"
    })
}

/// Catalog used by most tests:
/// - one published and one draft company record
/// - three published apartments (90k/120k/150k, featured false/true/true)
/// - published houses in Campinas and Santos, one draft penthouse
/// - three published posts and one draft
pub fn seeded_source() -> Arc<InMemorySource> {
    let source = Arc::new(InMemorySource::new());

    source.set_rows(
        Collection::CompanySettings,
        vec![
            company_row("c-draft", "Horizonte (rascunho)", "draft"),
            company_row("c-1", "Horizonte Imóveis", "published"),
        ],
    );

    source.set_rows(
        Collection::Properties,
        vec![
            property_row(
                "apto-vila-madalena",
                "Apartamento compacto",
                "apartment",
                90000.0,
                1,
                "São Paulo",
                "Vila Madalena",
                false,
                "published",
                "2024-03-01T10:00:00+00:00",
            ),
            property_row(
                "apto-jardim-paulista",
                "Apartamento amplo",
                "apartment",
                120000.0,
                2,
                "São Paulo",
                "Jardim Paulista",
                true,
                "published",
                "2024-03-05T10:00:00+00:00",
            ),
            property_row(
                "apto-moema",
                "Apartamento com varanda",
                "apartment",
                150000.0,
                3,
                "São Paulo",
                "Moema",
                true,
                "published",
                "2024-03-10T10:00:00+00:00",
            ),
            property_row(
                "casa-campinas",
                "Casa térrea",
                "house",
                450000.0,
                3,
                "Campinas",
                "Cambuí",
                false,
                "published",
                "2024-02-01T10:00:00+00:00",
            ),
            property_row(
                "casa-santos",
                "Casa com Jardim perto da praia",
                "house",
                600000.0,
                4,
                "Santos",
                "Gonzaga",
                true,
                "published",
                "2024-01-15T10:00:00+00:00",
            ),
            property_row(
                "cobertura-rascunho",
                "Cobertura no JARDIM Europa",
                "penthouse",
                2000000.0,
                4,
                "Guarujá",
                "Jardim Europa",
                true,
                "draft",
                "2024-04-01T10:00:00+00:00",
            ),
        ],
    );

    source.set_rows(
        Collection::BlogPosts,
        vec![
            blog_row(1, "dicas-financiamento", "published", Some("2024-02-01T09:00:00+00:00")),
            blog_row(2, "mercado-2024", "published", Some("2024-05-01T09:00:00+00:00")),
            blog_row(3, "documentacao", "published", Some("2024-03-01T09:00:00+00:00")),
            blog_row(4, "rascunho", "draft", None),
        ],
    );

    source.set_rows(
        Collection::Branding,
        vec![json!({
            "id": 1,
            "logo_url": "https://cdn.horizonte.com.br/logo.svg",
            "favicon_url": null,
            "primary_color": "#0b3d2e",
            "secondary_color": "#f2c14e",
            "updated_at": "2024-06-01T08:30:00+00:00",
            "font_family": "Inter"
        })],
    );

    source
}

/// Native client over `source` with a recording reporter
pub fn client_over(source: Arc<InMemorySource>) -> (NativeClient, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let client = NativeClient::new(Arc::new(Service::new(source)), reporter.clone());
    (client, reporter)
}
