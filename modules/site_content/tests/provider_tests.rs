//! Company provider and module lifecycle tests

mod common;

use common::{client_over, company_row, print_test_header, seeded_source, RecordingReporter};
use site_content::domain::provider::{LOAD_ERROR_MESSAGE, REFRESH_ERROR_MESSAGE};
use site_content::domain::{Collection, CompanyProvider, LoadPhase, ProviderDefaults};
use site_content::infra::storage::InMemorySource;
use site_content::{Config, ContentError, SiteContentApi, SiteContentModule};
use std::sync::Arc;

fn provider_over(source: Arc<InMemorySource>) -> (CompanyProvider, Arc<RecordingReporter>) {
    let (client, reporter) = client_over(source);
    let provider = CompanyProvider::new(Arc::new(client), ProviderDefaults::default());
    (provider, reporter)
}

#[tokio::test]
async fn test_load_populates_company_and_views() {
    print_test_header(
        "test_load_populates_company_and_views",
        &["A successful load caches the published record and fills every derived view."],
    );
    let (provider, reporter) = provider_over(seeded_source());

    assert_eq!(provider.snapshot().phase, LoadPhase::Uninitialized);
    provider.load().await;

    let state = provider.snapshot();
    assert_eq!(state.phase, LoadPhase::Ready);
    assert!(!state.loading());
    assert!(state.error.is_none());
    assert_eq!(provider.display_name(), "Horizonte Imóveis");

    let address = provider.address().expect("address view");
    assert_eq!(address.city.as_deref(), Some("São Paulo"));
    assert_eq!(address.country, "Brasil");
    assert_eq!(
        provider.formatted_address(),
        "Rua Oscar Freire, 1200, Sala 4, Jardins, São Paulo - SP, CEP: 01426-001, Brasil"
    );

    let contact = provider.contact_or_default();
    assert_eq!(contact.whatsapp.as_deref(), Some("11988887777"));
    assert_eq!(
        provider.business().expect("business view").creci.as_deref(),
        Some("J-30123")
    );
    assert_eq!(
        provider.social().expect("social view").instagram.as_deref(),
        Some("@horizonteimoveis")
    );
    assert_eq!(
        provider.branding().expect("branding view").logo.as_deref(),
        Some("https://cdn.horizonte.com.br/logo.svg")
    );
    assert!(reporter.failures().is_empty());
}

#[tokio::test]
async fn test_failed_load_then_refresh_recovers() {
    print_test_header(
        "test_failed_load_then_refresh_recovers",
        &[
            "Stage 1: backend down, load leaves no company and the load message.",
            "Stage 2: backend back, refresh fills the company and clears the message.",
        ],
    );
    let source = seeded_source();
    source.set_unavailable(true);
    let (provider, reporter) = provider_over(source.clone());

    println!("   Stage 1: load with backend unavailable");
    provider.load().await;
    let state = provider.snapshot();
    assert_eq!(state.phase, LoadPhase::Error);
    assert!(state.company.is_none());
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    assert_eq!(reporter.operations(), vec!["fetch_company_settings"]);

    // Derived views without a company
    assert_eq!(provider.display_name(), "Imobiliária");
    assert!(provider.address().is_none());
    assert!(provider.contact().is_none());
    assert_eq!(provider.formatted_address(), "");
    assert!(provider.contact_or_default().phone_main.is_none());

    println!("   Stage 2: refresh with backend available");
    source.set_unavailable(false);
    provider.refresh().await;
    let state = provider.snapshot();
    assert_eq!(state.phase, LoadPhase::Ready);
    assert!(state.error.is_none());
    assert_eq!(
        state.company.expect("company after refresh").company_name,
        "Horizonte Imóveis"
    );
}

#[tokio::test]
async fn test_failed_refresh_keeps_cached_company() {
    let source = seeded_source();
    let (provider, _) = provider_over(source.clone());

    provider.load().await;
    source.set_unavailable(true);
    provider.refresh().await;

    let state = provider.snapshot();
    assert_eq!(state.phase, LoadPhase::Error);
    assert_eq!(state.error.as_deref(), Some(REFRESH_ERROR_MESSAGE));
    assert_eq!(provider.display_name(), "Horizonte Imóveis");
}

#[tokio::test]
async fn test_two_published_companies_is_a_load_failure() {
    let source = seeded_source();
    source.insert(
        Collection::CompanySettings,
        company_row("c-2", "Outra Imobiliária", "published"),
    );
    let (provider, reporter) = provider_over(source);

    provider.load().await;

    assert!(provider.company().is_none());
    assert_eq!(provider.error().as_deref(), Some(LOAD_ERROR_MESSAGE));
    let failures = reporter.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(
        failures[0].error,
        ContentError::NotSingle {
            collection: "company_settings".to_string(),
            rows: 2
        }
    );
}

#[tokio::test]
async fn test_empty_company_name_uses_fallback() {
    let source = seeded_source();
    source.set_rows(
        Collection::CompanySettings,
        vec![company_row("c-1", "", "published")],
    );
    let (client, _) = client_over(source);
    let provider = CompanyProvider::new(
        Arc::new(client),
        ProviderDefaults {
            fallback_company_name: "Minha Imobiliária".to_string(),
            default_country: "Portugal".to_string(),
        },
    );

    provider.load().await;

    assert!(provider.company().is_some());
    assert_eq!(provider.display_name(), "Minha Imobiliária");
    assert_eq!(provider.address().expect("address").country, "Portugal");
}

#[tokio::test]
async fn test_subscribers_observe_whole_state_transitions() {
    let (provider, _) = provider_over(seeded_source());
    let mut rx = provider.subscribe();

    provider.load().await;

    assert!(rx.has_changed().expect("sender alive"));
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.phase, LoadPhase::Ready);
    assert!(state.company.is_some());
    assert!(!rx.has_changed().expect("sender alive"));
}

// ===== Module lifecycle =====

#[tokio::test]
async fn test_module_accessors_before_init() {
    let module = SiteContentModule::new();

    assert!(matches!(
        module.client(),
        Err(ContentError::NotInitialized { component: "client" })
    ));
    assert!(matches!(
        module.company(),
        Err(ContentError::NotInitialized { .. })
    ));
    assert!(matches!(
        module.admin_client(),
        Err(ContentError::NotInitialized { .. })
    ));
    assert!(module.start().await.is_err());
}

#[tokio::test]
async fn test_module_with_injected_repository() {
    print_test_header(
        "test_module_with_injected_repository",
        &["Module wired over an in-memory source serves the client and the provider."],
    );
    let module = SiteContentModule::new();
    let reporter = Arc::new(RecordingReporter::default());
    module
        .init_with_repository(
            Config::new("https://horizonte.supabase.co", "anon"),
            seeded_source(),
            reporter.clone(),
        )
        .expect("init should succeed");

    module.start().await.expect("start should succeed");

    let provider = module.company().expect("provider");
    assert_eq!(provider.display_name(), "Horizonte Imóveis");

    let client = module.client().expect("client");
    let limit = module.featured_limit().expect("limit");
    assert_eq!(limit, 6);
    assert_eq!(client.fetch_featured_properties(limit).await.len(), 3);

    assert_eq!(
        module.admin_client().err(),
        Some(ContentError::MissingConfig {
            name: "service_role_key".to_string()
        })
    );
    assert_eq!(
        module.admin_company().err(),
        Some(ContentError::MissingConfig {
            name: "service_role_key".to_string()
        })
    );
    assert!(reporter.failures().is_empty());
}

#[tokio::test]
async fn test_module_init_rejects_missing_values() {
    let module = SiteContentModule::new();

    let err = module
        .init(Config::new("https://horizonte.supabase.co", " "))
        .expect_err("blank anon key must be rejected");

    assert_eq!(
        err.downcast_ref::<ContentError>(),
        Some(&ContentError::MissingConfig {
            name: "anon_key".to_string()
        })
    );
    assert!(module.client().is_err());
}

#[tokio::test]
async fn test_module_init_with_service_key_exposes_admin_client() {
    let module = SiteContentModule::new();
    let mut config = Config::new("https://horizonte.supabase.co", "anon");
    config.service_role_key = Some("service".to_string());

    module.init(config).expect("init should succeed");

    assert!(module.client().is_ok());
    assert!(module.admin_client().is_ok());

    let admin_provider = module.admin_company().expect("admin provider");
    let public_provider = module.company().expect("public provider");
    assert!(!Arc::ptr_eq(&admin_provider, &public_provider));
    assert_eq!(admin_provider.snapshot().phase, LoadPhase::Uninitialized);
}
