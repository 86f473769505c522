//! Module declaration and lifecycle

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::{ContentError, SiteContentApi};
use crate::domain::{
    CompanyProvider, ContentRepository, FailureReporter, ProviderDefaults, Service,
    TracingFailureReporter,
};
use crate::infra::storage::PostgrestSource;
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Site content module.
///
/// Constructed once per process, initialized with a [`Config`], then passed to
/// consumers, which obtain the query client and the company provider from it.
pub struct SiteContentModule {
    config: RwLock<Option<Config>>,
    client: RwLock<Option<Arc<NativeClient>>>,
    admin_client: RwLock<Option<Arc<NativeClient>>>,
    provider: RwLock<Option<Arc<CompanyProvider>>>,
}

impl Default for SiteContentModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(None),
            client: RwLock::new(None),
            admin_client: RwLock::new(None),
            provider: RwLock::new(None),
        }
    }
}

impl SiteContentModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire the module against the configured REST backend
    pub fn init(&self, config: Config) -> Result<()> {
        let config = config.validate()?;

        let public = Arc::new(PostgrestSource::new(
            &config.url,
            &config.rest_path,
            &config.anon_key,
        )?);

        let admin = match &config.service_role_key {
            Some(key) => Some(Arc::new(PostgrestSource::new(
                &config.url,
                &config.rest_path,
                key,
            )?) as Arc<dyn ContentRepository>),
            None => None,
        };

        self.wire(config, public, admin, Arc::new(TracingFailureReporter));
        tracing::info!("site content module initialized against REST backend");
        Ok(())
    }

    /// Wire the module against an arbitrary repository (in-memory, fixtures)
    pub fn init_with_repository(
        &self,
        config: Config,
        repo: Arc<dyn ContentRepository>,
        reporter: Arc<dyn FailureReporter>,
    ) -> Result<()> {
        let config = config.validate()?;
        self.wire(config, repo, None, reporter);
        tracing::info!("site content module initialized with injected repository");
        Ok(())
    }

    fn wire(
        &self,
        config: Config,
        public: Arc<dyn ContentRepository>,
        admin: Option<Arc<dyn ContentRepository>>,
        reporter: Arc<dyn FailureReporter>,
    ) {
        let client = Arc::new(NativeClient::new(
            Arc::new(Service::new(public)),
            reporter.clone(),
        ));
        let admin_client =
            admin.map(|repo| Arc::new(NativeClient::new(Arc::new(Service::new(repo)), reporter)));

        let provider = Arc::new(CompanyProvider::new(client.clone(), provider_defaults(&config)));

        *self.client.write() = Some(client);
        *self.admin_client.write() = admin_client;
        *self.provider.write() = Some(provider);
        *self.config.write() = Some(config);
    }

    /// Initial company settings load
    pub async fn start(&self) -> Result<()> {
        let provider = self.company()?;
        provider.load().await;
        Ok(())
    }

    // ===== Accessors =====

    /// Query client using the public key
    pub fn client(&self) -> Result<Arc<dyn SiteContentApi>, ContentError> {
        self.client
            .read()
            .clone()
            .map(|c| c as Arc<dyn SiteContentApi>)
            .ok_or(ContentError::NotInitialized { component: "client" })
    }

    /// Query client using the service-role key
    pub fn admin_client(&self) -> Result<Arc<dyn SiteContentApi>, ContentError> {
        if self.config.read().is_none() {
            return Err(ContentError::NotInitialized {
                component: "admin client",
            });
        }
        self.admin_client
            .read()
            .clone()
            .map(|c| c as Arc<dyn SiteContentApi>)
            .ok_or_else(|| ContentError::MissingConfig {
                name: "service_role_key".to_string(),
            })
    }

    /// The company provider
    pub fn company(&self) -> Result<Arc<CompanyProvider>, ContentError> {
        self.provider
            .read()
            .clone()
            .ok_or(ContentError::NotInitialized {
                component: "company provider",
            })
    }

    /// A fresh company provider reading through the service-role client
    pub fn admin_company(&self) -> Result<Arc<CompanyProvider>, ContentError> {
        let admin = self.admin_client()?;
        let defaults = self
            .config
            .read()
            .as_ref()
            .map(provider_defaults)
            .ok_or(ContentError::NotInitialized { component: "config" })?;
        Ok(Arc::new(CompanyProvider::new(admin, defaults)))
    }

    /// Featured list size from configuration
    pub fn featured_limit(&self) -> Result<usize, ContentError> {
        self.config
            .read()
            .as_ref()
            .map(|c| c.featured_limit)
            .ok_or(ContentError::NotInitialized { component: "config" })
    }
}

fn provider_defaults(config: &Config) -> ProviderDefaults {
    ProviderDefaults {
        fallback_company_name: config.fallback_company_name.clone(),
        default_country: config.default_country.clone(),
    }
}
