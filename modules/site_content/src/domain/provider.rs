//! Company provider - the cached company settings record
//!
//! The provider owns one copy of the published [`CompanySettings`] for the
//! lifetime of the session. State is held in a `watch` channel and replaced
//! as a whole on every transition, so subscribers never observe a partially
//! updated value. Overlapping `load`/`refresh` calls are not coordinated: each
//! writes its outcome when it completes and the last writer wins.

use crate::contract::{
    CompanyAddress, CompanyBranding, CompanyBusiness, CompanyContact, CompanySettings,
    CompanySocial, SiteContentApi, DEFAULT_COUNTRY, FALLBACK_COMPANY_NAME,
};
use std::sync::Arc;
use tokio::sync::watch;

/// Shown when the initial load yields no company record
pub const LOAD_ERROR_MESSAGE: &str = "Não foi possível carregar as informações da empresa";

/// Shown when a refresh yields no company record
pub const REFRESH_ERROR_MESSAGE: &str = "Erro ao atualizar configurações da empresa";

/// Provider lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Uninitialized,
    Loading,
    Ready,
    Error,
}

/// Whole provider state, replaced atomically
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyState {
    pub phase: LoadPhase,
    pub company: Option<Arc<CompanySettings>>,
    /// User-facing message, distinct from the logged technical error
    pub error: Option<String>,
}

impl CompanyState {
    fn uninitialized() -> Self {
        Self {
            phase: LoadPhase::Uninitialized,
            company: None,
            error: None,
        }
    }

    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }
}

/// Display defaults applied by the derived accessors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDefaults {
    pub fallback_company_name: String,
    pub default_country: String,
}

impl Default for ProviderDefaults {
    fn default() -> Self {
        Self {
            fallback_company_name: FALLBACK_COMPANY_NAME.to_string(),
            default_country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

/// Long-lived service holding the company settings for UI consumers
pub struct CompanyProvider {
    api: Arc<dyn SiteContentApi>,
    defaults: ProviderDefaults,
    state: watch::Sender<CompanyState>,
}

impl CompanyProvider {
    pub fn new(api: Arc<dyn SiteContentApi>, defaults: ProviderDefaults) -> Self {
        let (state, _) = watch::channel(CompanyState::uninitialized());
        Self {
            api,
            defaults,
            state,
        }
    }

    /// Fetch the published company record and replace the cached state
    pub async fn load(&self) {
        self.fetch_into_state(LOAD_ERROR_MESSAGE).await;
    }

    /// Same as [`load`](Self::load), for externally triggered updates
    pub async fn refresh(&self) {
        self.fetch_into_state(REFRESH_ERROR_MESSAGE).await;
    }

    async fn fetch_into_state(&self, failure_message: &str) {
        self.state.send_modify(|state| state.phase = LoadPhase::Loading);

        match self.api.fetch_company_settings().await {
            Some(company) => {
                tracing::info!(company = %company.company_name, "company settings loaded");
                self.state.send_replace(CompanyState {
                    phase: LoadPhase::Ready,
                    company: Some(Arc::new(company)),
                    error: None,
                });
            }
            None => {
                tracing::warn!("company settings unavailable, keeping previous state");
                self.state.send_modify(|state| {
                    *state = CompanyState {
                        phase: LoadPhase::Error,
                        company: state.company.clone(),
                        error: Some(failure_message.to_string()),
                    }
                });
            }
        }
    }

    // ===== State access =====

    /// Current state
    pub fn snapshot(&self) -> CompanyState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state replacement
    pub fn subscribe(&self) -> watch::Receiver<CompanyState> {
        self.state.subscribe()
    }

    pub fn company(&self) -> Option<Arc<CompanySettings>> {
        self.state.borrow().company.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    // ===== Derived views =====

    /// Cached company name, or the fallback name
    pub fn display_name(&self) -> String {
        self.state
            .borrow()
            .company
            .as_ref()
            .map(|c| c.company_name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.defaults.fallback_company_name.clone())
    }

    pub fn address(&self) -> Option<CompanyAddress> {
        self.project(|c| c.address(&self.defaults.default_country))
    }

    pub fn contact(&self) -> Option<CompanyContact> {
        self.project(CompanySettings::contact)
    }

    pub fn business(&self) -> Option<CompanyBusiness> {
        self.project(CompanySettings::business)
    }

    pub fn social(&self) -> Option<CompanySocial> {
        self.project(CompanySettings::social)
    }

    pub fn branding(&self) -> Option<CompanyBranding> {
        self.project(CompanySettings::branding)
    }

    /// Single-line address, empty when no company is cached
    pub fn formatted_address(&self) -> String {
        self.address().map(|a| a.one_line()).unwrap_or_default()
    }

    /// Contact view, or an empty contact when no company is cached
    pub fn contact_or_default(&self) -> CompanyContact {
        self.contact().unwrap_or_default()
    }

    fn project<T>(&self, f: impl FnOnce(&CompanySettings) -> T) -> Option<T> {
        self.state.borrow().company.as_deref().map(f)
    }
}
