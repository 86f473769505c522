//! Domain layer - query composition, services and the company provider

pub mod events;
pub mod filters;
pub mod provider;
pub mod query;
pub mod repository;
pub mod service;

pub use events::{FailureReporter, NoOpFailureReporter, QueryFailure, TracingFailureReporter};
pub use provider::{CompanyProvider, CompanyState, LoadPhase, ProviderDefaults};
pub use query::{Collection, Query};
pub use repository::{ContentRepository, Rows};
pub use service::Service;
