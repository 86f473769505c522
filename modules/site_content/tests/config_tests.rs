//! Configuration loading from environment and YAML

mod common;

use common::print_test_header;
use figment::Jail;
use site_content::{Config, ContentError};
use std::path::Path;

#[test]
fn test_load_from_backend_environment() {
    print_test_header(
        "test_load_from_backend_environment",
        &["SUPABASE_* variables provide the credentials, defaults fill the rest."],
    );
    Jail::expect_with(|jail| {
        jail.set_env("SUPABASE_URL", "https://horizonte.supabase.co");
        jail.set_env("SUPABASE_ANON_KEY", "anon");
        jail.set_env("SUPABASE_SERVICE_ROLE_KEY", "service");

        let config = Config::from_env().expect("config should load");

        assert_eq!(config.url, "https://horizonte.supabase.co");
        assert_eq!(config.anon_key, "anon");
        assert_eq!(config.service_role_key.as_deref(), Some("service"));
        assert_eq!(config.rest_path, "/rest/v1");
        assert_eq!(config.featured_limit, 6);
        Ok(())
    });
}

#[test]
fn test_missing_anon_key_is_reported_by_name() {
    Jail::expect_with(|jail| {
        jail.set_env("SUPABASE_URL", "https://horizonte.supabase.co");

        let err = Config::from_env().expect_err("anon key is required");

        assert_eq!(
            err,
            ContentError::MissingConfig {
                name: "anon_key".to_string()
            }
        );
        Ok(())
    });
}

#[test]
fn test_yaml_file_overlaid_by_environment() {
    print_test_header(
        "test_yaml_file_overlaid_by_environment",
        &["YAML supplies tunables; SITE_CONTENT_* and SUPABASE_* override it."],
    );
    Jail::expect_with(|jail| {
        jail.create_file(
            "site-content.yaml",
            r#"
url: https://from-file.supabase.co
anon_key: file-key
featured_limit: 4
fallback_company_name: Horizonte
default_country: Brasil
"#,
        )?;
        jail.set_env("SUPABASE_URL", "https://from-env.supabase.co");
        jail.set_env("SITE_CONTENT_FEATURED_LIMIT", "3");

        let config =
            Config::load(Some(Path::new("site-content.yaml"))).expect("config should load");

        assert_eq!(config.url, "https://from-env.supabase.co");
        assert_eq!(config.anon_key, "file-key");
        assert_eq!(config.featured_limit, 3);
        assert_eq!(config.fallback_company_name, "Horizonte");
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("SUPABASE_URL", "https://horizonte.supabase.co");
        jail.set_env("SUPABASE_ANON_KEY", "anon");
        jail.set_env("SITE_CONTENT_FEATURED_LIMIT", "0");

        let err = Config::from_env().expect_err("zero limit is invalid");
        assert!(matches!(err, ContentError::InvalidConfig { .. }));

        jail.set_env("SITE_CONTENT_FEATURED_LIMIT", "many");
        let err = Config::from_env().expect_err("non-numeric limit is invalid");
        assert!(err.is_config());
        Ok(())
    });
}

#[test]
fn test_unknown_keys_are_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "site-content.yaml",
            "url: https://x.supabase.co\nanon_key: k\nfeatured: 3\n",
        )?;

        let err = Config::load(Some(Path::new("site-content.yaml")))
            .expect_err("unknown key must fail");
        assert!(matches!(err, ContentError::InvalidConfig { .. }));
        Ok(())
    });
}
