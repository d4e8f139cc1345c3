//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check both upstream origins are usable base URLs
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Keep the upstream deadline inside the inbound one
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("{field} {value:?} is not a usable origin: {reason}")]
    Origin {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("upstream.timeout_secs ({upstream}) must be shorter than timeouts.request_secs ({inbound})")]
    UpstreamTimeoutNotShorter { upstream: u64, inbound: u64 },

    #[error("assets.extensions entry {0:?} must start with '.'")]
    Extension(String),

    #[error("assets.favicon must not be empty")]
    EmptyFavicon,

    #[error("observability.metrics_address {0:?} is not a socket address")]
    MetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    check_origin("upstream.data_origin", &config.upstream.data_origin, &mut errors);
    check_origin("upstream.asset_origin", &config.upstream.asset_origin, &mut errors);

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.timeout_secs"));
    }
    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.connect_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }
    if config.upstream.timeout_secs >= config.timeouts.request_secs {
        errors.push(ValidationError::UpstreamTimeoutNotShorter {
            upstream: config.upstream.timeout_secs,
            inbound: config.timeouts.request_secs,
        });
    }

    for ext in &config.assets.extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            errors.push(ValidationError::Extension(ext.clone()));
        }
    }
    if config.assets.favicon.trim().is_empty() {
        errors.push(ValidationError::EmptyFavicon);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_origin(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    let reason = match Url::parse(value) {
        Err(e) => Some(e.to_string()),
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            Some(format!("unsupported scheme {}", url.scheme()))
        }
        Ok(url) if url.host_str().is_none() => Some("missing host".to_string()),
        Ok(url) if url.query().is_some() || url.fragment().is_some() => {
            Some("query and fragment are not allowed".to_string())
        }
        Ok(_) => None,
    };

    if let Some(reason) = reason {
        errors.push(ValidationError::Origin {
            field,
            value: value.to_string(),
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ProxyConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.upstream.data_origin = "ftp://example.com".into();
        config.upstream.asset_origin = "example.com".into();
        config.assets.extensions = vec!["png".into()];
        config.assets.favicon = " ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::BindAddress("not-an-address".into())));
        assert!(errors.contains(&ValidationError::Extension("png".into())));
        assert!(errors.contains(&ValidationError::EmptyFavicon));
    }

    #[test]
    fn test_upstream_timeout_must_be_shorter_than_inbound() {
        let mut config = ProxyConfig::default();
        config.upstream.timeout_secs = 30;
        config.timeouts.request_secs = 30;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UpstreamTimeoutNotShorter {
                upstream: 30,
                inbound: 30
            }]
        );
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let mut config = ProxyConfig::default();
        config.upstream.connect_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::ZeroTimeout("upstream.connect_timeout_secs")]
        );
    }

    #[test]
    fn test_origin_with_query_rejected() {
        let mut config = ProxyConfig::default();
        config.upstream.data_origin = "https://api.example.com/?key=1".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            &errors[0],
            ValidationError::Origin { field: "upstream.data_origin", .. }
        ));
    }
}
