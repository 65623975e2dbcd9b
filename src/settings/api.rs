use url::Url;

use super::{ApiSettings, ConfigError};

/// Whether the binary was built for development or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

/// Remote operations exposed by the prediction service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Predict,
    PredictBatch,
    Retrain,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Predict, Endpoint::PredictBatch, Endpoint::Retrain];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Predict => "/predict",
            Endpoint::PredictBatch => "/predict/batch",
            Endpoint::Retrain => "/retrain",
        }
    }
}

/// Rewrites `<prefix>/:path*` to `<destination>/:path*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyRule {
    pub prefix: String,
    pub destination: Url,
}

impl ProxyRule {
    /// Rewrite a local path, or `None` when it is outside the prefix.
    ///
    /// `/apix/predict` does not match the prefix `/api`.
    pub fn rewrite(&self, path: &str) -> Option<Url> {
        let prefix = self.prefix.trim_end_matches('/');
        let rest = path.strip_prefix(prefix)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        let base = self.destination.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{rest}")).ok()
    }
}

/// Fully resolved endpoint URLs, built once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    mode: BuildMode,
    base_url: Url,
    predict: Url,
    predict_batch: Url,
    retrain: Url,
}

impl ApiConfig {
    /// Resolve endpoints for `mode`, routing through the proxy rule in development.
    pub fn resolve(mode: BuildMode, settings: &ApiSettings) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let resolve = |endpoint: Endpoint| -> Result<Url, ConfigError> {
            match mode {
                BuildMode::Production => join(&base_url, endpoint.path()),
                BuildMode::Development => {
                    let rule = proxy_rule(&settings.dev_proxy_prefix, &base_url)?;
                    let local = format!("{}{}", rule.prefix.trim_end_matches('/'), endpoint.path());
                    rule.rewrite(&local)
                        .ok_or_else(|| ConfigError::InvalidProxyPrefix(rule.prefix.clone()))
                }
            }
        };
        let predict = resolve(Endpoint::Predict)?;
        let predict_batch = resolve(Endpoint::PredictBatch)?;
        let retrain = resolve(Endpoint::Retrain)?;
        Ok(Self {
            mode,
            base_url,
            predict,
            predict_batch,
            retrain,
        })
    }

    /// Talk to `base_url` directly, bypassing any proxy rule.
    pub fn direct(base_url: Url) -> Self {
        let endpoint = |endpoint: Endpoint| {
            join(&base_url, endpoint.path()).unwrap_or_else(|_| base_url.clone())
        };
        let predict = endpoint(Endpoint::Predict);
        let predict_batch = endpoint(Endpoint::PredictBatch);
        let retrain = endpoint(Endpoint::Retrain);
        Self {
            mode: BuildMode::Production,
            base_url,
            predict,
            predict_batch,
            retrain,
        }
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> &Url {
        match endpoint {
            Endpoint::Predict => &self.predict,
            Endpoint::PredictBatch => &self.predict_batch,
            Endpoint::Retrain => &self.retrain,
        }
    }

    /// Short description for the status bar and logs.
    pub fn describe(&self) -> String {
        let host = self.base_url.host_str().unwrap_or("unknown host");
        match self.mode {
            BuildMode::Development => format!("{host} (dev proxy)"),
            BuildMode::Production => host.to_string(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
    }
    Ok(url)
}

fn proxy_rule(prefix: &str, destination: &Url) -> Result<ProxyRule, ConfigError> {
    let prefix = prefix.trim();
    if !prefix.starts_with('/') {
        return Err(ConfigError::InvalidProxyPrefix(prefix.to_string()));
    }
    Ok(ProxyRule {
        prefix: prefix.to_string(),
        destination: destination.clone(),
    })
}

// Appends instead of `Url::join` so a base with a path keeps it.
fn join(base: &Url, path: &str) -> Result<Url, ConfigError> {
    let joined = format!("{}{path}", base.as_str().trim_end_matches('/'));
    Url::parse(&joined).map_err(|source| ConfigError::InvalidBaseUrl {
        url: joined,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> Url {
        Url::parse("https://heart-disease-prediction-apis.onrender.com").unwrap()
    }

    #[test]
    fn proxy_rewrites_prefixed_paths_to_destination() {
        let rule = ProxyRule {
            prefix: "/api".into(),
            destination: host(),
        };
        assert_eq!(
            rule.rewrite("/api/predict").unwrap().as_str(),
            "https://heart-disease-prediction-apis.onrender.com/predict"
        );
        assert_eq!(
            rule.rewrite("/api/predict/batch").unwrap().as_str(),
            "https://heart-disease-prediction-apis.onrender.com/predict/batch"
        );
    }

    #[test]
    fn proxy_ignores_paths_outside_prefix() {
        let rule = ProxyRule {
            prefix: "/api".into(),
            destination: host(),
        };
        assert_eq!(rule.rewrite("/predict"), None);
        assert_eq!(rule.rewrite("/apix/predict"), None);
    }

    #[test]
    fn development_and_production_reach_same_endpoints() {
        let settings = ApiSettings::default();
        let dev = ApiConfig::resolve(BuildMode::Development, &settings).unwrap();
        let prod = ApiConfig::resolve(BuildMode::Production, &settings).unwrap();
        for endpoint in Endpoint::ALL {
            assert_eq!(dev.endpoint_url(endpoint), prod.endpoint_url(endpoint));
        }
        assert_eq!(
            prod.endpoint_url(Endpoint::Retrain).as_str(),
            "https://heart-disease-prediction-apis.onrender.com/retrain"
        );
        assert!(dev.describe().ends_with("(dev proxy)"));
    }

    #[test]
    fn base_url_path_is_preserved() {
        let settings = ApiSettings {
            base_url: "http://localhost:8000/v1/".into(),
            ..ApiSettings::default()
        };
        let config = ApiConfig::resolve(BuildMode::Production, &settings).unwrap();
        assert_eq!(
            config.endpoint_url(Endpoint::PredictBatch).as_str(),
            "http://localhost:8000/v1/predict/batch"
        );
    }

    #[test]
    fn rejects_bad_settings() {
        let bad_url = ApiSettings {
            base_url: "not a url".into(),
            ..ApiSettings::default()
        };
        assert!(matches!(
            ApiConfig::resolve(BuildMode::Production, &bad_url),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        let bad_scheme = ApiSettings {
            base_url: "ftp://example.com".into(),
            ..ApiSettings::default()
        };
        assert!(matches!(
            ApiConfig::resolve(BuildMode::Production, &bad_scheme),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        let bad_prefix = ApiSettings {
            dev_proxy_prefix: "api".into(),
            ..ApiSettings::default()
        };
        assert!(matches!(
            ApiConfig::resolve(BuildMode::Development, &bad_prefix),
            Err(ConfigError::InvalidProxyPrefix(_))
        ));
    }
}
