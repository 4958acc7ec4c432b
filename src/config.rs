use crate::error::{
    BadEnvVarSnafu, InvalidBaseUrlSnafu, ParseNumberSnafu, RosterResult, UnusableBaseUrlSnafu,
};
use dotenvy::var;
use snafu::ResultExt;
use std::{env::VarError, num::NonZeroU64, sync::Arc, time::Duration};
use url::Url;

const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";
const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_PAGE_SIZE: &str = "5";
const DEFAULT_TIMEOUT_SECS: &str = "10";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    server_ip: Arc<str>,
    api_config: Arc<ApiConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            server_ip: env_var_or("ROSTER_SERVER_IP", DEFAULT_SERVER_IP)?.into(),
            api_config: Arc::new(ApiConfig::new()?),
        })
    }

    #[cfg(test)]
    pub fn for_api(api_config: ApiConfig) -> Self {
        Self {
            server_ip: DEFAULT_SERVER_IP.into(),
            api_config: Arc::new(api_config),
        }
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }
}

fn env_var_or(name: &'static str, default: &str) -> RosterResult<String> {
    match var(name) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(default.to_string()),
        Err(e) => Err(e).context(BadEnvVarSnafu { name }),
    }
}

#[derive(Debug)]
pub struct ApiConfig {
    base_url: Url,
    page_size: NonZeroU64,
    timeout: Duration,
}

impl ApiConfig {
    pub fn new() -> RosterResult<Self> {
        let base_url = env_var_or("STUDENTS_API_URL", DEFAULT_API_URL)?;
        let page_size = env_var_or("STUDENTS_PAGE_SIZE", DEFAULT_PAGE_SIZE)?
            .parse()
            .context(ParseNumberSnafu {
                name: "STUDENTS_PAGE_SIZE",
            })?;
        let timeout_secs = env_var_or("STUDENTS_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?
            .parse()
            .context(ParseNumberSnafu {
                name: "STUDENTS_API_TIMEOUT_SECS",
            })?;

        Self::from_parts(&base_url, page_size, Duration::from_secs(timeout_secs))
    }

    pub fn from_parts(base_url: &str, page_size: NonZeroU64, timeout: Duration) -> RosterResult<Self> {
        let parsed = Url::parse(base_url).context(InvalidBaseUrlSnafu {
            original: base_url,
        })?;
        snafu::ensure!(
            !parsed.cannot_be_a_base(),
            UnusableBaseUrlSnafu {
                original: base_url
            }
        );

        Ok(Self {
            base_url: parsed,
            page_size,
            timeout,
        })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub const fn page_size(&self) -> NonZeroU64 {
        self.page_size
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
