//! Client configuration: credentials and transport options.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{Result, StudioError};
use crate::models::ResourceId;

/// Fixed Cucumber Studio API endpoint.
pub const DEFAULT_API_URL: &str = "https://studio.cucumber.io/api";

const ENV_ACCESS_TOKEN: &str = "CUCUMBER_STUDIO_ACCESS_TOKEN";
const ENV_CLIENT: &str = "CUCUMBER_STUDIO_CLIENT";
const ENV_UID: &str = "CUCUMBER_STUDIO_UID";
const ENV_PROJECT_ID: &str = "CUCUMBER_STUDIO_PROJECT_ID";
const ENV_PROXY: &str = "CUCUMBER_STUDIO_PROXY";
const ENV_API_URL: &str = "CUCUMBER_STUDIO_API_URL";

/// The three values Cucumber Studio issues for API access.
///
/// Found under "Profile > API access" in the Cucumber Studio UI.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Sent as the `access-token` header.
    pub access_token: String,
    /// Sent as the `client` header.
    pub client: String,
    /// Sent as the `uid` header (usually the account e-mail).
    pub uid: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("uid", &self.uid)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    pub fn new(
        access_token: impl Into<String>,
        client: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            client: client.into(),
            uid: uid.into(),
        }
    }

    /// Read credentials from `CUCUMBER_STUDIO_ACCESS_TOKEN`,
    /// `CUCUMBER_STUDIO_CLIENT` and `CUCUMBER_STUDIO_UID`.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::ConfigMissing`] naming the first unset variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            access_token: required_var(ENV_ACCESS_TOKEN)?,
            client: required_var(ENV_CLIENT)?,
            uid: required_var(ENV_UID)?,
        })
    }

    /// Ensure no field is blank.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("access token", &self.access_token),
            ("client", &self.client),
            ("uid", &self.uid),
        ] {
            if value.trim().is_empty() {
                return Err(StudioError::ConfigMissing(format!("{field} is empty")));
            }
        }
        Ok(())
    }
}

/// Transport and convenience options applied when a client is built.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL. Only tests should change this.
    pub base_url: String,
    /// Default project used when a call does not name one.
    pub project_id: Option<ResourceId>,
    /// Proxy URL every request is routed through.
    pub proxy: Option<String>,
    /// Whole-request timeout. `None` (the default) leaves requests to
    /// the transport's own limits.
    pub timeout: Option<Duration>,
    /// Extra default headers. The authentication and content-negotiation
    /// headers are applied after these and win on a name clash.
    pub headers: Vec<(String, String)>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            project_id: None,
            proxy: None,
            timeout: None,
            headers: Vec::new(),
        }
    }
}

impl ClientOptions {
    /// Options from `CUCUMBER_STUDIO_PROJECT_ID`, `CUCUMBER_STUDIO_PROXY`
    /// and `CUCUMBER_STUDIO_API_URL`, all optional.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Some(url) = optional_var(ENV_API_URL) {
            options.base_url = url;
        }
        options.project_id = optional_var(ENV_PROJECT_ID).map(ResourceId::from);
        options.proxy = optional_var(ENV_PROXY);
        options
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<ResourceId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

fn required_var(name: &str) -> Result<String> {
    optional_var(name)
        .ok_or_else(|| StudioError::ConfigMissing(format!("{name} environment variable not set")))
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
