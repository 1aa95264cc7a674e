//! Accessor configuration

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::config::defaults;

/// Authentication method label.
///
/// The recognized labels are carried as variants; anything else is kept
/// verbatim in `Other` and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthMethod {
    #[default]
    Default,
    ServicePrincipal,
    Interactive,
    Other(String),
}

impl AuthMethod {
    /// Label as given by the caller
    pub fn as_str(&self) -> &str {
        match self {
            AuthMethod::Default => defaults::AUTH_METHOD,
            AuthMethod::ServicePrincipal => "service_principal",
            AuthMethod::Interactive => "interactive",
            AuthMethod::Other(label) => label,
        }
    }

    /// Whether the label is one of the recognized methods
    pub fn is_recognized(&self) -> bool {
        !matches!(self, AuthMethod::Other(_))
    }
}

impl FromStr for AuthMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "default" => AuthMethod::Default,
            "service_principal" => AuthMethod::ServicePrincipal,
            "interactive" => AuthMethod::Interactive,
            other => AuthMethod::Other(other.to_string()),
        })
    }
}

impl From<&str> for AuthMethod {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(method) => method,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable accessor configuration.
///
/// Every field is optional; nothing is validated until an operation needs it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    workspace_id: Option<String>,
    tenant_id: Option<String>,
    connection_string: Option<String>,
    authentication_method: AuthMethod,
}

impl StorageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Connection string, kept for context only and never parsed
    pub fn with_connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }

    pub fn with_authentication_method(mut self, method: impl Into<AuthMethod>) -> Self {
        self.authentication_method = method.into();
        self
    }

    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace_id.as_deref()
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn connection_string(&self) -> Option<&str> {
        self.connection_string.as_deref()
    }

    pub fn authentication_method(&self) -> &AuthMethod {
        &self.authentication_method
    }
}

impl fmt::Display for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StorageConfig(workspace_id={}, tenant_id={})",
            self.workspace_id.as_deref().unwrap_or("None"),
            self.tenant_id.as_deref().unwrap_or("None")
        )
    }
}

// Connection strings may embed account keys
impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("workspace_id", &self.workspace_id)
            .field("tenant_id", &self.tenant_id)
            .field(
                "connection_string",
                &self.connection_string.as_ref().map(|_| "***"),
            )
            .field("authentication_method", &self.authentication_method.as_str())
            .finish()
    }
}
