/// Configuration constants for the Fabric REST API
pub mod api {
    /// Default Fabric API host
    pub const DEFAULT_BASE_URL: &str = "https://api.fabric.microsoft.com/v1";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Items endpoint (nested under a workspace)
    pub const ITEMS: &str = "items";

    /// Query parameter carrying the continuation token between pages
    pub const CONTINUATION_TOKEN_PARAM: &str = "continuationToken";

    /// Upper bound on followed continuation pages for one listing
    pub const MAX_PAGES: u32 = 1000;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable names for the bearer token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] =
        &["FABRIC_TOKEN", "FABRIC_ACCESS_TOKEN", "AZURE_ACCESS_TOKEN"];
}

/// Managed runtime detection
pub mod environment {
    /// Variables set by the platform's hosted runtime; any non-empty one marks a managed context
    pub const MANAGED_CONTEXT_ENV_VARS: &[&str] =
        &["FABRIC_MANAGED_CONTEXT", "TRIDENT_RUNTIME_VERSION"];
}

/// Fixed values returned when real data cannot be obtained
pub mod placeholders {
    /// Id of the synthetic workspace returned by the fallback path
    pub const WORKSPACE_ID: &str = "placeholder-workspace-0000";

    /// Name of the synthetic workspace
    pub const WORKSPACE_NAME: &str = "Placeholder Workspace";

    /// Description of the synthetic workspace
    pub const WORKSPACE_DESCRIPTION: &str =
        "Placeholder workspace returned outside the managed platform context";

    /// Workspace size fallback: 50 MiB + 25 MiB + 100 KiB + 10 MiB
    pub const WORKSPACE_SIZE: u64 = 89_231_360;

    /// Tenant size fallback: two placeholder-sized workspaces
    pub const TENANT_SIZE: u64 = 178_462_720;
}

/// Default values for CLI
pub mod defaults {
    /// Default authentication method label
    pub const AUTH_METHOD: &str = "default";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_https() {
        assert!(api::DEFAULT_BASE_URL.starts_with("https://"));
        assert!(!api::DEFAULT_BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_credentials_env_vars() {
        assert_eq!(
            credentials::TOKEN_ENV_VARS,
            &["FABRIC_TOKEN", "FABRIC_ACCESS_TOKEN", "AZURE_ACCESS_TOKEN"]
        );
    }

    #[test]
    fn test_placeholder_sizes() {
        assert_eq!(
            placeholders::WORKSPACE_SIZE,
            50 * 1024 * 1024 + 25 * 1024 * 1024 + 100 * 1024 + 10 * 1024 * 1024
        );
        assert_eq!(placeholders::TENANT_SIZE, 2 * placeholders::WORKSPACE_SIZE);
        assert_ne!(placeholders::TENANT_SIZE, placeholders::WORKSPACE_SIZE);
    }
}
