//! Managed runtime detection

use std::sync::Arc;

use log::debug;

use crate::config::environment;

/// Answers "are we running inside the platform's managed context?"
pub type ContextProbe = Arc<dyn Fn() -> bool + Send + Sync>;

/// Check the environment for the variables the hosted runtime sets
pub fn detect_managed_context() -> bool {
    detect_from_vars(environment::MANAGED_CONTEXT_ENV_VARS)
}

fn detect_from_vars(vars: &[&str]) -> bool {
    for var in vars {
        if std::env::var(var).is_ok_and(|v| !v.is_empty()) {
            debug!("Managed context detected via {}", var);
            return true;
        }
    }
    debug!("No managed context variables set ({:?})", vars);
    false
}

/// Probe that checks the real environment on every call
pub fn environment_probe() -> ContextProbe {
    Arc::new(detect_managed_context)
}

/// Probe with a fixed answer
pub fn fixed_probe(managed: bool) -> ContextProbe {
    Arc::new(move || managed)
}
