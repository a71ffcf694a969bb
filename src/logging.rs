use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

/// Default filter directive when `RUST_LOG` is not set
fn default_directive(environment: Environment) -> &'static str {
    match environment {
        Environment::Local | Environment::Dev => "keyrhythm_server=debug,tower_http=debug",
        Environment::Prod => "keyrhythm_server=info,tower_http=info",
    }
}

/// Initialize tracing for the given environment
///
/// `local` logs human-readable lines; `dev` and `prod` log JSON objects.
pub fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(environment).into());
    let registry = tracing_subscriber::registry().with(filter);

    match environment {
        Environment::Local => registry.with(tracing_subscriber::fmt::layer()).init(),
        Environment::Dev | Environment::Prod => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prod_is_less_verbose() {
        assert!(default_directive(Environment::Local).contains("=debug"));
        assert!(default_directive(Environment::Dev).contains("=debug"));
        assert!(!default_directive(Environment::Prod).contains("debug"));
    }
}
