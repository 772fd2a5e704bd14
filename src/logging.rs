//! Tracing bootstrap for embedders.
//!
//! The engine only emits `tracing` events; installing a subscriber is the
//! embedding application's choice. This helper wires up a sensible default
//! (stderr formatter behind an `EnvFilter` directive) and is idempotent:
//! repeated calls with the directive already active are no-ops, while a
//! conflicting re-initialisation is rejected rather than silently ignored.

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

static ACTIVE_DIRECTIVE: OnceCell<String> = OnceCell::new();

/// Errors returned by [`init`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// Logging is already active with a different filter directive.
    #[error("logging already initialised with directive '{active}', refusing '{requested}'")]
    AlreadyInitialised {
        /// The directive logging was initialised with.
        active: String,
        /// The conflicting directive of this call.
        requested: String,
    },

    /// The filter directive could not be parsed.
    #[error("invalid filter directive '{directive}': {reason}")]
    InvalidDirective {
        /// The rejected directive.
        directive: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A global subscriber is already installed outside this helper.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),
}

/// Installs the default stderr subscriber filtered by `directive`
/// (e.g. `"info"` or `"taskbridge=debug"`).
///
/// # Errors
///
/// Returns [`LoggingError`] when the directive does not parse, when logging
/// was already initialised with a different directive, or when another
/// global subscriber is already installed.
pub fn init(directive: &str) -> Result<(), LoggingError> {
    if let Some(active) = ACTIVE_DIRECTIVE.get() {
        if active == directive {
            return Ok(());
        }
        return Err(LoggingError::AlreadyInitialised {
            active: active.clone(),
            requested: directive.to_owned(),
        });
    }

    let filter = EnvFilter::try_new(directive).map_err(|err| LoggingError::InvalidDirective {
        directive: directive.to_owned(),
        reason: err.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| LoggingError::Subscriber(err.to_string()))?;
    ACTIVE_DIRECTIVE.set(directive.to_owned()).ok();
    Ok(())
}
