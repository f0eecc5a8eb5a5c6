use tracing::{debug, warn};

use crate::config::WorkerConfig;

/// Platform hook for registering a background update worker.
pub trait WorkerRegistrar {
    fn is_supported(&self) -> bool;
    fn register(&mut self, script_url: &str) -> std::result::Result<(), String>;
}

/// Outcome of a registration attempt. None of these are errors to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Registered,
    Disabled,
    Unsupported,
    Failed(String),
}

/// Best-effort registration of the update worker.
pub fn register_update_worker<R: WorkerRegistrar + ?Sized>(
    registrar: &mut R,
    config: &WorkerConfig,
) -> Registration {
    if !config.enabled {
        return Registration::Disabled;
    }
    if !registrar.is_supported() {
        debug!("update worker not supported on this platform");
        return Registration::Unsupported;
    }
    match registrar.register(&config.script_url) {
        Ok(()) => {
            debug!(script = %config.script_url, "update worker registered");
            Registration::Registered
        }
        Err(e) => {
            warn!(script = %config.script_url, error = %e, "update worker registration failed");
            Registration::Failed(e)
        }
    }
}

/// Registrar for hosts without background workers, such as a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWorkers;

impl WorkerRegistrar for NoWorkers {
    fn is_supported(&self) -> bool {
        false
    }

    fn register(&mut self, _script_url: &str) -> std::result::Result<(), String> {
        Err("background workers are not available".to_string())
    }
}
