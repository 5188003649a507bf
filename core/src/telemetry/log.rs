use log::{info, warn};

/// Thin handle over the `log` facade that tags records with one target.
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        warn!(target: self.target, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_manager_keeps_its_target() {
        let logger = LogManager::new("rmsdriver");
        assert_eq!(logger.target(), "rmsdriver");
        logger.record("no logger installed, record is dropped");
    }
}
