//! Runtime configuration for the front ends.

use std::env;
use std::net::SocketAddr;

const ADDR_ENV_VAR: &str = "EXPENSE_TRACKER_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Settings the binaries read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP front end binds to.
    pub listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_ADDR.parse().unwrap(),
        }
    }
}

impl Config {
    /// Reads overrides from the environment, falling back to defaults.
    ///
    /// A malformed `EXPENSE_TRACKER_ADDR` is ignored rather than fatal.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(raw) = env::var_os(ADDR_ENV_VAR) {
            match raw.to_string_lossy().parse() {
                Ok(addr) => config.listen_addr = addr,
                Err(_) => {
                    tracing::warn!(
                        "Ignoring malformed {} value, using {}",
                        ADDR_ENV_VAR,
                        config.listen_addr
                    );
                }
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_the_original_port() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 3000);
    }
}
