//! Environment configuration.

use std::env;

#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Use `...` instead of `…` as the truncation marker.
    pub ascii_ellipsis: bool,
    /// Default decorations fall back to identity functions.
    pub no_color: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            ascii_ellipsis: env_flag("TRELLIS_ASCII_ELLIPSIS"),
            no_color: env::var_os("NO_COLOR").is_some(),
        }
    }

    /// The truncation marker widgets use unless one is configured explicitly.
    pub fn default_ellipsis(&self) -> &'static str {
        if self.ascii_ellipsis {
            "..."
        } else {
            "\u{2026}"
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}
