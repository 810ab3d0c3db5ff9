use std::env;

/// Default trimmed-length floor for `content`.
pub const DEFAULT_MIN_CONTENT_CHARS: usize = 50;

/// Default ceiling on raw `content` length.
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub min_content_chars: usize,
    pub max_content_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_content_chars: DEFAULT_MIN_CONTENT_CHARS,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            min_content_chars: parse_usize(
                &lookup,
                "SUMMARY_MIN_CONTENT_CHARS",
                DEFAULT_MIN_CONTENT_CHARS,
            )?,
            max_content_chars: parse_usize(
                &lookup,
                "SUMMARY_MAX_CONTENT_CHARS",
                DEFAULT_MAX_CONTENT_CHARS,
            )?,
        };

        if config.min_content_chars > config.max_content_chars {
            return Err(format!(
                "SUMMARY_MIN_CONTENT_CHARS ({}) exceeds SUMMARY_MAX_CONTENT_CHARS ({})",
                config.min_content_chars, config.max_content_chars
            ));
        }

        Ok(config)
    }
}

fn parse_usize<F>(lookup: &F, key: &str, default: usize) -> Result<usize, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("{key}: {e}")),
        None => Ok(default),
    }
}
