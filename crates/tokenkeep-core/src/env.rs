//! Environment variable handling.

use std::env;

/// Environment variable holding an explicit config file path.
pub const CONFIG_VAR: &str = "TOKENKEEP_CONFIG";

/// Environment variable overriding `store.service`.
pub const SERVICE_VAR: &str = "TOKENKEEP_SERVICE";

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_var_missing() {
        assert!(get_var("TOKENKEEP_TEST_DEFINITELY_UNSET").is_none());
    }

    #[test]
    fn test_get_var_empty_is_none() {
        env::set_var("TOKENKEEP_TEST_EMPTY", "");
        assert!(get_var("TOKENKEEP_TEST_EMPTY").is_none());
        env::remove_var("TOKENKEEP_TEST_EMPTY");
    }
}
