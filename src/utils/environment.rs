use std::env;

use anyhow::{Context, Result};

/// Get the name of the current user from the environment
pub fn get_username() -> Result<String> {
    env::var("USER")
        .or_else(|_| env::var("LOGNAME"))
        .context("USER environment variable not set")
}

/// Get the machine hostname, as used for scp retrieval commands
pub fn get_hostname() -> Result<String> {
    let name = hostname::get().context("Failed to read system hostname")?;
    Ok(name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_username_reads_user_var() {
        // Save original USER value
        let original_user = env::var("USER").ok();

        // SAFETY: Setting environment variables in tests is safe as long as:
        // 1. Tests don't run in parallel accessing the same env var (we restore it)
        // 2. No other threads are reading this variable concurrently
        // 3. We restore the original value afterwards
        unsafe {
            env::set_var("USER", "testuser");
        }

        let result = get_username();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "testuser");

        // Restore original USER
        if let Some(user) = original_user {
            unsafe {
                env::set_var("USER", user);
            }
        }
    }

    #[test]
    fn test_get_hostname_is_nonempty() {
        let hostname = get_hostname().unwrap();
        assert!(!hostname.is_empty());
    }
}
