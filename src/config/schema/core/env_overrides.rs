use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(backend) = std::env::var("TABLEMATE_OBSERVABILITY")
            && !backend.is_empty()
        {
            self.observability.backend = backend;
        }

        if let Ok(mood) = std::env::var("TABLEMATE_DEFAULT_MOOD")
            && !mood.is_empty()
        {
            self.discovery.default_mood = mood;
        }

        if let Ok(prefix) = std::env::var("TABLEMATE_CODE_PREFIX")
            && !prefix.trim().is_empty()
        {
            self.reservations.code_prefix = prefix;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{LazyLock, Mutex};

    // Held by every test that touches TABLEMATE_* variables.
    static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    /// Sets or clears one variable and puts the old value back on drop.
    struct EnvVarGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: &str) -> Self {
            Self::replace(key, Some(value))
        }

        fn unset(key: &'static str) -> Self {
            Self::replace(key, None)
        }

        fn replace(key: &'static str, value: Option<&str>) -> Self {
            let previous = std::env::var(key).ok();
            write_var(key, value);
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            write_var(self.key, self.previous.as_deref());
        }
    }

    fn write_var(key: &str, value: Option<&str>) {
        // SAFETY: callers hold ENV_LOCK, so no other test reads or writes the environment.
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    fn env_overrides_replace_config_values() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _backend = EnvVarGuard::set("TABLEMATE_OBSERVABILITY", "none");
        let _mood = EnvVarGuard::set("TABLEMATE_DEFAULT_MOOD", "cozy");
        let _prefix = EnvVarGuard::set("TABLEMATE_CODE_PREFIX", "TM2030");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.observability.backend, "none");
        assert_eq!(config.discovery.default_mood, "cozy");
        assert_eq!(config.reservations.code_prefix, "TM2030");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _backend = EnvVarGuard::set("TABLEMATE_OBSERVABILITY", "");
        let _mood = EnvVarGuard::unset("TABLEMATE_DEFAULT_MOOD");
        let _prefix = EnvVarGuard::set("TABLEMATE_CODE_PREFIX", "   ");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.observability.backend, "log");
        assert_eq!(config.discovery.default_mood, "happy");
        assert_eq!(config.reservations.code_prefix, "HF2024");
    }

    #[test]
    fn guard_restores_previous_value() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _outer = EnvVarGuard::set("TABLEMATE_DEFAULT_MOOD", "tired");
        {
            let _inner = EnvVarGuard::unset("TABLEMATE_DEFAULT_MOOD");
            assert!(std::env::var("TABLEMATE_DEFAULT_MOOD").is_err());
        }
        assert_eq!(std::env::var("TABLEMATE_DEFAULT_MOOD").unwrap(), "tired");
    }
}
