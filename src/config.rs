/// Application-level constants
pub const APP_NAME: &str = "Somnoscreen";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is unset: quiet dependencies,
/// debug-level events from this crate (session transitions, catalog load).
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_CRATE_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_somnoscreen() {
        assert_eq!(APP_NAME, "Somnoscreen");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }

    #[test]
    fn default_filter_enables_crate_debug() {
        let filter = default_log_filter();
        assert!(filter.starts_with("info,"));
        assert!(filter.contains("somnoscreen=debug"));
    }
}
