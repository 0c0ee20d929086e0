pub use crate::aggregate::MonthOrder;

/// Spreadsheet web app the dashboard talks to when no override is compiled in.
pub const DEFAULT_API_URL: &str =
    "https://script.google.com/macros/s/AKfycbxoFsXJ_CGL9pgIPjl9xLNghnfug0XNYKpAqdEOcnp8sq6lFd943MtmuSe5wMZ2w6UHuA/exec";

pub const DEFAULT_TOP_REPS: usize = 10;

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Endpoint used for both reads (GET) and writes (POST).
    pub api_url: String,
    /// How many sales reps the ranking chart keeps.
    pub top_reps: usize,
    pub month_order: MonthOrder,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            top_reps: DEFAULT_TOP_REPS,
            month_order: MonthOrder::default(),
        }
    }
}

impl DashboardConfig {
    /// Default config with the endpoint taken from `SALES_API_URL` at build
    /// time, if it was set and non-empty.
    pub fn from_build_env() -> Self {
        Self::with_api_url_override(option_env!("SALES_API_URL"))
    }

    fn with_api_url_override(api_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_url = url.to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.top_reps, 10);
        assert_eq!(config.month_order, MonthOrder::Encounter);
    }

    #[test]
    fn test_api_url_override() {
        let config = DashboardConfig::with_api_url_override(Some(" http://localhost:8787/exec "));
        assert_eq!(config.api_url, "http://localhost:8787/exec");
        assert_eq!(DashboardConfig::with_api_url_override(Some("")).api_url, DEFAULT_API_URL);
        assert_eq!(DashboardConfig::with_api_url_override(None).api_url, DEFAULT_API_URL);
    }
}
