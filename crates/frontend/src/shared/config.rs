//! Frontend configuration.
//!
//! Values are embedded at build time. The API base URL can be pinned with the
//! `ALMACEN_API_BASE` environment variable when building; otherwise it is
//! derived from the page location and `api_port`.

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_override: Option<&'static str>,
    pub api_port: u16,
    pub default_page_size: usize,
    pub page_size_options: &'static [usize],
    /// Width of a nested submenu flyout in CSS pixels, must match the stylesheet
    pub submenu_width: f64,
}

const CONFIG: AppConfig = AppConfig {
    api_base_override: option_env!("ALMACEN_API_BASE"),
    api_port: 3000,
    default_page_size: 25,
    page_size_options: &[10, 25, 50, 100],
    submenu_width: 224.0,
};

pub fn config() -> &'static AppConfig {
    &CONFIG
}

impl AppConfig {
    /// API base for a page served from `protocol//hostname`
    pub fn api_base_for(&self, protocol: &str, hostname: &str) -> String {
        if let Some(base) = self.api_base_override.filter(|b| !b.trim().is_empty()) {
            return base.trim_end_matches('/').to_string();
        }
        format!("{}//{}:{}", protocol, hostname, self.api_port)
    }
}
