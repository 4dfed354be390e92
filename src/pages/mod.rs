pub mod home;
pub mod results;
pub mod your_results;

use crate::config::Config;

/// Values available to every rendered page.
///
/// This is the explicit form of a site-wide template context: each handler
/// builds one from [`Config`] and embeds it in its template struct, so every
/// render receives the configured sheet API URL whether or not the page uses
/// it. The base layout exposes the URL to page scripts as a
/// `data-sheet-api-url` attribute on `<body>`; page scripts must tolerate
/// its absence.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub sheet_api_url: Option<String>,
}

impl PageContext {
    pub fn from_config(config: &Config) -> Self {
        PageContext {
            sheet_api_url: config.sheet_api_url.clone(),
        }
    }
}
