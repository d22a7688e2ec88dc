use log::{info, warn};

const URL_ATTRIBUTE: &str = "data-supabase-url";
const KEY_ATTRIBUTE: &str = "data-supabase-key";

const PLACEHOLDER_URL: &str = "YOUR_SUPABASE_URL";
const PLACEHOLDER_KEY: &str = "YOUR_SUPABASE_ANON_KEY";

/// Endpoint and public (anon) key of the hosted lead store.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
}

impl StoreConfig {
    /// Builds a config from the raw page attributes. Missing, blank or
    /// placeholder values mean lead capture stays disabled.
    pub fn from_attributes(url: Option<&str>, key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|u| !u.is_empty() && *u != PLACEHOLDER_URL)?;
        let key = key.map(str::trim).filter(|k| !k.is_empty() && *k != PLACEHOLDER_KEY)?;

        Some(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: key.to_string(),
        })
    }

    pub fn table_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

/// Reads the store settings off `<body>`.
pub fn load_store_config() -> Option<StoreConfig> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());

    let Some(body) = body else {
        warn!("No document body available, lead capture disabled");
        return None;
    };

    let url = body.get_attribute(URL_ATTRIBUTE);
    let key = body.get_attribute(KEY_ATTRIBUTE);

    match StoreConfig::from_attributes(url.as_deref(), key.as_deref()) {
        Some(config) => {
            info!("Lead store configured at {}", config.url);
            Some(config)
        }
        None => {
            warn!("Supabase credentials not configured. Lead capture will not work.");
            None
        }
    }
}
