//! Process configuration read from the environment

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";
const DEFAULT_API_VERSION: &str = "v21.0";
const DEFAULT_QUOTE_URL: &str = "https://www.goldapi.io/api";
const DEFAULT_CURRENCY: &str = "INR";

/// Top-level configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub port: u16,
    pub whatsapp: WhatsAppConfig,
    pub quote: QuoteConfig,
}

/// WhatsApp Cloud API settings
#[derive(Debug, Clone, Default)]
pub struct WhatsAppConfig {
    /// Bearer token for the Graph API
    pub access_token: Option<String>,
    /// Shared secret for the webhook verification handshake
    pub verify_token: Option<String>,
    /// App secret for `X-Hub-Signature-256`; signature checks are skipped when unset
    pub app_secret: Option<String>,
    pub api_version: String,
    pub graph_url: String,
}

/// Commodity quote service settings
#[derive(Debug, Clone, Default)]
pub struct QuoteConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub currency: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = get("GOLDCHAT_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            whatsapp: WhatsAppConfig {
                access_token: get("WHATSAPP_TOKEN"),
                verify_token: get("WHATSAPP_VERIFY_TOKEN"),
                app_secret: get("WHATSAPP_APP_SECRET"),
                api_version: get("WHATSAPP_API_VERSION")
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
                graph_url: get("WHATSAPP_GRAPH_URL")
                    .unwrap_or_else(|| DEFAULT_GRAPH_URL.to_string()),
            },
            quote: QuoteConfig {
                base_url: get("QUOTE_API_URL").unwrap_or_else(|| DEFAULT_QUOTE_URL.to_string()),
                api_key: get("QUOTE_API_KEY"),
                currency: get("QUOTE_CURRENCY")
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
                    .to_ascii_uppercase(),
            },
        }
    }
}
