//! Environment variable configuration loading

use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use url::Url;

use super::error::{ConfigError, ConfigResult};
use super::schema::{Config, ProviderConfig, ProviderKind, ServerConfig, StoreConfig};
use super::secrets::SecretString;

/// Default provider API base when GEMINI_BASE_URL is unset.
const DEFAULT_PROVIDER_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model when GEMINI_MODEL is unset.
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default reply token cap when GEMINI_MAX_OUTPUT_TOKENS is unset.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;

/// Default store collection when FIRESTORE_COLLECTION is unset.
const DEFAULT_COLLECTION: &str = "terminals";

/// Default bind address when BABILADO_LISTEN_ADDR is unset.
const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

/// Assemble configuration from a variable lookup.
///
/// Absent or empty variables fall back to defaults or stay `None`;
/// present-but-malformed values fail loading outright.
pub(super) fn load(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Config> {
    let kind = parse_var(&lookup, "BABILADO_PROVIDER")?.unwrap_or(ProviderKind::Gemini);

    let endpoint = parse_var::<Url>(&lookup, "GEMINI_BASE_URL")?
        .or_else(|| Url::parse(DEFAULT_PROVIDER_URL).ok());
    let credential = raw_var(&lookup, "GEMINI_API_KEY").map(SecretString::new);
    let model = Some(raw_var(&lookup, "GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()));
    let temperature = parse_var(&lookup, "GEMINI_TEMPERATURE")?;
    let max_output_tokens =
        parse_var(&lookup, "GEMINI_MAX_OUTPUT_TOKENS")?.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS);

    let store_endpoint = parse_var::<Url>(&lookup, "FIRESTORE_URL")?;
    let store_credential = raw_var(&lookup, "FIRESTORE_API_KEY").map(SecretString::new);
    let collection =
        raw_var(&lookup, "FIRESTORE_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

    let listen_addr = parse_var(&lookup, "BABILADO_LISTEN_ADDR")?.unwrap_or(DEFAULT_LISTEN_ADDR);

    Ok(Config {
        provider: ProviderConfig {
            kind,
            endpoint,
            credential,
            model,
            temperature,
            max_output_tokens,
        },
        store: StoreConfig {
            endpoint: store_endpoint,
            credential: store_credential,
            collection,
        },
        server: ServerConfig { listen_addr },
    })
}

/// Read a variable, treating empty or whitespace-only values as unset.
fn raw_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read and parse a variable, reporting the variable name on failure.
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> ConfigResult<Option<T>>
where
    T::Err: Display,
{
    match raw_var(lookup, name) {
        Some(raw) => raw.parse::<T>().map(Some).map_err(|e| ConfigError::Invalid {
            name: name.to_string(),
            message: e.to_string(),
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_var_treats_blank_as_unset() {
        let lookup = |name: &str| match name {
            "SET" => Some("value".to_string()),
            "BLANK" => Some("   ".to_string()),
            "EMPTY" => Some(String::new()),
            _ => None,
        };
        assert_eq!(raw_var(&lookup, "SET"), Some("value".to_string()));
        assert_eq!(raw_var(&lookup, "BLANK"), None);
        assert_eq!(raw_var(&lookup, "EMPTY"), None);
        assert_eq!(raw_var(&lookup, "MISSING"), None);
    }

    #[test]
    fn test_parse_var_reports_variable_name() {
        let lookup = |name: &str| match name {
            "PORT" => Some("not-a-number".to_string()),
            _ => None,
        };
        match parse_var::<u32>(&lookup, "PORT") {
            Err(ConfigError::Invalid { name, .. }) => assert_eq!(name, "PORT"),
            other => panic!("expected invalid PORT, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_var_trims_before_parsing() {
        let lookup = |name: &str| match name {
            "TOKENS" => Some("  250  ".to_string()),
            _ => None,
        };
        let parsed = parse_var::<u32>(&lookup, "TOKENS").unwrap();
        assert_eq!(parsed, Some(250));
    }
}
