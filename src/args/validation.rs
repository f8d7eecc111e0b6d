use super::types::Args;
use std::path::Path;

pub const SECRETS_LOCATIONS: [&str; 2] = ["/secrets/steam_api_key", "/run/secrets/steam_api_key"];

/// # Errors
///
/// Will return `Err` if the value is not an http(s) url
pub fn check_http_url(url: &str) -> Result<String, String> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(format!("'{url}' is not an http or https url."))
    }
}

fn read_key_file(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|contents| contents.trim().to_string())
        .filter(|key| !key.is_empty())
}

impl Args {
    /// Resolves the api key, reading it from a file when the value names one
    /// or when only a mounted secret is available.
    ///
    /// # Errors
    ///
    /// Will return `Err` if no api key can be found or the limits are zero
    pub fn validate(&mut self) -> Result<(), String> {
        let key = match self.steam_api_key.as_deref().map(str::trim) {
            Some(value) if Path::new(value).is_file() => read_key_file(Path::new(value)),
            Some(value) if !value.is_empty() => Some(value.to_string()),
            _ => SECRETS_LOCATIONS
                .iter()
                .find_map(|location| read_key_file(Path::new(location))),
        };
        match key {
            Some(key) => self.steam_api_key = Some(key),
            None => return Err("Must configure a Steam API Key".to_string()),
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be at least one second".to_string());
        }
        if self.cache_max_entries == 0 {
            return Err("Cache must be allowed at least one entry".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["steamwhat"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn http_urls_only() {
        assert_eq!(
            check_http_url("http://localhost:8080/").unwrap(),
            "http://localhost:8080"
        );
        assert!(check_http_url("ftp://example.com").is_err());
    }

    #[test]
    fn inline_key_is_kept() {
        let mut args = parse(&["--steam-api-key", "ABC123"]);
        args.validate().unwrap();
        assert_eq!(args.steam_api_key.as_deref(), Some("ABC123"));
    }

    #[test]
    fn zero_cache_entries_rejected() {
        let mut args = parse(&["--steam-api-key", "ABC123", "--cache-max-entries", "0"]);
        assert!(args.validate().is_err());
    }
}
