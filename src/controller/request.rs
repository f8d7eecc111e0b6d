use crate::error::AppError;
use crate::model::SteamId;
use std::collections::HashMap;

pub const STEAMIDS_PARAM: &str = "steamids";

/// Reads the comma separated `steamids` query parameter.
///
/// # Errors
///
/// Will return `Err` if the parameter is absent or any token is not an integer
#[allow(clippy::implicit_hasher)]
pub fn parse_steamids(query: &HashMap<String, String>) -> Result<Vec<SteamId>, AppError> {
    let raw = query.get(STEAMIDS_PARAM).ok_or(AppError::MissingParameter)?;
    raw.split(',')
        .map(|token| {
            token
                .parse::<SteamId>()
                .map_err(|_| AppError::MalformedInput(token.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: Option<&str>) -> HashMap<String, String> {
        raw.map(|r| (STEAMIDS_PARAM.to_string(), r.to_string()))
            .into_iter()
            .collect()
    }

    #[test]
    fn parses_ids_in_order() {
        let ids = parse_steamids(&query(Some("12345, 6789,12345"))).unwrap();
        assert_eq!(ids, vec![SteamId(12345), SteamId(6789), SteamId(12345)]);
    }

    #[test]
    fn missing_param() {
        assert_eq!(parse_steamids(&query(None)), Err(AppError::MissingParameter));
    }

    #[test]
    fn empty_and_non_numeric_tokens_are_malformed() {
        assert_eq!(
            parse_steamids(&query(Some("12,,abc"))),
            Err(AppError::MalformedInput(String::new()))
        );
        assert_eq!(
            parse_steamids(&query(Some("12,abc"))),
            Err(AppError::MalformedInput("abc".into()))
        );
        assert!(parse_steamids(&query(Some(""))).is_err());
        assert!(parse_steamids(&query(Some("-4"))).is_err());
    }
}
