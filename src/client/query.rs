use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::utils::constants::MARKET_QUERY_KEY;

/// Query parameter whose value may be explicitly omitted.
///
/// `None` drops the parameter from the request; `Some("")` sends it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: String,
    pub value: Option<String>,
}

impl QueryParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn optional(name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            value: value.map(Into::into),
        }
    }
}

/// ISO 3166-1 alpha-2 market, sent uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Market(String);

impl Market {
    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn as_query_value(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Market(code.to_ascii_lowercase()))
        } else {
            Err(format!("market '{}' is not a two-letter country code", s))
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_query_value())
    }
}

/// Clamp a page size into `1..=max`.
pub fn clamp_limit(limit: u32, max: u32) -> u32 {
    limit.clamp(1, max.max(1))
}

/// Join `path` onto the API base and append the present query parameters,
/// followed by the market when one is set.
///
/// A client market replaces any `market` the caller passed in `query`.
pub fn build_url(base: &Url, path: &str, query: &[QueryParam], market: Option<&Market>) -> Url {
    let mut url = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url.set_query(None);

    let present: Vec<(&str, &str)> = query
        .iter()
        .filter(|p| market.is_none() || p.name != MARKET_QUERY_KEY)
        .filter_map(|p| p.value.as_deref().map(|v| (p.name.as_str(), v)))
        .collect();

    if !present.is_empty() || market.is_some() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in present {
            pairs.append_pair(name, value);
        }
        if let Some(market) = market {
            pairs.append_pair(MARKET_QUERY_KEY, &market.as_query_value());
        }
    }
    url
}

#[cfg(test)]
mod test {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.spotify.com/v1").unwrap()
    }

    #[test]
    fn drops_absent_params_and_appends_market() {
        let market: Market = "de".parse().unwrap();
        let url = build_url(
            &base(),
            "/search",
            &[
                QueryParam::new("q", "abc"),
                QueryParam::optional("limit", None::<String>),
            ],
            Some(&market),
        );
        assert_eq!(url.path(), "/v1/search");
        assert_eq!(url.query(), Some("q=abc&market=DE"));
    }

    #[test]
    fn client_market_replaces_caller_market() {
        let market: Market = "de".parse().unwrap();
        let query = [QueryParam::new("market", "US"), QueryParam::new("q", "abc")];

        let url = build_url(&base(), "/search", &query, Some(&market));
        assert_eq!(url.query(), Some("q=abc&market=DE"));

        let url = build_url(&base(), "/search", &query, None);
        assert_eq!(url.query(), Some("market=US&q=abc"));
    }

    #[test]
    fn keeps_empty_string_values() {
        let url = build_url(&base(), "/search", &[QueryParam::new("q", "")], None);
        assert_eq!(url.query(), Some("q="));
    }

    #[test]
    fn no_query_when_nothing_present() {
        let url = build_url(
            &base(),
            "/tracks/abc",
            &[QueryParam::optional("fields", None::<String>)],
            None,
        );
        assert_eq!(url.as_str(), "https://api.spotify.com/v1/tracks/abc");
    }

    #[test]
    fn base_with_trailing_slash() {
        let base = Url::parse("http://127.0.0.1:8080/v1/").unwrap();
        let url = build_url(&base, "/albums/x", &[], None);
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/albums/x");
    }

    #[test]
    fn market_parsing() {
        assert_eq!("US".parse::<Market>().unwrap().code(), "us");
        assert_eq!("ch".parse::<Market>().unwrap().to_string(), "CH");
        assert!("deu".parse::<Market>().is_err());
        assert!("d1".parse::<Market>().is_err());
        assert!("".parse::<Market>().is_err());
    }

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(0, 50), 1);
        assert_eq!(clamp_limit(20, 50), 20);
        assert_eq!(clamp_limit(500, 50), 50);
    }
}
