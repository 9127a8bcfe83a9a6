//! The page address: where a comparison vector comes from and where a
//! shareable one is written back.

use crate::Result;

/// Query parameter that carries a comparison vector.
pub const COMPARE_PARAM: &str = "compare";

pub trait ShareLocation {
    /// Scheme, host and port, e.g. `https://x.test`.
    fn origin(&self) -> String;

    fn path(&self) -> String;

    /// Query string, with or without the leading `?`.
    fn query(&self) -> String;

    /// Replaces the query string in place without navigating.
    fn replace_query(&mut self, query: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    pub origin: String,
    pub path: String,
    pub query: String,
}

impl MemoryLocation {
    pub fn new(origin: &str, path: &str, query: &str) -> Self {
        Self {
            origin: origin.to_string(),
            path: path.to_string(),
            query: query.to_string(),
        }
    }
}

impl ShareLocation for MemoryLocation {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn query(&self) -> String {
        self.query.clone()
    }

    fn replace_query(&mut self, query: &str) -> Result<()> {
        self.query = query.to_string();
        Ok(())
    }
}

/// Last value of `name` in `query`, percent-decoded.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == name)
        .last()
        .map(|(_, value)| value.into_owned())
}

/// `query` with every `name` pair removed and, if `value` is given, one
/// `name=value` pair appended. Other pairs are kept verbatim. Returns the
/// query with a leading `?`, or an empty string when nothing is left.
pub fn with_param(query: &str, name: &str, value: Option<&str>) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or_default();
            url::form_urlencoded::parse(key.as_bytes())
                .next()
                .map_or(true, |(k, _)| k != name)
        })
        .map(str::to_string)
        .collect();
    if let Some(value) = value {
        pairs.push(format!("{name}={value}"));
    }
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// `<origin><path>?compare=<text>`.
pub fn build_share_url(origin: &str, path: &str, text: &str) -> String {
    format!("{origin}{path}?{COMPARE_PARAM}={text}")
}
