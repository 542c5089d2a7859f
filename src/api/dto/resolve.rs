//! DTOs for the resolve endpoint.

use serde::Serialize;

/// Query string accepted by the resolve endpoint.
///
/// Every field is optional so that a missing `query` produces the API's own
/// 400 body. Built from raw key/value pairs: a repeated key keeps its last
/// value and unknown keys are ignored.
#[derive(Debug, Default)]
pub struct ResolveQuery {
    /// Full or partial tunnel name.
    pub query: Option<String>,

    /// Base64-encoded JSON object appended to the redirect target.
    pub params: Option<String>,

    /// `true` / `yes` to redirect, anything else to get JSON back.
    pub redirect: Option<String>,
}

impl FromIterator<(String, String)> for ResolveQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut request = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "query" => request.query = Some(value),
                "params" => request.params = Some(value),
                "redirect" => request.redirect = Some(value),
                _ => {}
            }
        }
        request
    }
}

impl ResolveQuery {
    /// Returns the query if present and non-empty.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Returns the encoded params blob if present and non-empty.
    pub fn encoded_params(&self) -> Option<&str> {
        self.params.as_deref().filter(|p| !p.is_empty())
    }

    /// Redirect is the default; a non-empty `redirect` other than `true`/`yes` disables it.
    pub fn should_redirect(&self) -> bool {
        match self.redirect.as_deref() {
            None | Some("") => true,
            Some(flag) => flag == "true" || flag == "yes",
        }
    }
}

/// JSON body returned when redirect mode is off.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub proxy_url: String,
}
