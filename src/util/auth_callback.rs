//! Magic-link callback handling.
//!
//! Authentication links delivered externally (e.g. by email) redirect back
//! into the app carrying a token — or a provider error — in the URL fragment
//! or query string rather than via a form post. This module parses those
//! parameters and strips them from the visible address once consumed.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

/// Parameter names accepted as a bearer token, in priority order.
const TOKEN_PARAMS: [&str; 4] = ["access_token", "token", "session", "login"];

/// Fallback copy when the provider reports an error without a description.
const INVALID_LINK_MESSAGE: &str =
    "Login link is invalid or has expired. Please request a new one.";

/// Outcome of parsing callback parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The provider reported an error; shown on the login form.
    Error(String),
    /// A token arrived; a session is synthesized from it.
    Token {
        token: String,
        email: Option<String>,
    },
}

/// Parse a raw fragment or query string (without the leading `#`/`?`).
///
/// An error indicator (`error`, `error_code`, `error_description`) wins over
/// any token. Returns `None` when the string carries neither.
pub fn parse_params(raw: &str) -> Option<CallbackOutcome> {
    let pairs = parse_pairs(raw);
    let get = |name: &str| {
        pairs
            .iter()
            .find(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| value.clone())
    };

    let error = get("error").or_else(|| get("error_code"));
    let description = get("error_description");
    if error.is_some() || description.is_some() {
        return Some(CallbackOutcome::Error(
            description.unwrap_or_else(|| INVALID_LINK_MESSAGE.to_owned()),
        ));
    }

    let token = TOKEN_PARAMS.iter().find_map(|name| get(name))?;
    Some(CallbackOutcome::Token {
        token,
        email: get("email"),
    })
}

fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Read callback parameters from the current location, preferring the
/// fragment over the query string, and strip them from the address bar
/// without navigating. Returns `None` outside the browser or when the
/// address carries nothing actionable (in which case it is left untouched).
pub fn take_from_location() -> Option<CallbackOutcome> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let location = window.location();

        let mut raw = location.hash().unwrap_or_default();
        if raw.len() > 1 {
            raw = raw[1..].to_owned();
        } else {
            raw = location.search().unwrap_or_default();
            raw = if raw.len() > 1 {
                raw[1..].to_owned()
            } else {
                String::new()
            };
        }

        if raw.is_empty() {
            return None;
        }

        let outcome = parse_params(&raw)?;

        let origin = location.origin().unwrap_or_default();
        let pathname = location.pathname().unwrap_or_default();
        let clean = format!("{origin}{pathname}");
        if let Ok(history) = window.history() {
            if let Err(err) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean))
            {
                log::warn!("failed to strip callback params from address: {err:?}");
            }
        }

        Some(outcome)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
