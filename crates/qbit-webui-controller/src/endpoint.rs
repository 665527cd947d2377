//! WebUI endpoint parsing.
//!
//! The configured URL carries the login credentials as userinfo. They are split off
//! here so that every request is built from a credential-free base URL.

use std::fmt;

use url::Url;

use qbit_webui_types::DaemonError;

/// Login credentials for the WebUI. Only ever sent in the login form.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from plain (not percent-encoded) values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The login name.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the password.
        write!(
            f,
            "Credentials(username=\"{}\", password=<{}>)",
            self.username,
            if self.password.is_empty() {
                "unset"
            } else {
                "set"
            },
        )
    }
}

/// A parsed WebUI endpoint.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    base: Url,
    credentials: Credentials,
}

impl Endpoint {
    /// Parses `http[s]://user:pass@host[:port][/sub/path]`.
    pub(crate) fn parse(raw: &str) -> Result<Self, DaemonError> {
        let mut base = Url::parse(raw)
            .map_err(|e| DaemonError::Construction(format!("invalid WebUI URL: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(DaemonError::Construction(format!(
                "unsupported WebUI URL scheme: {}",
                base.scheme()
            )));
        }

        let credentials = Credentials {
            username: decode_userinfo(base.username())?,
            password: decode_userinfo(base.password().unwrap_or_default())?,
        };

        // Both calls only fail for URLs that cannot be a base, ruled out by the scheme check.
        let _ = base.set_username("");
        let _ = base.set_password(None);
        base.set_query(None);
        base.set_fragment(None);

        Ok(Self { base, credentials })
    }

    /// The endpoint without userinfo.
    pub(crate) fn base(&self) -> &Url {
        &self.base
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

fn decode_userinfo(raw: &str) -> Result<String, DaemonError> {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .map_err(|e| DaemonError::Construction(format!("invalid WebUI credentials: {e}")))
}

/// Appends an API path to the base URL, keeping any sub-path the WebUI is served under.
pub(crate) fn join_api_path(base: &Url, path: &str) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(path.split('/').filter(|s| !s.is_empty()));
    Some(url)
}
