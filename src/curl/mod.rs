pub mod lexer;
pub mod parser;
mod render;

use std::collections::BTreeMap;

use thiserror::Error;
use url::Url;

pub use parser::{parse, try_parse};

pub(crate) const DEFAULT_METHOD: &str = "GET";

/// Error for when a command line can't be parsed into a [`CurlRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input does not start with the `curl ` program prefix.
    #[error("missing program prefix")]
    MissingPrefix,
    /// No positional argument is left over to serve as the target URL.
    #[error("missing url")]
    MissingUrl,
    /// The positional argument is not a valid absolute URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A `-H` value has no `name: value` separator or an empty name.
    #[error("malformed header: {0:?}")]
    MalformedHeader(String),
    /// The option parser rejected a token; carries its own message.
    #[error("{0}")]
    BadOption(String),
}

/// Example command: `curl -X POST -H "Accept: */*" -d '{"id": 1}' -k "https://example.com/api"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlRequest {
    pub method: String,                    // GET unless -X overrides
    pub url: Url,                          // the one required positional
    pub headers: BTreeMap<String, String>, // -H "name: value", last name wins
    pub body: Option<String>,              // -d
    pub cookie: Option<String>,            // -b
    pub user: Option<String>,              // -u, may itself encode user:pass
    pub referer: Option<String>,           // -e
    pub user_agent: Option<String>,        // -A
    pub form: bool,                        // -F
    pub insecure: bool,                    // -k
    pub location: bool,                    // -L
}

impl CurlRequest {
    pub fn new(url: Url) -> Self {
        Self {
            method: DEFAULT_METHOD.into(),
            url,
            headers: BTreeMap::new(),
            body: None,
            cookie: None,
            user: None,
            referer: None,
            user_agent: None,
            form: false,
            insecure: false,
            location: false,
        }
    }

    /// Methods are stored uppercase, whatever the command line said.
    pub fn set_method(&mut self, method: &str) -> &mut Self {
        self.method = method.to_uppercase();
        self
    }

    pub fn set_header(&mut self, name: &str, value: &str) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn set_body(&mut self, body: &str) -> &mut Self {
        self.body = Some(body.into());
        self
    }

    pub fn set_cookie(&mut self, cookie: &str) -> &mut Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn set_user(&mut self, user: &str) -> &mut Self {
        self.user = Some(user.into());
        self
    }

    pub fn set_referer(&mut self, referer: &str) -> &mut Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn set_user_agent(&mut self, user_agent: &str) -> &mut Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn set_form(&mut self, form: bool) -> &mut Self {
        self.form = form;
        self
    }

    pub fn set_insecure(&mut self, insecure: bool) -> &mut Self {
        self.insecure = insecure;
        self
    }

    pub fn set_location(&mut self, location: bool) -> &mut Self {
        self.location = location;
        self
    }
}
