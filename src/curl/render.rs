use std::fmt;

use crate::curl::parser::CURL_CMD;
use crate::curl::{CurlRequest, DEFAULT_METHOD};

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Canonical command rendering: options in a fixed order, values quoted the
/// way [`parse`](crate::curl::parse) reads them back, the default method
/// elided.
impl fmt::Display for CurlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CURL_CMD)?;
        if self.method != DEFAULT_METHOD {
            write!(f, " -X {}", self.method)?;
        }
        for (name, value) in &self.headers {
            write!(f, " -H \"{name}: {value}\"")?;
        }
        if let Some(body) = non_empty(&self.body) {
            write!(f, " -d '{body}'")?;
        }
        if let Some(cookie) = non_empty(&self.cookie) {
            write!(f, " -b '{cookie}'")?;
        }
        if let Some(user) = non_empty(&self.user) {
            write!(f, " -u '{user}'")?;
        }
        if let Some(referer) = non_empty(&self.referer) {
            write!(f, " -e '{referer}'")?;
        }
        if let Some(user_agent) = non_empty(&self.user_agent) {
            write!(f, " -A '{user_agent}'")?;
        }
        if self.form {
            f.write_str(" -F")?;
        }
        if self.insecure {
            f.write_str(" -k")?;
        }
        if self.location {
            f.write_str(" -L")?;
        }
        write!(f, " \"{}\"", self.url)
    }
}
