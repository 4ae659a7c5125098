//! curlcmd converts cURL command lines to and from structured request
//! descriptions.
//!
//! [`curl::parse`] reads a command string into a [`CurlRequest`], and the
//! [`Display`](std::fmt::Display) impl renders a description back into a
//! canonical command string:
//!
//! ```
//! use curlcmd::curl::parse;
//!
//! let request = parse(r#"curl -X POST -H "Accept: */*" "https://example.com/api""#).unwrap();
//! assert_eq!(request.method, "POST");
//! assert_eq!(
//!     request.to_string(),
//!     r#"curl -X POST -H "Accept: */*" "https://example.com/api""#
//! );
//! ```

pub mod curl;

pub use curl::{CurlRequest, FormatError};

#[cfg(test)]
mod test_util;
