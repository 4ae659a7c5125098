use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command};
use url::Url;

use crate::curl::lexer::split_words;
use crate::curl::{CurlRequest, FormatError};

pub(crate) const CURL_CMD: &str = "curl";

/// Every command opens with the literal program name and one space.
fn strip_curl_prefix(input: &str) -> Option<&str> {
    input
        .strip_prefix(CURL_CMD)
        .and_then(|rest| rest.strip_prefix(' '))
}

/// The fixed option table. Help and version flags are disabled so that any
/// token the table does not know is rejected like every other unknown option.
// TODO: curl also accepts --data-raw and --data-binary; fold them into the
// data option if callers need them.
fn option_table() -> Command {
    Command::new(CURL_CMD)
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("request")
                .short('X')
                .long("request")
                .value_name("METHOD"),
        )
        .arg(
            Arg::new("header")
                .short('H')
                .long("header")
                .value_name("HEADER")
                .action(ArgAction::Append),
        )
        .arg(Arg::new("data").short('d').long("data").value_name("DATA"))
        .arg(
            Arg::new("cookie")
                .short('b')
                .long("cookie")
                .value_name("DATA"),
        )
        .arg(
            Arg::new("user")
                .short('u')
                .long("user")
                .value_name("USER:PASSWORD"),
        )
        .arg(
            Arg::new("referer")
                .short('e')
                .long("referer")
                .value_name("URL"),
        )
        .arg(
            Arg::new("user-agent")
                .short('A')
                .long("user-agent")
                .value_name("NAME"),
        )
        .arg(Arg::new("form").short('F').long("form").action(ArgAction::SetTrue))
        .arg(
            Arg::new("insecure")
                .short('k')
                .long("insecure")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("location")
                .short('L')
                .long("location")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("url").value_name("URL").num_args(0..))
}

/// Parse a full curl command line into a [`CurlRequest`].
pub fn parse(input: &str) -> Result<CurlRequest, FormatError> {
    let remainder = strip_curl_prefix(input).ok_or(FormatError::MissingPrefix)?;
    let matches = option_table()
        .try_get_matches_from(split_words(remainder))
        .map_err(|err| FormatError::BadOption(err.to_string()))?;
    from_matches(&matches)
}

/// Like [`parse`], but any failure becomes `None`.
pub fn try_parse(input: &str) -> Option<CurlRequest> {
    match parse(input) {
        Ok(request) => Some(request),
        Err(_err) => {
            #[cfg(feature = "debug-print")]
            eprintln!("discarding unparsable command: {_err}");
            None
        }
    }
}

impl FromStr for CurlRequest {
    type Err = FormatError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse(input)
    }
}

fn from_matches(matches: &ArgMatches) -> Result<CurlRequest, FormatError> {
    let target = matches
        .get_many::<String>("url")
        .and_then(|mut positionals| positionals.next())
        .ok_or(FormatError::MissingUrl)?;
    let mut request = CurlRequest::new(Url::parse(target)?);

    if let Some(method) = matches.get_one::<String>("request") {
        request.set_method(method);
    }
    if let Some(headers) = matches.get_many::<String>("header") {
        for header in headers {
            let (name, value) = split_header(header)?;
            request.set_header(name, value);
        }
    }
    if let Some(body) = matches.get_one::<String>("data") {
        request.set_body(body);
    }
    if let Some(cookie) = matches.get_one::<String>("cookie") {
        request.set_cookie(cookie);
    }
    if let Some(user) = matches.get_one::<String>("user") {
        request.set_user(user);
    }
    if let Some(referer) = matches.get_one::<String>("referer") {
        request.set_referer(referer);
    }
    if let Some(user_agent) = matches.get_one::<String>("user-agent") {
        request.set_user_agent(user_agent);
    }
    request.set_form(matches.get_flag("form"));
    request.set_insecure(matches.get_flag("insecure"));
    request.set_location(matches.get_flag("location"));

    Ok(request)
}

/// Split a header token at its first colon; the value loses at most one
/// leading space, and any further colon stays inside the value.
fn split_header(token: &str) -> Result<(&str, &str), FormatError> {
    match token.split_once(':') {
        Some((name, value)) if !name.is_empty() => {
            Ok((name, value.strip_prefix(' ').unwrap_or(value)))
        }
        _ => Err(FormatError::MalformedHeader(token.into())),
    }
}
