use clap::{Arg, Command};
use curlcmd::curl::parse;
use curlcmd::{CurlRequest, FormatError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RequestPart {
    Method,
    Url,
    Headers,
    Body,
    Cookie,
    User,
    Referer,
    UserAgent,
    Flags,
}

fn cli() -> Command {
    Command::new("curlcmd")
        .version("0.1.0")
        .about("A CLI tool to parse and normalize curl commands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parses a curl command")
                .arg(
                    Arg::new("command")
                        .help("The input curl command string")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("part")
                        .short('p')
                        .long("part")
                        .value_name("PART")
                        .help("Prints a single part of the parsed command")
                        .required(false)
                        .value_parser(clap::value_parser!(RequestPart)),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Parses a curl command and prints it back in canonical form")
                .arg(
                    Arg::new("command")
                        .help("The input curl command string")
                        .required(true)
                        .index(1),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("parse", sub_matches)) => {
            let command = sub_matches.get_one::<String>("command").unwrap();
            let part = sub_matches.get_one::<RequestPart>("part");

            match parse(command) {
                Ok(request) => match part {
                    Some(part) => print_part(&request, *part),
                    None => println!("{:#?}", request),
                },
                Err(err) => fail(err),
            }
        }
        Some(("normalize", sub_matches)) => {
            let command = sub_matches.get_one::<String>("command").unwrap();

            match parse(command) {
                Ok(request) => println!("{request}"),
                Err(err) => fail(err),
            }
        }
        _ => {
            unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`")
        }
    }
}

fn print_part(request: &CurlRequest, part: RequestPart) {
    match part {
        RequestPart::Method => println!("{}", request.method),
        RequestPart::Url => println!("{}", request.url),
        RequestPart::Headers => {
            for (name, value) in &request.headers {
                println!("{name}: {value}");
            }
        }
        RequestPart::Body => print_value(&request.body),
        RequestPart::Cookie => print_value(&request.cookie),
        RequestPart::User => print_value(&request.user),
        RequestPart::Referer => print_value(&request.referer),
        RequestPart::UserAgent => print_value(&request.user_agent),
        RequestPart::Flags => {
            for (set, flag) in [
                (request.form, "-F"),
                (request.insecure, "-k"),
                (request.location, "-L"),
            ] {
                if set {
                    println!("{flag}");
                }
            }
        }
    }
}

fn print_value(field: &Option<String>) {
    if let Some(value) = field {
        println!("{value}");
    }
}

fn fail(err: FormatError) -> ! {
    eprintln!("Error parsing curl command: {err}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::cli;

    #[test]
    fn test_cli_structure_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_dispatch_requires_a_known_subcommand() {
        assert!(cli().try_get_matches_from(["curlcmd"]).is_err());
        assert!(cli().try_get_matches_from(["curlcmd", "frobnicate"]).is_err());
    }
}
