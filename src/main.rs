use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use parse_curl::{Request, curl::parse};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RequestPart {
    Method,
    Url,
    Header,
    Body,
}

fn cli() -> Command {
    Command::new("parse-curl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn a copied curl command into a JSON request description")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log each parsing stage to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parses a curl command")
                .arg(
                    Arg::new("command")
                        .help("The input curl command string, read from stdin when omitted or '-'")
                        .required(false)
                        .index(1),
                )
                .arg(
                    Arg::new("part")
                        .short('p')
                        .long("part")
                        .value_name("PART")
                        .help("Print only one part of the request (method, url, header, body)")
                        .required(false)
                        .value_parser(clap::value_parser!(RequestPart)),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .help("Indent the JSON output by two spaces")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_command(matches: &ArgMatches) -> io::Result<String> {
    match matches.get_one::<String>("command").map(String::as_str) {
        Some(command) if command != "-" => Ok(command.to_owned()),
        _ => {
            let mut command = String::new();
            io::stdin().read_to_string(&mut command)?;
            Ok(command)
        }
    }
}

fn render(request: &Request, part: Option<RequestPart>, pretty: bool) -> String {
    match part {
        Some(RequestPart::Method) => request.method.clone(),
        Some(RequestPart::Url) => request.url.clone(),
        Some(RequestPart::Body) => request.body.clone(),
        Some(RequestPart::Header) => request
            .header
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\n"),
        None => request.to_json(pretty),
    }
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("parse", sub_matches)) => {
            let command = match read_command(sub_matches) {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("Error reading curl command: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let part = sub_matches.get_one::<RequestPart>("part").copied();
            let pretty = sub_matches.get_flag("pretty");

            match parse(&command) {
                Ok(request) => {
                    println!("{}", render(&request, part, pretty));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error parsing curl command: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        _ => unreachable!("clap rejects a missing subcommand"),
    }
}
