use crate::CLAP_STYLING;
use clap::arg;
use std::path::PathBuf;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("tabsort")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("tabsort")
        .styles(CLAP_STYLING)
        .about("Groups a OneTab export by registrable domain and sorts each group")
        .arg(
            arg!(<FILE>)
                .help("Path to the OneTab export (one 'URL | Title' per line)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Write the report to PATH instead of asking where to save it")
                .value_parser(clap::value_parser!(PathBuf))
                .conflicts_with("no-save"),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(--"no-clipboard")
                .required(false)
                .help("Do not copy the report to the clipboard")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"no-save")
                .required(false)
                .help("Do not offer to save the report to a file")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(arg!(-q --"quiet" "Suppress informational output").required(false))
}
