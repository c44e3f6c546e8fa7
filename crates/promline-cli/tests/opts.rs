#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::Path;

use clap::{error::ErrorKind, CommandFactory, Parser};

use promline_cli::{config, opts::ProcArgs};

#[test]
fn command_definition_is_valid() {
    ProcArgs::command().debug_assert();
}

#[test]
fn path_defaults_to_snapshot_file() {
    let args = ProcArgs::try_parse_from(["promline"]).unwrap();
    assert_eq!(args.path, Path::new(config::DEFAULT_PATH));
}

#[test]
fn positional_path_is_taken() {
    let args = ProcArgs::try_parse_from(["promline", "/etc/promline/node.yaml"]).unwrap();
    assert_eq!(args.path, Path::new("/etc/promline/node.yaml"));
}

#[test]
fn help_is_not_a_path() {
    let err = ProcArgs::try_parse_from(["promline", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    let help = err.to_string();
    assert!(help.contains("promline"));
    assert!(help.contains("PATH"));
}

#[test]
fn unknown_flag_rejected() {
    let err = ProcArgs::try_parse_from(["promline", "--bogus"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn extra_positional_rejected() {
    assert!(ProcArgs::try_parse_from(["promline", "a.yaml", "b.yaml"]).is_err());
}
