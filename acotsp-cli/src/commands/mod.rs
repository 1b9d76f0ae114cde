pub mod solve;

use clap::ArgMatches;
use std::fmt::Display;
use std::fs::File;
use std::str::FromStr;

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

/// Parses an optional argument value, fails when it is present but malformed.
fn parse_value<T>(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map(Some).map_err(|err| format!("cannot parse {arg_desc} value '{arg}': '{err}'"))
        })
        .unwrap_or(Ok(None))
}
