//! A command line interface to the parallel ant colony *Traveling Salesman Problem* solver.
//!

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

use crate::commands::solve::{get_solve_app, run_solve};
use std::process;
use std::sync::Arc;

fn main() {
    let matches = get_solve_app().get_matches();

    if let Err(err) = run_solve(&matches, Arc::new(|msg: &str| println!("{msg}"))) {
        eprintln!("{err}");
        process::exit(1);
    }
}
