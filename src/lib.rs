// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod action;
pub mod config;
pub mod data;
pub mod formatter;
pub mod level;
pub mod map;
pub mod solver;
pub mod state;

mod fs;
mod parser;

use std::error::Error;

use crate::config::Strategy;
use crate::level::Level;
use crate::solver::Solution;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, strategy: Strategy, max_depth: u32, print_status: bool) -> Solution;
}
