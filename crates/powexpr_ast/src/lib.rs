#![doc = include_str!("../README.md")]

pub mod expr;
pub mod printer;
pub mod visitor;

pub use expr::*;
