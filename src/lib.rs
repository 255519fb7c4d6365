pub mod cli;
pub mod codegen;
pub mod config;
pub mod constants;
pub mod converter;
pub mod io;

pub use converter::{ConvertError, Converter, Summary, convert};
