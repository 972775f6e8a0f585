extern crate clap;
extern crate schema_bindata;

pub mod cli;
pub mod error;
pub mod recovery;
pub mod show;
pub mod utils;
