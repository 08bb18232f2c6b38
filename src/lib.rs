pub mod cli;
pub mod common;
pub mod constants;
pub mod convert;
pub mod error;
pub mod output_common;
pub mod process;
pub mod table;
