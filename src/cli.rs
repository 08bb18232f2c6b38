use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use clap::Parser;
use std::path::PathBuf;

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "This tool converts IPv4 address counts in a tab-separated file into CIDR prefix lengths."
)]
pub struct Cli {
    #[arg(
        short = 'i',
        long = "input",
        default_value = DEFAULT_INPUT_PATH,
        help = "Tab-separated input file.\nColumn 1: IP range, column 3: number of addresses (e.g. 1,024)"
    )]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long = "output",
        default_value = DEFAULT_OUTPUT_PATH,
        help = "Output file."
    )]
    pub output: PathBuf,

    #[arg(
        short = 'm',
        long = "mode",
        default_value = "overwrite",
        required = false,
        hide_default_value = true,
        help = "Select file output mode: 'append' or 'overwrite'.\ndefault: overwrite"
    )]
    pub mode: String,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "txt",
        required = false,
        hide_default_value = true,
        help = "Select output format: 'txt' or 'json'.\ndefault: txt"
    )]
    pub output_format: String,

    #[arg(
        long = "header",
        default_value = "false",
        help = "Prepend a '# Generated at' comment header (txt format only)."
    )]
    pub header: bool,
}
