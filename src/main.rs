use clap::Parser;
use host2cidr::cli::Cli;
use host2cidr::common::{OutputFormat, WriteMode};
use host2cidr::error::AppError;
use host2cidr::process::{ProcessOptions, process_file};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// アプリケーションのメインロジック
async fn run(args: Cli) -> Result<(), AppError> {
    let opts = ProcessOptions {
        mode: args.mode.parse::<WriteMode>()?,
        format: args.output_format.parse::<OutputFormat>()?,
        input: args.input,
        output: args.output,
        header: args.header,
    };

    let summary = process_file(&opts).await?;
    println!(
        "[output] Wrote {} records to {}",
        summary.records_written,
        opts.output.display()
    );
    Ok(())
}
