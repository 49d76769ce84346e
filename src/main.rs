//! Kiwoom CLI entry point.

use clap::Parser;

use kiwoom::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let format = cli.format;

    if let Err(err) = kiwoom::cli::run(cli).await {
        kiwoom::cli::handle_error(&err, format);
    }
}
