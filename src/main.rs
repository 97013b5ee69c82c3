mod cli;

use clap::Parser;
use cli::Args;
use icon_builder::config::ConversionConfig;
use icon_builder::error::AppError;
use icon_builder::{logging, workflow};

fn main() -> Result<(), AppError> {
    // 引数は無いが、--help / --version と不正な引数の拒否は clap に任せる
    let _args = Args::parse();
    logging::init();

    workflow::run(&ConversionConfig::default())?;

    println!("{}", workflow::SUCCESS_MESSAGE);
    Ok(())
}
