#![deny(warnings)]

use anyhow::Result;
use env_logger::Env;
use forecast_client::args::Args;
use forecast_client::config::Config;
use forecast_client::run;
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_filter())).init();

    let config = Config::builtin()?;
    let mut stdout = io::stdout().lock();

    run(&config, &mut stdout).await
}
