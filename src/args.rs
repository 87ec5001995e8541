use clap::Parser;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about)]
pub struct Arguments {
    /// Enables debug logging. `RUST_LOG` takes precedence when set
    #[clap(short, long)]
    pub debug: bool,
}

pub struct Args;

impl Args {
    pub fn parse() -> Arguments {
        Arguments::parse()
    }
}

impl Arguments {
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "warn" }
    }
}
