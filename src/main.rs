use anyhow::{Context, Result};
use clap::Parser;
use nested_dig::cli::{self, describe_path};
use nested_dig::logging::{self, Verbosity};
use nested_dig::output::OutputFormatter;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let path = describe_path(&args.key_path());
    let lookup = args
        .run()
        .with_context(|| format!("Failed to dig [{path}]"))?;

    if lookup.is_absent() {
        tracing::info!("nothing found at [{path}]");
        if args.strict {
            anyhow::bail!("Path not found: [{path}]");
        }
    }

    println!("{}", OutputFormatter::format(&lookup, args.format)?);
    Ok(())
}
