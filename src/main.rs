use clap::Parser;
use color_eyre::Result;
use podcast_harvester::{
    init_errors,
    init_logging,
    App,
    Args,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_errors()?;
    let args = Args::parse();
    init_logging(args.verbose)?;

    let snapshot = App::new(args)?.run().await?;
    println!("Data harvested at {}", snapshot.timestamp.to_rfc3339());
    Ok(())
}
