mod common;
mod feed;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use ui::StoriesApp;

#[derive(Parser)]
#[command(name = "stories_rail", version, about = "Stories rail desktop client")]
struct Cli {
    /// Path to a JSON feed snapshot
    #[arg(long, default_value = feed::DEFAULT_FEED_PATH, value_name = "FILE")]
    feed: String,
}

fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let feed = feed::load_feed(&cli.feed);
    log::info!(
        "Feed loaded: {} users, {} stories",
        feed.users.len(),
        feed.stories.len()
    );

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Stories",
        options,
        Box::new(move |cc| Ok(Box::new(StoriesApp::new(cc, feed)))),
    )
}
