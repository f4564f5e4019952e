//! civic_vote runner

use civic_vote_client::cmd::App;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();
    app.run().await
}
