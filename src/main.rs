#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cybersensei::bootstrapper::run().await
}
