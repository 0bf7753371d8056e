#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cybersearch_lib::run().await
}
