use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    studiodesk::cli::run().await
}
