#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dlbadge_lib::main().await
}
