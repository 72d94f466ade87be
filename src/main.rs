use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    quantum_vault_api::run().await
}
