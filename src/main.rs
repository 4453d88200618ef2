use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fhevm_tutor::cli::main().await
}
