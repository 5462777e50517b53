use productinfo_cli::process_command::process_cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    process_cli().await
}
