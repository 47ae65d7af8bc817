use sqlmi::{DataSource, Input, ReadOutcome, ResourceState, Timeouts};
use sqlmi_adapter_arm::ArmClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sqlmi=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Usage: lookup <resource-group> <name>
    let mut args = std::env::args().skip(1);
    let (Some(resource_group), Some(name)) = (args.next(), args.next()) else {
        eprintln!("usage: lookup <resource-group> <name>");
        std::process::exit(2);
    };

    let client = ArmClient::from_env()?;
    let source = DataSource::new(Arc::new(client)).with_timeouts(Timeouts::from_env());

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    let mut state = ResourceState::default();
    match source
        .lookup(&Input::new(name, resource_group), &mut state, cancel)
        .await?
    {
        ReadOutcome::Populated(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        ReadOutcome::Absent => eprintln!("managed instance not found"),
    }
    Ok(())
}
