//! CLI command implementations.

use color_eyre::eyre::{eyre, Result};
use indicatif::{ProgressBar, ProgressStyle};

use prefixd_core::{sort_prefixes, AddressFamily, Resource};
use prefixd_ris::{PrefixSource, RisClient, RisConfig};

/// Start the lookup server.
pub async fn serve(host: String, port: u16, endpoint: String) -> Result<()> {
    use prefixd_server::{Server, ServerConfig};

    tracing::info!("Starting prefixd server...");

    let addr = format!("{}:{}", host, port).parse()?;
    let config = ServerConfig::builder()
        .addr(addr)
        .ris_endpoint(endpoint)
        .build();

    let server = Server::new(config)?;
    server.run().await?;

    Ok(())
}

/// Look up originated prefixes for one resource and print them.
pub async fn lookup(resource: String, family: String, endpoint: String) -> Result<()> {
    let family: AddressFamily = family
        .parse()
        .map_err(|e| eyre!("{}", e))?;
    let resource = Resource::from(resource);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Querying RIS for AS{}...", resource));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let config = RisConfig::builder().endpoint(endpoint).build();
    let client = RisClient::new(config)?;
    let prefixes = client.originated_prefixes(&resource).await?;

    spinner.finish_and_clear();

    let mut addresses = prefixes.into_family(family);
    if addresses.is_empty() {
        return Err(eyre!(
            "No {} addresses found for AS{}.",
            family.label(),
            resource
        ));
    }

    sort_prefixes(&mut addresses, family);
    for address in &addresses {
        println!("{}", address);
    }

    tracing::debug!(count = addresses.len(), "Lookup printed");
    Ok(())
}
