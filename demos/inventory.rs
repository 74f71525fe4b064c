use std::time::Duration;

use sectigo::{
    api::{ListDomainParams, ListSslParams},
    Client, Config,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // Reads SECTIGO_URL, SECTIGO_USERNAME, SECTIGO_CUSTOMER and SECTIGO_PASSWORD.
    let config = Config::from_env()?.timeout(Duration::from_secs(60));
    let client = Client::new(config)?;

    for org in client.list_organizations().await? {
        println!("organization {} ({})", org.name, org.id);

        for dept in &org.departments {
            println!("  department {} ({})", dept.name, dept.id);
        }
    }

    let domains = client.list_all_domains(ListDomainParams::default()).await?;
    println!("{} domains", domains.len());

    for domain in &domains {
        let details = client.domain_details(domain.id).await?;
        println!(
            "  {} state={} delegation={}",
            details.name,
            details.state.as_deref().unwrap_or("-"),
            details.delegation_status.as_deref().unwrap_or("-"),
        );
    }

    // Only issued certificates.
    let certs = client
        .list_all_ssl(ListSslParams {
            status: Some("Issued".to_owned()),
            ..Default::default()
        })
        .await?;

    for cert in &certs {
        println!(
            "certificate {} {} sans={}",
            cert.ssl_id,
            cert.common_name,
            cert.subject_alternative_names.join(","),
        );
    }

    Ok(())
}
