use std::sync::Arc;

use awaazein_api_rest::RestServer;
use awaazein_config::Config;
use awaazein_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use awaazein_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use awaazein_email_contracts::EmailService;
use tracing::{info, warn};

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = match &config.email {
        Some(email_config) => {
            info!("Connecting to smtp server");
            let email = email::connect(email_config).await?;
            email.ping().await?;
            Some(email)
        }
        None => {
            warn!("Email delivery is not configured, contact messages will be rejected");
            None
        }
    };

    let contact = ContactServiceImpl::new(
        email.clone(),
        ContactServiceConfig {
            recipient: Arc::new(config.contact.recipient),
        },
    );
    let health = HealthServiceImpl::new(
        email,
        HealthServiceConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );

    let server = RestServer::new(health, contact);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
