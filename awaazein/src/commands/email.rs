use anyhow::{ensure, Context};
use awaazein_config::Config;
use awaazein_email_contracts::{Email, EmailService};
use awaazein_email_impl::EmailServiceImpl;
use awaazein_models::email_address::EmailAddress;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_config = config.email.context("Email delivery is not configured")?;
    let email_service = EmailServiceImpl::new(&email_config.smtp_url, email_config.from).await?;

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            html_body: "<p>Email deliverability seems to be working!</p>".into(),
            text_body: "Email deliverability seems to be working!".into(),
            reply_to: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
