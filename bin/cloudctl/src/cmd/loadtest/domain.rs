//! Manage domains registered for testing.
//!
//! Domains can be referenced by ID or by name.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::loadtest::CreateDomainRequest;
use cloudclient::models::loadtest::Domain;
use cloudclient::models::loadtest::VerificationMethod;
use cloudclient::Client;

use crate::cmd::ListOpts;
use crate::locator::DomainByName;
use crate::Globals;

/// Manage domains registered for testing.
#[derive(Debug, Parser)]
pub struct DomainCli {
    /// Select the `cloudctl loadtest domain` command to run.
    #[command(subcommand)]
    pub command: DomainCmd,
}

/// Possible domain commands to run.
#[derive(Debug, Subcommand)]
pub enum DomainCmd {
    /// Register a domain for testing.
    Create(CreateOpts),

    /// Remove one or more domains.
    Delete(DomainsOpts),

    /// List domains.
    List(ListOpts),

    /// Show details of one or more domains.
    Show(DomainsOpts),

    /// Verify ownership of one or more domains with a DNS record.
    VerifyDns(DomainsOpts),

    /// Verify ownership of one or more domains with a hosted file.
    VerifyFile(DomainsOpts),
}

/// Details of the domain to register.
#[derive(Args, Debug)]
pub struct CreateOpts {
    /// Name of the domain, for example example.com.
    #[arg(long)]
    pub name: String,

    /// How ownership of the domain will be verified (dns or file).
    #[arg(long, default_value_t = VerificationMethod::Dns)]
    pub verification_method: VerificationMethod,
}

/// Domains to operate on.
#[derive(Args, Debug)]
pub struct DomainsOpts {
    /// IDs or names of the domains to operate on.
    #[arg(required = true, value_name = "DOMAIN")]
    pub domains: Vec<String>,
}

/// Execute the selected `cloudctl loadtest domain` command.
pub async fn run(globals: &Globals, cmd: &DomainCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        DomainCmd::Create(opts) => {
            let request = CreateDomainRequest {
                name: opts.name.clone(),
                verification_method: opts.verification_method,
            };
            let id = client.loadtest().create_domain(&request).await?;
            slog::info!(globals.logger, "Registered domain"; "id" => %id);
            let domain = client.loadtest().domain(id).await?;
            crate::formatter::objects(globals, &[domain])?;
            Ok(0)
        }
        DomainCmd::Delete(opts) => {
            crate::cmd::each(globals, &opts.domains, |domain| delete(&client, domain)).await
        }
        DomainCmd::List(opts) => {
            crate::cmd::list(globals, client.loadtest().domains(&opts.params())).await
        }
        DomainCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.domains, |domain| fetch(&client, domain)).await
        }
        DomainCmd::VerifyDns(opts) => {
            crate::cmd::each(globals, &opts.domains, |domain| {
                verify(&client, domain, VerificationMethod::Dns)
            })
            .await
        }
        DomainCmd::VerifyFile(opts) => {
            crate::cmd::each(globals, &opts.domains, |domain| {
                verify(&client, domain, VerificationMethod::File)
            })
            .await
        }
    }
}

async fn delete(client: &Client, domain: &str) -> Result<()> {
    let id = DomainByName::resolve(client, domain).await?;
    client.loadtest().delete_domain(id).await?;
    println!("Domain '{}' was deleted.", domain);
    Ok(())
}

async fn fetch(client: &Client, domain: &str) -> Result<Domain> {
    let id = DomainByName::resolve(client, domain).await?;
    client.loadtest().domain(id).await
}

async fn verify(client: &Client, domain: &str, method: VerificationMethod) -> Result<()> {
    let id = DomainByName::resolve(client, domain).await?;
    match method {
        VerificationMethod::Dns => client.loadtest().verify_domain_by_dns(id).await?,
        VerificationMethod::File => client.loadtest().verify_domain_by_file(id).await?,
    };
    println!("Domain '{}' was verified ({}).", domain, method);
    Ok(())
}
