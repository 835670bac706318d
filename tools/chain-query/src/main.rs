//! Query chain metadata, balances and identity display names from a node.

use anyhow::{Context, Result};
use chain_reader::{
    format_units, Address, ChainProperties, DisplayName, ReaderConfig, RpcClient, StateReader, DEFAULT_ENDPOINT, U256,
};
use clap::{Parser, Subcommand};
use std::future::Future;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "chain-query")]
#[command(about = "Read balances and identities from a Substrate node", long_about = None)]
struct Args {
    /// WebSocket RPC endpoint of the node
    #[arg(short, long, default_value = DEFAULT_ENDPOINT, env = "CHAIN_ENDPOINT")]
    endpoint: String,

    /// Upper bound on each query, in seconds
    #[arg(long, default_value = "30", env = "CHAIN_TIMEOUT_SECS")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Chain name and finalized block number
    Info,
    /// Total (free + reserved) balance of an account
    Balance { address: String },
    /// On-chain identity display name of an account
    Name { address: String },
    /// Balance and display name together
    Account { address: String },
}

/// A command with its address already validated.
enum Query {
    Info,
    Balance(Address),
    Name(Address),
    Account(Address),
}

impl TryFrom<Command> for Query {
    type Error = anyhow::Error;

    fn try_from(command: Command) -> Result<Self> {
        let parse = |address: &str| Address::parse(address).context("Invalid account address");
        Ok(match command {
            Command::Info => Query::Info,
            Command::Balance { address } => Query::Balance(parse(&address)?),
            Command::Name { address } => Query::Name(parse(&address)?),
            Command::Account { address } => Query::Account(parse(&address)?),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chain_reader=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let timeout = Duration::from_secs(args.timeout_secs);

    // Reject bad input before opening a socket
    let query = Query::try_from(args.command)?;

    let config = ReaderConfig::new(&args.endpoint).with_request_timeout(timeout);
    let client = bounded(timeout, RpcClient::connect_to(config))
        .await
        .with_context(|| format!("Failed to connect to {}", args.endpoint))?;
    let reader = StateReader::new(client);

    match query {
        Query::Info => {
            let info = bounded(timeout, reader.chain_info()).await?;
            println!("chain: {}, finalized block: {}", info.name, info.finalized_block_number);
        }
        Query::Balance(address) => {
            let (balance, props) = tokio::join!(
                bounded(timeout, reader.balance(&address)),
                bounded(timeout, reader.chain_properties()),
            );
            let props = properties_or_default(props);
            println!("{} total balance: {}", address, render_balance(balance?, &props));
        }
        Query::Name(address) => {
            let name = bounded(timeout, reader.lookup_display_name(&address)).await?;
            println!("{} display name: {}", address, render_name(&name));
        }
        Query::Account(address) => {
            let (summary, props) = tokio::join!(
                bounded(timeout, reader.account_summary(&address)),
                bounded(timeout, reader.chain_properties()),
            );
            let summary = summary?;
            let props = properties_or_default(props);
            println!("address:  {}", summary.address);
            println!("name:     {}", render_name(&summary.display_name));
            println!("free:     {}", render_balance(U256::from(summary.balance.free), &props));
            println!("reserved: {}", render_balance(U256::from(summary.balance.reserved), &props));
            println!("total:    {}", render_balance(summary.balance.total(), &props));
            println!("nonce:    {}", summary.balance.nonce);
        }
    }

    Ok(())
}

/// Caller-side deadline around a lookup.
async fn bounded<T>(timeout: Duration, fut: impl Future<Output = chain_reader::Result<T>>) -> Result<T> {
    tokio::time::timeout(timeout, fut)
        .await
        .with_context(|| format!("Query timed out after {:?}", timeout))?
        .map_err(Into::into)
}

/// Properties only affect formatting; fall back to raw planck if unavailable.
fn properties_or_default(props: Result<ChainProperties>) -> ChainProperties {
    props.unwrap_or_else(|e| {
        warn!("Chain properties unavailable, printing raw units: {:#}", e);
        ChainProperties::default()
    })
}

fn render_balance(amount: U256, props: &ChainProperties) -> String {
    match (props.token_decimals, props.token_symbol.as_deref()) {
        (Some(decimals), Some(symbol)) => format!("{} {} ({} planck)", format_units(amount, decimals), symbol, amount),
        (Some(decimals), None) => format_units(amount, decimals),
        _ => amount.to_string(),
    }
}

fn render_name(name: &DisplayName) -> String {
    match name {
        DisplayName::Text(text) => text.clone(),
        DisplayName::NoIdentity => "<no identity>".into(),
        DisplayName::NotSet => "<display name not set>".into(),
        DisplayName::NotText(kind) => format!("<{:?} commitment, not text>", kind),
    }
}
