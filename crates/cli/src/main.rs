//! Marketplace CLI - Command-line client for the payments daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use marketplace_core::domain::{Contract, Job, Money, Profile, ProfileId};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9530";

#[derive(Parser)]
#[command(name = "marketplace")]
#[command(about = "Marketplace Payments CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "MARKETPLACE_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Profile acting as the caller
    #[arg(long, env = "MARKETPLACE_PROFILE_ID")]
    profile_id: ProfileId,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one of your contracts
    Contract {
        /// Contract ID
        contract_id: i64,
    },

    /// List contracts where you are the client
    Contracts,

    /// List unpaid jobs on contracts where you are client or contractor
    Unpaid,

    /// Pay a job as its client
    Pay {
        /// Job ID
        job_id: i64,
    },

    /// Move funds from your balance to another profile
    Deposit {
        /// Receiving profile ID
        user_id: ProfileId,

        /// Amount as a decimal (e.g. 25.50)
        amount: Money,
    },

    /// Show the largest deposit currently allowed
    MaxDeposit,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Tabled)]
struct ContractRow {
    id: i64,
    status: String,
    client: i64,
    contractor: i64,
    terms: String,
}

impl From<Contract> for ContractRow {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id,
            status: contract.status.to_string(),
            client: contract.client_id,
            contractor: contract.contractor_id,
            terms: contract.terms,
        }
    }
}

#[derive(Tabled)]
struct JobRow {
    id: i64,
    contract: i64,
    description: String,
    price: Money,
    paid: bool,
}

impl From<Job> for JobRow {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            contract: job.contract_id,
            description: job.description,
            price: job.price,
            paid: job.paid,
        }
    }
}

#[derive(Tabled)]
struct ProfileRow {
    id: i64,
    name: String,
    role: String,
    balance: Money,
}

impl From<Profile> for ProfileRow {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            name: format!("{} {}", profile.first_name, profile.last_name),
            role: profile.role.to_string(),
            balance: profile.balance,
        }
    }
}

#[derive(Deserialize)]
struct ContractList {
    contracts: Vec<Contract>,
}

#[derive(Deserialize)]
struct JobList {
    jobs: Vec<Job>,
}

#[derive(Deserialize)]
struct MaxDeposit {
    max_allowed_deposit: Money,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn print_table<R: Tabled>(rows: Vec<R>, empty: &str) {
    if rows.is_empty() {
        println!("{}", empty.yellow());
    } else {
        println!("{}", Table::new(rows));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let caller = cli.profile_id;

    match cli.command {
        Commands::Contract { contract_id } => {
            let params = json!({ "profile_id": caller, "contract_id": contract_id });
            let result = call_rpc(&cli.rpc_url, "contracts.get.v1", params).await?;
            let contract: Contract = serde_json::from_value(result)?;

            print_table(vec![ContractRow::from(contract)], "");
        }

        Commands::Contracts => {
            let params = json!({ "profile_id": caller });
            let result = call_rpc(&cli.rpc_url, "contracts.list.v1", params).await?;
            let list: ContractList = serde_json::from_value(result)?;

            println!("{}", format!("Contracts for profile {}:", caller).cyan().bold());
            print_table(
                list.contracts.into_iter().map(ContractRow::from).collect(),
                "No contracts",
            );
        }

        Commands::Unpaid => {
            let params = json!({ "profile_id": caller });
            let result = call_rpc(&cli.rpc_url, "jobs.unpaid.v1", params).await?;
            let list: JobList = serde_json::from_value(result)?;

            println!("{}", format!("Unpaid jobs for profile {}:", caller).cyan().bold());
            print_table(
                list.jobs.into_iter().map(JobRow::from).collect(),
                "No unpaid jobs",
            );
        }

        Commands::Pay { job_id } => {
            let params = json!({ "profile_id": caller, "job_id": job_id });
            let result = call_rpc(&cli.rpc_url, "jobs.pay.v1", params).await?;
            let job: Job = serde_json::from_value(result)?;

            println!(
                "{}",
                format!("✓ Job {} paid ({})", job.id, job.price).green().bold()
            );
            println!();
            print_table(vec![JobRow::from(job)], "");
        }

        Commands::Deposit { user_id, amount } => {
            let params = json!({
                "profile_id": caller,
                "user_id": user_id,
                "amount": amount,
            });
            let result = call_rpc(&cli.rpc_url, "balances.deposit.v1", params).await?;
            let depositor: Profile = serde_json::from_value(result)?;

            println!(
                "{}",
                format!("✓ Deposited {} to profile {}", amount, user_id)
                    .green()
                    .bold()
            );
            println!();
            print_table(vec![ProfileRow::from(depositor)], "");
        }

        Commands::MaxDeposit => {
            let params = json!({ "profile_id": caller });
            let result = call_rpc(&cli.rpc_url, "balances.max_deposit.v1", params).await?;
            let max: MaxDeposit = serde_json::from_value(result)?;

            println!(
                "  {} {}",
                "Max deposit:".bold(),
                max.max_allowed_deposit.to_string().green()
            );
        }
    }

    Ok(())
}
