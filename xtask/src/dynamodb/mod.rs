//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the users table.
    Deploy(DeployCommand),

    /// Seed the users table with demo users.
    Seed(SeedCommand),
}

/// Deploy or destroy the users table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the users DynamoDB table.

By default, this command creates the users table keyed by `id` (String)
with on-demand billing. An existing table is left untouched.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, default_value = "users", env = "DYNAMODB_TABLE_NAME")]
    pub table_name: String,
}

/// Seed the users table with demo users.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert demo users into DynamoDB.

Users get stable ids (user-001, user-002, ...) so seeding twice
overwrites the same records instead of piling up duplicates.")]
pub struct SeedCommand {
    /// Number of users to generate.
    #[arg(long, default_value = "10")]
    pub count: u32,

    /// Table name to use.
    #[arg(long, default_value = "users", env = "DYNAMODB_TABLE_NAME")]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

fn confirm(prompt: &str, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await?;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            confirm(
                "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
                false,
            )?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
    } else {
        let table_config = config::users_table_config().with_table_name(&cmd.table_name);

        let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

        if !global.is_silent() {
            aprintln!("{}", p_c("Deploy Plan:"));
            for line in planning::format_deploy_plan(&plan) {
                if line.starts_with('+') {
                    aprintln!("  {}", p_g(&line));
                } else if line.starts_with('~') {
                    aprintln!("  {}", p_y(&line));
                } else {
                    aprintln!("  {}", line);
                }
            }
            aprintln!();
        }

        match plan {
            planning::DeployPlan::NoChanges { .. } => {
                if !global.is_silent() {
                    aprintln!("{}", p_g("Infrastructure is up to date."));
                }
                return Ok(());
            }
            planning::DeployPlan::KeyMismatch { .. } | planning::DeployPlan::Unusable { .. } => {
                return deploy::execute_deploy_plan(&dynamo_client, &plan).await;
            }
            planning::DeployPlan::CreateTable { .. } => {}
        }

        if !cmd.force {
            confirm("Apply these changes?", true)?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Applying changes..."));
        }

        deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure deployed successfully."));
        }
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!("{} {}", p_b("Table:"), cmd.table_name);
        aprintln!("{} {}", p_b("User count:"), cmd.count);
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await?;

    let table_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;
    if table_state.is_none() {
        return Err(DynamodbError::TableNotFound {
            table_name: cmd.table_name,
        });
    }

    let users = seed::generate_seed_users(cmd.count);

    if !global.is_silent() {
        let shown = if global.is_verbose() { users.len() } else { 5 };

        aprintln!("{}", p_c("Users to write:"));
        for user in users.iter().take(shown) {
            aprintln!("  {} - {} ({})", user.id, user.name, user.age);
        }
        if users.len() > shown {
            aprintln!("  ... and {} more", users.len() - shown);
        }
        aprintln!();
    }

    if !cmd.force {
        confirm(&format!("Write {} users?", users.len()), true)?;
    }

    let inserted = seed::seed_users(&dynamo_client, &cmd.table_name, &users).await?;

    if !global.is_silent() {
        aprintln!("{} {} users written.", p_g("Success:"), inserted);
    }

    if (inserted as usize) < users.len() {
        aprintln!(
            "{} {} users were not processed, run the seed again.",
            p_y("Warning:"),
            users.len() - inserted as usize
        );
    }

    Ok(())
}
