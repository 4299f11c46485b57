//! hd - Helpdesk dashboard CLI
//!
//! A command-line surface over the remote ticketing API: session lifecycle,
//! tickets, users, customers and activity trails. Command output is JSON on
//! stdout; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (persists the session for later invocations)
//! hd login --email a@b.com --password secret1
//!
//! # List tickets, most recently updated first
//! hd ticket list --pretty
//!
//! # Create a ticket
//! hd ticket create --title "Printer on fire" --customer-id 4 --priority HIGH --type INCIDENT
//! ```

mod activity_commands;
mod cli;
mod commands;
mod customer_commands;
mod error;
mod logger;
mod ticket_commands;
mod user_commands;

use crate::activity_commands::ActivityCommands;
use crate::cli::Cli;
use crate::commands::Commands;
use crate::customer_commands::CustomerCommands;
use crate::error::CliError;
use crate::ticket_commands::TicketCommands;
use crate::user_commands::UserCommands;

use hd_auth::SessionStore;
use hd_cache::Queries;
use hd_client::{ApiClient, AuthService, ClientResult, LogNotifier};
use hd_config::Config;
use hd_core::{
    ChangePasswordRequest, CreateActivityLogRequest, CreateCustomerRequest, CreateTicketRequest,
    CreateUserRequest, LoginRequest, RegisterRequest, TicketPriority, TicketStatus, TicketType,
    UpdateCustomerRequest, UpdateTicketRequest, UpdateUserRequest, UserRole,
};

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Explicit flag beats configuration and environment.
    if let Some(server) = cli.server.clone() {
        config.api.base_url = server;
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let log_file = match log_file_path(&config) {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    config.log_summary();

    let session = match config.session_dir().map(SessionStore::open) {
        Ok(Ok(store)) => Arc::new(store),
        Ok(Err(e)) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let api = match ApiClient::new(&config.api, session.clone(), Arc::new(LogNotifier)) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let auth = AuthService::new(api.clone());
    let queries = Queries::new(api);

    let result = run(cli.command, &auth, &queries, &session).await;

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(output) => {
                    println!("{}", output);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve the log file location under the config directory, creating the
/// log directory when file logging is configured.
fn log_file_path(config: &Config) -> Result<Option<PathBuf>, CliError> {
    let Some(ref filename) = config.logging.file else {
        return Ok(None);
    };

    let config_dir =
        Config::config_dir().map_err(|e| CliError::logger(format!("Config dir: {e}")))?;
    let log_dir = config_dir.join(&config.logging.dir);

    std::fs::create_dir_all(&log_dir)
        .map_err(|e| CliError::logger(format!("Failed to create {}: {e}", log_dir.display())))?;

    Ok(Some(log_dir.join(filename)))
}

async fn run(
    command: Commands,
    auth: &AuthService,
    queries: &Queries,
    session: &SessionStore,
) -> ClientResult<Value> {
    match command {
        Commands::Login { email, password } => {
            let outcome = auth.login(&LoginRequest { email, password }).await?;
            Ok(json!({ "user": outcome.user, "redirect": outcome.redirect.as_path() }))
        }

        Commands::Signup {
            name,
            email,
            password,
        } => {
            let outcome = auth
                .register(&RegisterRequest {
                    name,
                    email,
                    password,
                })
                .await?;
            Ok(json!({ "user": outcome.user, "redirect": outcome.redirect.as_path() }))
        }

        Commands::Logout => {
            let route = auth.logout()?;
            Ok(json!({ "redirect": route.as_path() }))
        }

        Commands::Whoami { verify } => match session.current() {
            Some(current) => {
                let mut output = json!({ "authenticated": true, "user": current.user });
                if verify {
                    output["tokenValid"] = json!(auth.check_token().await);
                }
                Ok(output)
            }
            None => Ok(json!({ "authenticated": false })),
        },

        Commands::Ticket { action } => run_ticket(action, queries).await,
        Commands::User { action } => run_user(action, queries).await,
        Commands::Customer { action } => run_customer(action, queries).await,
        Commands::Activity { action } => run_activity(action, queries).await,
    }
}

async fn run_ticket(action: TicketCommands, queries: &Queries) -> ClientResult<Value> {
    match action {
        TicketCommands::List => to_value(queries.tickets.list().await?),

        TicketCommands::Show { id } => to_value(queries.tickets.get(id).await?),

        TicketCommands::Create {
            title,
            customer_id,
            description,
            priority,
            ticket_type,
            assigned_to,
            tags,
            followers,
        } => {
            let request = CreateTicketRequest {
                title,
                description,
                customer_id,
                assigned_to_id: assigned_to,
                status: None,
                priority: parse_opt::<TicketPriority>(priority)?,
                ticket_type: parse_opt::<TicketType>(ticket_type)?,
                tags: non_empty(tags),
                follower_ids: non_empty(followers),
            };
            to_value(queries.tickets.create(&request).await?)
        }

        TicketCommands::Update {
            id,
            title,
            description,
            status,
            priority,
            ticket_type,
            assigned_to,
            customer_id,
        } => {
            let patch = UpdateTicketRequest {
                title,
                description,
                customer_id,
                assigned_to_id: assigned_to,
                status: parse_opt::<TicketStatus>(status)?,
                priority: parse_opt::<TicketPriority>(priority)?,
                ticket_type: parse_opt::<TicketType>(ticket_type)?,
                tags: None,
                follower_ids: None,
            };
            to_value(queries.tickets.update(id, &patch).await?)
        }

        TicketCommands::Delete { id } => {
            queries.tickets.delete(id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

async fn run_user(action: UserCommands, queries: &Queries) -> ClientResult<Value> {
    match action {
        UserCommands::List => to_value(queries.users.list().await?),

        UserCommands::Show { id } => to_value(queries.users.get(id).await?),

        UserCommands::Create {
            name,
            email,
            password,
            role,
            avatar,
        } => {
            let request = CreateUserRequest {
                name,
                email,
                password,
                role: parse_opt::<UserRole>(role)?,
                avatar,
            };
            to_value(queries.users.create(&request).await?)
        }

        UserCommands::Update {
            id,
            name,
            email,
            role,
            avatar,
        } => {
            let patch = UpdateUserRequest {
                name,
                email,
                password: None,
                role: parse_opt::<UserRole>(role)?,
                avatar,
            };
            to_value(queries.users.update(id, &patch).await?)
        }

        UserCommands::Delete { id } => {
            queries.users.delete(id).await?;
            Ok(json!({ "deleted": id }))
        }

        UserCommands::ChangePassword {
            old_password,
            new_password,
        } => {
            queries
                .users
                .change_password(&ChangePasswordRequest {
                    old_password,
                    new_password,
                })
                .await?;
            Ok(json!({ "changed": true }))
        }
    }
}

async fn run_customer(action: CustomerCommands, queries: &Queries) -> ClientResult<Value> {
    match action {
        CustomerCommands::List => to_value(queries.customers.list().await?),

        CustomerCommands::Show { id } => to_value(queries.customers.get(id).await?),

        CustomerCommands::Create {
            name,
            email,
            phone,
            address,
            avatar,
        } => {
            let request = CreateCustomerRequest {
                name,
                email,
                phone,
                address,
                avatar,
            };
            to_value(queries.customers.create(&request).await?)
        }

        CustomerCommands::Update {
            id,
            name,
            email,
            phone,
            address,
        } => {
            let patch = UpdateCustomerRequest {
                name,
                email,
                phone,
                address,
                avatar: None,
            };
            to_value(queries.customers.update(id, &patch).await?)
        }

        CustomerCommands::Delete { id } => {
            queries.customers.delete(id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

async fn run_activity(action: ActivityCommands, queries: &Queries) -> ClientResult<Value> {
    match action {
        ActivityCommands::List { ticket_id } => {
            to_value(queries.activity.list_for_ticket(ticket_id).await?)
        }

        ActivityCommands::Show { ticket_id, id } => {
            to_value(queries.activity.get(ticket_id, id).await?)
        }

        ActivityCommands::Add { ticket_id, action } => to_value(
            queries
                .activity
                .record(ticket_id, &CreateActivityLogRequest { action })
                .await?,
        ),
    }
}

fn to_value<T: serde::Serialize>(value: T) -> ClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Parse an optional CLI string into a closed enum value.
fn parse_opt<T>(value: Option<String>) -> ClientResult<Option<T>>
where
    T: FromStr<Err = hd_core::CoreError>,
{
    Ok(value.as_deref().map(T::from_str).transpose()?)
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}
