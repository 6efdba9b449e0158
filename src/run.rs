//! Command execution.
//!
//! Maps each CLI subcommand to exactly one API call and turns the typed
//! result into JSON for printing.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use hostedhooks::api::{ApiError, HostedHooks};
use hostedhooks::config::{
    AppsCommand, AttemptsCommand, Command, EndpointChangeArgs, EndpointsCommand, EventsCommand,
    MessageArgs, MessagesCommand, NewEndpointArgs, SubscriptionsCommand,
};
use hostedhooks::model::{CreateEndpointParams, CreateMessageParams, UpdateEndpointParams};
use hostedhooks::transport::HttpClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// `--data` is not a JSON document.
    #[error("Invalid --data JSON: {0}")]
    InvalidData(#[source] serde_json::Error),

    /// The result could not be turned into JSON.
    #[error("Failed to serialize output: {0}")]
    Output(#[source] serde_json::Error),

    /// The command does not call the API.
    #[error("'{0}' does not call the API")]
    NotAnApiCommand(&'static str),
}

/// Executes one command against the API.
///
/// # Errors
///
/// Returns [`RunError`] if the arguments cannot be converted or the API
/// call fails.
pub async fn execute<H: HttpClient>(
    client: &HostedHooks<H>,
    command: Command,
) -> Result<Value, RunError> {
    match command {
        Command::Apps(cmd) => apps(client, cmd).await,
        Command::Subscriptions(cmd) => subscriptions(client, cmd).await,
        Command::Endpoints(cmd) => endpoints(client, cmd).await,
        Command::Events(cmd) => events(client, cmd).await,
        Command::Messages(cmd) => messages(client, cmd).await,
        Command::Attempts(cmd) => attempts(client, cmd).await,
        Command::Init { .. } => Err(RunError::NotAnApiCommand("init")),
    }
}

/// Formats a result for stdout.
///
/// # Errors
///
/// Returns [`RunError::Output`] if serialization fails.
pub fn render(value: &Value, compact: bool) -> Result<String, RunError> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(RunError::Output)
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, RunError> {
    serde_json::to_value(value).map_err(RunError::Output)
}

async fn apps<H: HttpClient>(client: &HostedHooks<H>, cmd: AppsCommand) -> Result<Value, RunError> {
    match cmd {
        AppsCommand::List { page } => to_json(&client.list_apps(page.pagination().as_ref()).await?),
        AppsCommand::Create { name } => to_json(&client.create_app(&name).await?),
        AppsCommand::Update { id, name } => to_json(&client.update_app(&id, &name).await?),
    }
}

async fn subscriptions<H: HttpClient>(
    client: &HostedHooks<H>,
    cmd: SubscriptionsCommand,
) -> Result<Value, RunError> {
    match cmd {
        SubscriptionsCommand::Get { id, page } => {
            to_json(&client.get_subscription(&id, page.pagination().as_ref()).await?)
        }
        SubscriptionsCommand::List { app_id, page } => to_json(
            &client
                .list_subscriptions(&app_id, page.pagination().as_ref())
                .await?,
        ),
        SubscriptionsCommand::Create { app_id, name } => {
            to_json(&client.create_subscription(&app_id, &name).await?)
        }
    }
}

async fn endpoints<H: HttpClient>(
    client: &HostedHooks<H>,
    cmd: EndpointsCommand,
) -> Result<Value, RunError> {
    match cmd {
        EndpointsCommand::Get {
            app_id,
            endpoint_id,
            page,
        } => to_json(
            &client
                .get_endpoint(&app_id, &endpoint_id, page.pagination().as_ref())
                .await?,
        ),
        EndpointsCommand::List { app_id, page } => to_json(
            &client
                .list_endpoints(&app_id, page.pagination().as_ref())
                .await?,
        ),
        EndpointsCommand::Create {
            subscription_id,
            endpoint,
        } => {
            let params = create_endpoint_params(&endpoint);
            to_json(&client.create_endpoint(&subscription_id, &params).await?)
        }
        EndpointsCommand::Update {
            subscription_id,
            endpoint_id,
            changes,
        } => {
            let params = update_endpoint_params(&changes);
            to_json(
                &client
                    .update_endpoint(&subscription_id, &endpoint_id, &params)
                    .await?,
            )
        }
    }
}

async fn events<H: HttpClient>(
    client: &HostedHooks<H>,
    cmd: EventsCommand,
) -> Result<Value, RunError> {
    match cmd {
        EventsCommand::List { app_id, page } => to_json(
            &client
                .list_webhook_events(&app_id, page.pagination().as_ref())
                .await?,
        ),
    }
}

async fn messages<H: HttpClient>(
    client: &HostedHooks<H>,
    cmd: MessagesCommand,
) -> Result<Value, RunError> {
    match cmd {
        MessagesCommand::App { app_id, message } => {
            let params = message_params(&message)?;
            to_json(&client.create_app_message(&app_id, &params).await?)
        }
        MessagesCommand::Subscription {
            subscription_id,
            message,
        } => {
            let params = message_params(&message)?;
            to_json(
                &client
                    .create_subscription_message(&subscription_id, &params)
                    .await?,
            )
        }
        MessagesCommand::Endpoint {
            subscription_id,
            endpoint_id,
            message,
        } => {
            let params = message_params(&message)?;
            to_json(
                &client
                    .create_endpoint_message(&subscription_id, &endpoint_id, &params)
                    .await?,
            )
        }
    }
}

async fn attempts<H: HttpClient>(
    client: &HostedHooks<H>,
    cmd: AttemptsCommand,
) -> Result<Value, RunError> {
    match cmd {
        AttemptsCommand::Get {
            app_id,
            endpoint_id,
        } => to_json(&client.get_webhook_attempt(&app_id, &endpoint_id).await?),
        AttemptsCommand::List { app_id, page } => to_json(
            &client
                .list_webhook_attempts(&app_id, page.pagination().as_ref())
                .await?,
        ),
    }
}

fn create_endpoint_params(args: &NewEndpointArgs) -> CreateEndpointParams {
    let mut params =
        CreateEndpointParams::new(args.url.clone(), args.version.clone(), args.enabled_events());
    params.description.clone_from(&args.description);
    params.status = args.status.map(Into::into);
    params
}

fn update_endpoint_params(args: &EndpointChangeArgs) -> UpdateEndpointParams {
    UpdateEndpointParams {
        url: args.url.clone(),
        description: args.description.clone(),
        version: args.version.clone(),
        status: args.status.map(Into::into),
        enabled_events: args.enabled_events(),
    }
}

fn message_params(args: &MessageArgs) -> Result<CreateMessageParams, RunError> {
    let data: Value = serde_json::from_str(&args.data).map_err(RunError::InvalidData)?;

    let mut params = CreateMessageParams::new(args.event_type.clone(), args.version.clone(), data);
    params.event_id.clone_from(&args.event_id);
    if args.override_payload {
        params.override_payload = Some(true);
    }
    Ok(params)
}
