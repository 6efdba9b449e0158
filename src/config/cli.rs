//! CLI argument parsing using clap.
//!
//! Defines the command-line interface: global connection options and one
//! subcommand group per API resource.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::api::Pagination;
use crate::model::{EnabledEvents, EndpointStatus};

use super::defaults;

/// hostedhooks: command-line client for the HostedHooks webhook API
///
/// Every command performs one API call and prints the JSON result.
#[derive(Debug, Parser)]
#[command(name = "hostedhooks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// API key (falls back to the config file, then HOSTEDHOOKS_API_KEY)
    #[arg(long = "api-key", global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Base URL of the API
    #[arg(long = "base-url", global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage apps
    #[command(subcommand)]
    Apps(AppsCommand),

    /// Manage subscriptions of an app
    #[command(subcommand)]
    Subscriptions(SubscriptionsCommand),

    /// Manage endpoints
    #[command(subcommand)]
    Endpoints(EndpointsCommand),

    /// List webhook event types
    #[command(subcommand)]
    Events(EventsCommand),

    /// Send messages
    #[command(subcommand)]
    Messages(MessagesCommand),

    /// Inspect webhook delivery attempts
    #[command(subcommand)]
    Attempts(AttemptsCommand),

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum AppsCommand {
    /// List apps
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create an app
    Create {
        /// App name
        #[arg(long)]
        name: String,
    },
    /// Rename an app
    Update {
        /// App ID
        id: String,
        /// New app name
        #[arg(long)]
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SubscriptionsCommand {
    /// Show one subscription
    Get {
        /// Subscription ID
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List subscriptions of an app
    List {
        /// App ID
        app_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a subscription for an app
    Create {
        /// App ID
        app_id: String,
        /// Subscriber name
        #[arg(long)]
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum EndpointsCommand {
    /// Show one endpoint
    Get {
        /// App ID
        app_id: String,
        /// Endpoint ID
        endpoint_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List endpoints of an app
    List {
        /// App ID
        app_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create an endpoint for a subscription
    Create {
        /// Subscription ID
        subscription_id: String,
        #[command(flatten)]
        endpoint: NewEndpointArgs,
    },
    /// Change fields of an endpoint
    Update {
        /// Subscription ID
        subscription_id: String,
        /// Endpoint ID
        endpoint_id: String,
        #[command(flatten)]
        changes: EndpointChangeArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List webhook event types of an app
    List {
        /// App ID
        app_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum MessagesCommand {
    /// Send a message to every subscription of an app
    App {
        /// App ID
        app_id: String,
        #[command(flatten)]
        message: MessageArgs,
    },
    /// Send a message to one subscription
    Subscription {
        /// Subscription ID
        subscription_id: String,
        #[command(flatten)]
        message: MessageArgs,
    },
    /// Send a message to one endpoint
    Endpoint {
        /// Subscription ID
        subscription_id: String,
        /// Endpoint ID
        endpoint_id: String,
        #[command(flatten)]
        message: MessageArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum AttemptsCommand {
    /// Show the webhook attempt of an endpoint
    Get {
        /// App ID
        app_id: String,
        /// Endpoint ID
        endpoint_id: String,
    },
    /// List webhook attempts of an app
    List {
        /// App ID
        app_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

/// Pagination options shared by list and get commands.
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long = "per-page")]
    pub per_page: Option<u32>,

    /// Number of items to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

impl PageArgs {
    /// Returns `None` when no pagination option was given, so that the
    /// request carries no query string at all.
    #[must_use]
    pub fn pagination(&self) -> Option<Pagination> {
        if self.page.is_none() && self.per_page.is_none() && self.offset.is_none() {
            return None;
        }

        let mut pagination = Pagination::new();
        if let Some(page) = self.page {
            pagination = pagination.page(page);
        }
        if let Some(per_page) = self.per_page {
            pagination = pagination.per_page(per_page);
        }
        if let Some(offset) = self.offset {
            pagination = pagination.offset(offset);
        }
        Some(pagination)
    }
}

/// Endpoint status argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Endpoint receives deliveries
    Active,
    /// Endpoint is paused
    Inactive,
}

impl From<StatusArg> for EndpointStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => Self::Active,
            StatusArg::Inactive => Self::Inactive,
        }
    }
}

/// Options for `endpoints create`.
#[derive(Debug, Clone, Args)]
pub struct NewEndpointArgs {
    /// Delivery URL
    #[arg(long)]
    pub url: String,

    /// Payload version the endpoint expects
    #[arg(id = "payload_version", long = "payload-version", value_name = "VERSION")]
    pub version: String,

    /// Human-readable description
    #[arg(long)]
    pub description: Option<String>,

    /// Initial status (server default: active)
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Event type to subscribe to (can be specified multiple times; none = all events)
    #[arg(long = "event", value_name = "EVENT_TYPE")]
    pub events: Vec<String>,
}

impl NewEndpointArgs {
    #[must_use]
    pub fn enabled_events(&self) -> EnabledEvents {
        if self.events.is_empty() {
            EnabledEvents::All
        } else {
            EnabledEvents::Only(self.events.clone())
        }
    }
}

/// Options for `endpoints update`. Omitted options are left unchanged.
#[derive(Debug, Clone, Args)]
pub struct EndpointChangeArgs {
    /// New delivery URL
    #[arg(long)]
    pub url: Option<String>,

    /// New payload version
    #[arg(id = "payload_version", long = "payload-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Replace subscribed event types (can be specified multiple times)
    #[arg(long = "event", value_name = "EVENT_TYPE", conflicts_with = "all_events")]
    pub events: Vec<String>,

    /// Subscribe to all event types
    #[arg(long = "all-events")]
    pub all_events: bool,
}

impl EndpointChangeArgs {
    /// Returns the new event selection, if one was requested.
    #[must_use]
    pub fn enabled_events(&self) -> Option<EnabledEvents> {
        if self.all_events {
            Some(EnabledEvents::All)
        } else if self.events.is_empty() {
            None
        } else {
            Some(EnabledEvents::Only(self.events.clone()))
        }
    }
}

/// Options shared by the `messages` commands.
#[derive(Debug, Clone, Args)]
pub struct MessageArgs {
    /// Event type, e.g. user.created
    #[arg(long = "event-type")]
    pub event_type: String,

    /// Payload version
    #[arg(id = "payload_version", long = "payload-version", value_name = "VERSION")]
    pub version: String,

    /// Payload as a JSON document
    #[arg(long, value_name = "JSON")]
    pub data: String,

    /// Event identifier (generated by the server when omitted)
    #[arg(long = "event-id")]
    pub event_id: Option<String>,

    /// Deliver `data` as the whole request body
    #[arg(long = "override-payload")]
    pub override_payload: bool,
}

impl Cli {
    /// Parses CLI arguments, returning clap's error instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments and for `--help` or
    /// `--version` requests.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
