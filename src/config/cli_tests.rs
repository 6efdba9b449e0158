//! Tests for CLI argument parsing.

use clap::{CommandFactory, Parser};

use super::cli::{
    AppsCommand, AttemptsCommand, Cli, Command, EndpointsCommand, EventsCommand,
    MessagesCommand, StatusArg, SubscriptionsCommand,
};
use crate::api::Pagination;
use crate::model::{EnabledEvents, EndpointStatus};

fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["hostedhooks"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

fn try_cli(args: &[&str]) -> Result<Cli, clap::Error> {
    let mut full_args = vec!["hostedhooks"];
    full_args.extend(args);
    Cli::try_parse_from(full_args)
}

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

mod global_options {
    use super::*;

    #[test]
    fn defaults_when_not_given() {
        let cli = cli(&["apps", "list"]);

        assert!(cli.api_key.is_none());
        assert!(cli.base_url.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.compact);
        assert!(!cli.verbose);
    }

    #[test]
    fn accepted_after_subcommand() {
        let cli = cli(&[
            "apps",
            "list",
            "--api-key",
            "secret",
            "--base-url",
            "http://localhost:3000/api/v1",
            "-c",
            "hooks.toml",
            "--compact",
            "-v",
        ]);

        assert_eq!(cli.api_key.as_deref(), Some("secret"));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:3000/api/v1"));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("hooks.toml")));
        assert!(cli.compact);
        assert!(cli.verbose);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(try_cli(&[]).is_err());
    }
}

mod apps {
    use super::*;

    #[test]
    fn list_with_pagination() {
        let cli = cli(&["apps", "list", "--page", "2", "--per-page", "10"]);

        let Command::Apps(AppsCommand::List { page }) = cli.command else {
            panic!("Expected apps list");
        };
        assert_eq!(
            page.pagination(),
            Some(Pagination::new().page(2).per_page(10))
        );
    }

    #[test]
    fn list_without_pagination_has_none() {
        let cli = cli(&["apps", "list"]);

        let Command::Apps(AppsCommand::List { page }) = cli.command else {
            panic!("Expected apps list");
        };
        assert_eq!(page.pagination(), None);
    }

    #[test]
    fn update_takes_id_and_name() {
        let cli = cli(&["apps", "update", "app-1", "--name", "XYZ SaaS"]);

        let Command::Apps(AppsCommand::Update { id, name }) = cli.command else {
            panic!("Expected apps update");
        };
        assert_eq!(id, "app-1");
        assert_eq!(name, "XYZ SaaS");
    }

    #[test]
    fn create_requires_name() {
        assert!(try_cli(&["apps", "create"]).is_err());
    }

    #[test]
    fn negative_page_is_rejected() {
        assert!(try_cli(&["apps", "list", "--page", "-1"]).is_err());
    }
}

mod subscriptions {
    use super::*;

    #[test]
    fn get_and_create() {
        let get = cli(&["subscriptions", "get", "sub-1", "--offset", "5"]);
        let Command::Subscriptions(SubscriptionsCommand::Get { id, page }) = get.command else {
            panic!("Expected subscriptions get");
        };
        assert_eq!(id, "sub-1");
        assert_eq!(page.pagination(), Some(Pagination::new().offset(5)));

        let create = cli(&["subscriptions", "create", "app-1", "--name", "Acme"]);
        let Command::Subscriptions(SubscriptionsCommand::Create { app_id, name }) = create.command
        else {
            panic!("Expected subscriptions create");
        };
        assert_eq!(app_id, "app-1");
        assert_eq!(name, "Acme");
    }
}

mod endpoints {
    use super::*;

    #[test]
    fn create_without_events_subscribes_to_all() {
        let cli = cli(&[
            "endpoints",
            "create",
            "sub-1",
            "--url",
            "https://example.com/hook",
            "--payload-version",
            "1.0",
        ]);

        let Command::Endpoints(EndpointsCommand::Create {
            subscription_id,
            endpoint,
        }) = cli.command
        else {
            panic!("Expected endpoints create");
        };
        assert_eq!(subscription_id, "sub-1");
        assert_eq!(endpoint.url, "https://example.com/hook");
        assert_eq!(endpoint.version, "1.0");
        assert_eq!(endpoint.enabled_events(), EnabledEvents::All);
        assert!(endpoint.status.is_none());
    }

    #[test]
    fn create_with_events_and_status() {
        let cli = cli(&[
            "endpoints",
            "create",
            "sub-1",
            "--url",
            "https://example.com/hook",
            "--payload-version",
            "1.0",
            "--status",
            "inactive",
            "--event",
            "user.created",
            "--event",
            "user.updated",
        ]);

        let Command::Endpoints(EndpointsCommand::Create { endpoint, .. }) = cli.command else {
            panic!("Expected endpoints create");
        };
        assert_eq!(endpoint.status, Some(StatusArg::Inactive));
        assert_eq!(
            endpoint.enabled_events(),
            EnabledEvents::only(["user.created", "user.updated"])
        );
    }

    #[test]
    fn update_with_no_options_changes_nothing() {
        let cli = cli(&["endpoints", "update", "sub-1", "ep-1"]);

        let Command::Endpoints(EndpointsCommand::Update { changes, .. }) = cli.command else {
            panic!("Expected endpoints update");
        };
        assert!(changes.url.is_none());
        assert!(changes.enabled_events().is_none());
    }

    #[test]
    fn update_all_events_flag() {
        let cli = cli(&["endpoints", "update", "sub-1", "ep-1", "--all-events"]);

        let Command::Endpoints(EndpointsCommand::Update { changes, .. }) = cli.command else {
            panic!("Expected endpoints update");
        };
        assert_eq!(changes.enabled_events(), Some(EnabledEvents::All));
    }

    #[test]
    fn update_all_events_conflicts_with_event_list() {
        let result = try_cli(&[
            "endpoints",
            "update",
            "sub-1",
            "ep-1",
            "--all-events",
            "--event",
            "user.created",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn get_takes_two_ids() {
        let cli = cli(&["endpoints", "get", "app-1", "ep-1"]);

        let Command::Endpoints(EndpointsCommand::Get {
            app_id,
            endpoint_id,
            page,
        }) = cli.command
        else {
            panic!("Expected endpoints get");
        };
        assert_eq!(app_id, "app-1");
        assert_eq!(endpoint_id, "ep-1");
        assert!(page.pagination().is_none());
    }

    #[test]
    fn status_arg_converts() {
        assert_eq!(EndpointStatus::from(StatusArg::Active), EndpointStatus::Active);
        assert_eq!(EndpointStatus::from(StatusArg::Inactive), EndpointStatus::Inactive);
    }
}

mod events_and_attempts {
    use super::*;

    #[test]
    fn events_list() {
        let cli = cli(&["events", "list", "app-1"]);

        assert!(matches!(
            cli.command,
            Command::Events(EventsCommand::List { ref app_id, .. }) if app_id == "app-1"
        ));
    }

    #[test]
    fn attempts_get_has_no_pagination() {
        assert!(try_cli(&["attempts", "get", "app-1", "ep-1", "--page", "2"]).is_err());

        let cli = cli(&["attempts", "get", "app-1", "ep-1"]);
        assert!(matches!(cli.command, Command::Attempts(AttemptsCommand::Get { .. })));
    }
}

mod messages {
    use super::*;

    #[test]
    fn endpoint_message() {
        let cli = cli(&[
            "messages",
            "endpoint",
            "sub-1",
            "ep-1",
            "--event-type",
            "user.created",
            "--payload-version",
            "1.0",
            "--data",
            r#"{"foo":"bar"}"#,
            "--event-id",
            "evt-1",
            "--override-payload",
        ]);

        let Command::Messages(MessagesCommand::Endpoint {
            subscription_id,
            endpoint_id,
            message,
        }) = cli.command
        else {
            panic!("Expected messages endpoint");
        };
        assert_eq!(subscription_id, "sub-1");
        assert_eq!(endpoint_id, "ep-1");
        assert_eq!(message.event_type, "user.created");
        assert_eq!(message.data, r#"{"foo":"bar"}"#);
        assert_eq!(message.event_id.as_deref(), Some("evt-1"));
        assert!(message.override_payload);
    }

    #[test]
    fn data_is_required() {
        let result = try_cli(&[
            "messages",
            "app",
            "app-1",
            "--event-type",
            "user.created",
            "--payload-version",
            "1.0",
        ]);

        assert!(result.is_err());
    }
}

mod init {
    use super::*;

    #[test]
    fn init_defaults_output_path() {
        let cli = cli(&["init"]);

        assert!(cli.is_init());
        let Command::Init { output } = cli.command else {
            panic!("Expected init");
        };
        assert_eq!(output, std::path::PathBuf::from("hostedhooks.toml"));
    }

    #[test]
    fn resource_commands_are_not_init() {
        assert!(!cli(&["apps", "list"]).is_init());
    }
}
