use clap::Parser;
use reticule::cli::{Cli, Command, ConfigCommand, CreateTarget, DeleteTarget, UpdateTarget};
use reticule::config::profile::{DEFAULT_BASE_URL, DEFAULT_FEED_URL};

#[test]
fn parses_create_with_defaults() {
    let cli = Cli::try_parse_from(["reticule", "config", "create", "reticule", "--name", "alice"])
        .expect("cli parse should work");
    let Command::Config(config) = cli.command;
    match config.command {
        ConfigCommand::Create {
            target: CreateTarget::Reticule(args),
        } => {
            assert_eq!(args.name, "alice");
            assert_eq!(args.base_url, DEFAULT_BASE_URL);
            assert_eq!(args.feed_url, DEFAULT_FEED_URL);
            assert_eq!(args.port, 80);
            assert_eq!(args.bind_address, "127.0.0.1");
            assert_eq!(args.server_auth, "default");
            assert_eq!(args.key, "");
            assert!(!args.use_config);
        }
        _ => panic!("expected create command"),
    }
}

#[test]
fn parses_create_short_flags_and_alias() {
    let cli = Cli::try_parse_from([
        "reticule", "config", "create", "r", "-n", "bob", "-k", "K", "-p", "P", "-s", "S", "-u",
        "-t", "9000", "-l", "0.0.0.0", "-a", "psk",
    ])
    .expect("cli parse should work");
    let Command::Config(config) = cli.command;
    match config.command {
        ConfigCommand::Create {
            target: CreateTarget::Reticule(args),
        } => {
            assert_eq!(args.name, "bob");
            assert_eq!(args.key, "K");
            assert_eq!(args.passphrase, "P");
            assert_eq!(args.secret, "S");
            assert!(args.use_config);
            assert_eq!(args.port, 9000);
            assert_eq!(args.bind_address, "0.0.0.0");
            assert_eq!(args.server_auth, "psk");
        }
        _ => panic!("expected create command"),
    }
}

#[test]
fn update_leaves_unset_flags_empty() {
    let cli = Cli::try_parse_from([
        "reticule", "config", "update", "reticule", "--name", "bob", "--rename", "carol", "--use",
    ])
    .expect("cli parse should work");
    let Command::Config(config) = cli.command;
    match config.command {
        ConfigCommand::Update {
            target: UpdateTarget::Reticule(args),
        } => {
            assert_eq!(args.name, "bob");
            assert_eq!(args.rename.as_deref(), Some("carol"));
            assert!(args.use_config);
            assert!(args.base_url.is_none());
            assert!(args.key.is_none());
            assert!(args.port.is_none());
        }
        _ => panic!("expected update command"),
    }
}

#[test]
fn parses_delete() {
    let cli = Cli::try_parse_from(["reticule", "-v", "config", "delete", "reticule", "-n", "alice"])
        .expect("cli parse should work");
    assert_eq!(cli.verbose, 1);
    let Command::Config(config) = cli.command;
    match config.command {
        ConfigCommand::Delete {
            target: DeleteTarget::Reticule(args),
        } => assert_eq!(args.name, "alice"),
        _ => panic!("expected delete command"),
    }
}

#[test]
fn rejects_relative_base_url() {
    let result = Cli::try_parse_from([
        "reticule", "config", "create", "reticule", "--name", "alice", "--base-url", "not a url",
    ]);
    assert!(result.is_err());
}

#[test]
fn keeps_url_text_as_given() {
    let cli = Cli::try_parse_from([
        "reticule", "config", "update", "reticule", "--name", "alice", "--feed-url",
        "wss://feed.example.com",
    ])
    .expect("cli parse should work");
    let Command::Config(config) = cli.command;
    match config.command {
        ConfigCommand::Update {
            target: UpdateTarget::Reticule(args),
        } => assert_eq!(args.feed_url.as_deref(), Some("wss://feed.example.com")),
        _ => panic!("expected update command"),
    }
}

#[test]
fn name_is_required() {
    assert!(Cli::try_parse_from(["reticule", "config", "delete", "reticule"]).is_err());
}
