use std::env;
use std::io::Write;

use clap::Parser;
use serial_test::serial;
use tempfile::NamedTempFile;

use crate::cli::{Cli, EntityKind, Commands, execute, load_config};
use crate::config::{ANON_KEY_ENV, ConfigError, TIMEOUT_ENV, URL_ENV};
use crate::db::DataService;
use crate::remote::MemoryBackend;

fn clear_env() {
    unsafe {
        env::remove_var(URL_ENV);
        env::remove_var(ANON_KEY_ENV);
        env::remove_var(TIMEOUT_ENV);
    }
}

#[test]
fn parses_entity_names_in_kebab_case() {
    let cli = Cli::try_parse_from(["studiodesk", "list", "team-members", "--format", "json"]).unwrap();
    match cli.command {
        Some(Commands::List { entity, format }) => {
            assert_eq!(entity, EntityKind::TeamMembers);
            assert_eq!(format, "json");
        }
        _ => panic!("expected list command"),
    }
}

#[test]
fn rejects_unknown_entity() {
    assert!(Cli::try_parse_from(["studiodesk", "list", "invoices"]).is_err());
}

#[test]
fn global_flags_are_accepted_after_subcommand() {
    let cli = Cli::try_parse_from([
        "studiodesk",
        "delete",
        "cards",
        "cd-1",
        "--force",
        "--url",
        "https://abc.supabase.co",
    ])
    .unwrap();
    assert_eq!(cli.url.as_deref(), Some("https://abc.supabase.co"));
}

#[test]
#[serial]
fn load_config_flags_override_environment() {
    clear_env();
    unsafe {
        env::set_var(URL_ENV, "https://env.supabase.co");
        env::set_var(ANON_KEY_ENV, "env-key");
    }

    let config = load_config(None, Some("https://flag.supabase.co".to_string()), None).unwrap();

    assert_eq!(config.url, "https://flag.supabase.co");
    assert_eq!(config.anon_key, "env-key");
    clear_env();
}

#[test]
#[serial]
fn load_config_without_settings_fails() {
    clear_env();

    let err = load_config(None, None, None).unwrap_err();

    assert!(matches!(err, ConfigError::Missing { field: "url" }));
}

#[test]
#[serial]
fn load_config_reads_file_instead_of_environment() {
    clear_env();
    unsafe {
        env::set_var(URL_ENV, "https://env.supabase.co");
    }
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "url: https://file.supabase.co\nanon_key: file-key").unwrap();

    let config = load_config(Some(file.path()), None, Some("flag-key".to_string())).unwrap();

    assert_eq!(config.url, "https://file.supabase.co");
    assert_eq!(config.anon_key, "flag-key");
    assert_eq!(config.timeout_secs, 30);
    clear_env();
}

#[tokio::test]
async fn execute_runs_parsed_commands() {
    let service = DataService::new(MemoryBackend::new());

    let create = Cli::try_parse_from([
        "studiodesk",
        "create",
        "sops",
        "--data",
        r#"{"title": "Backup", "category": "Editing", "content": "Dua drive", "lastUpdated": "2024-06-01"}"#,
    ])
    .unwrap();
    let output = execute(&service, create.command.unwrap()).await.unwrap();
    assert!(output.starts_with("Created SOP "));

    let list = Cli::try_parse_from(["studiodesk", "list", "sops"]).unwrap();
    let output = execute(&service, list.command.unwrap()).await.unwrap();
    assert!(output.contains("Backup"));

    let profile = Cli::try_parse_from(["studiodesk", "profile"]).unwrap();
    let output = execute(&service, profile.command.unwrap()).await.unwrap();
    assert_eq!(output, "No profile found.");
}

#[tokio::test]
async fn execute_lists_payout_tables() {
    let service = DataService::new(MemoryBackend::new());

    let empty = Cli::try_parse_from(["studiodesk", "list", "reward-ledger-entries"]).unwrap();
    let output = execute(&service, empty.command.unwrap()).await.unwrap();
    assert_eq!(output, "No reward ledger entry records found.");

    let create = Cli::try_parse_from([
        "studiodesk",
        "create",
        "team-project-payments",
        "--data",
        r#"{"projectId": "pr-1", "teamMemberName": "Sari", "teamMemberId": "tm-1", "date": "2024-08-20", "status": "Unpaid", "fee": 750000}"#,
    ])
    .unwrap();
    let output = execute(&service, create.command.unwrap()).await.unwrap();
    assert!(output.starts_with("Created team project payment "));

    let list = Cli::try_parse_from(["studiodesk", "list", "team-project-payments"]).unwrap();
    let output = execute(&service, list.command.unwrap()).await.unwrap();
    assert!(output.contains("750,000"));
}
