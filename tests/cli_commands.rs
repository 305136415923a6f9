use certstore::cert::CertCategory;
use certstore::cli::args::{Cli, Commands};
use certstore::cli::handle_command;
use certstore::utils::errors::CertStoreError;

use std::fs;
use tempfile::TempDir;

fn cli_for(dir: &TempDir, command: Commands) -> Cli {
    Cli {
        store_dir: Some(dir.path().to_string_lossy().into_owned()),
        verbose: 0,
        // Skip tracing init; the global subscriber can only be set once
        quiet: true,
        command,
    }
}

#[tokio::test]
async fn test_fetch_missing_record_is_cert_not_found() {
    let dir = TempDir::new().unwrap();
    let cli = cli_for(
        &dir,
        Commands::Fetch {
            category: CertCategory::Active,
            serial: "ab-cd".to_string(),
        },
    );

    assert!(matches!(
        handle_command(cli).await,
        Err(CertStoreError::CertNotFound(_))
    ));
}

#[tokio::test]
async fn test_revoke_finds_legacy_keyed_record() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("certs")).unwrap();
    fs::write(dir.path().join("certs/AB:CD"), b"pem").unwrap();

    let cli = cli_for(
        &dir,
        Commands::Revoke {
            serial: "AB:CD".to_string(),
        },
    );
    handle_command(cli).await.unwrap();

    assert!(dir.path().join("revoked/ab-cd").exists());
    assert!(dir.path().join("certs/ab-cd").exists());
}

#[tokio::test]
async fn test_delete_removes_both_key_renderings() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("certs")).unwrap();
    fs::write(dir.path().join("certs/AB:CD"), b"pem").unwrap();
    fs::write(dir.path().join("certs/ab-cd"), b"pem").unwrap();

    let cli = cli_for(
        &dir,
        Commands::Delete {
            category: CertCategory::Active,
            serial: "AB:CD".to_string(),
        },
    );
    handle_command(cli).await.unwrap();

    assert!(!dir.path().join("certs/AB:CD").exists());
    assert!(!dir.path().join("certs/ab-cd").exists());
}
