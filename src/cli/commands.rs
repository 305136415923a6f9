use crate::cert::{fetch_cert_by_serial, normalize_serial, revoke_cert, CertCategory, SerialNumber};
use crate::cli::args::{Cli, Commands};
use crate::storage::{FileStore, KeyValueStore, StorageEntry};
use crate::utils::errors::{CertStoreError, Result};
use crate::utils::paths::CertStorePaths;
use std::io::{self, Read, Write};
use std::path::PathBuf;

pub async fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr
    if !cli.quiet {
        let log_level = match cli.verbose {
            0 => "certstore=warn",
            1 => "certstore=info",
            2 => "certstore=debug",
            _ => "certstore=trace",
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    let store_root = match &cli.store_dir {
        Some(dir) => PathBuf::from(dir),
        None => CertStorePaths::store_dir()?,
    };
    let store = FileStore::new(store_root).await?;

    match cli.command {
        Commands::Fetch { category, serial } => fetch(&store, category, &serial).await,
        Commands::Put {
            category,
            serial,
            file,
        } => put(&store, category, &serial, file.as_deref()).await,
        Commands::Revoke { serial } => revoke(&store, &serial).await,
        Commands::List { category } => list(&store, category).await,
        Commands::Delete { category, serial } => delete(&store, category, &serial).await,
    }
}

async fn fetch(store: &FileStore, category: CertCategory, serial: &str) -> Result<()> {
    match fetch_cert_by_serial(store, category, serial).await? {
        Some(entry) => {
            tracing::debug!("found record at '{}'", entry.key);
            io::stdout().write_all(&entry.value)?;
            Ok(())
        }
        None => Err(CertStoreError::CertNotFound(format!(
            "no record for serial '{serial}'"
        ))),
    }
}

async fn put(
    store: &FileStore,
    category: CertCategory,
    serial: &str,
    file: Option<&str>,
) -> Result<()> {
    let serial = parse_serial(serial)?;

    let payload = match file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let key = format!("{}{}", category.prefix(), serial.as_hyphen_hex());
    store
        .put(StorageEntry::new(key.clone(), payload))
        .await
        .map_err(|source| CertStoreError::StorageWrite { key, source })?;

    eprintln!("Stored record for serial {serial}");
    Ok(())
}

async fn revoke(store: &FileStore, serial: &str) -> Result<()> {
    // Validate the input, but hand the raw serial through so a record still
    // sitting under a legacy key resolves via the fallback.
    let parsed = parse_serial(serial)?;
    let revocation = revoke_cert(store, serial).await?;
    eprintln!(
        "Revoked certificate {parsed} at {}",
        revocation.revocation_time
    );
    Ok(())
}

async fn list(store: &FileStore, category: CertCategory) -> Result<()> {
    let mut keys = store
        .list(category.prefix())
        .await
        .map_err(CertStoreError::Storage)?;
    keys.sort();

    for key in keys {
        if let Some(serial) = key.strip_prefix(category.prefix()) {
            println!("{serial}");
        }
    }
    Ok(())
}

async fn delete(store: &FileStore, category: CertCategory, serial: &str) -> Result<()> {
    let canonical_key = format!("{}{}", category.prefix(), normalize_serial(serial));
    store
        .delete(&canonical_key)
        .await
        .map_err(CertStoreError::Storage)?;

    // The record may also still sit under the un-normalized key if it was
    // never fetched since key normalization was introduced.
    let legacy_key = format!("{}{}", category.prefix(), serial);
    if legacy_key != canonical_key {
        store
            .delete(&legacy_key)
            .await
            .map_err(CertStoreError::Storage)?;
    }

    eprintln!("Deleted '{canonical_key}'");
    Ok(())
}

fn parse_serial(serial: &str) -> Result<SerialNumber> {
    SerialNumber::parse(serial)
        .map_err(|e| CertStoreError::InvalidInput(format!("serial '{serial}': {e}")))
}
