use crate::cert::CertCategory;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "certstore")]
#[command(version = "1.0.0")]
#[command(about = "Certificate storage with serial key normalization and legacy-key migration")]
#[command(long_about = None)]
pub struct Cli {
    /// Store root directory (defaults to ~/.local/share/certstore/store)
    #[arg(long, env = "CERTSTORE_DIR")]
    pub store_dir: Option<String>,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a record by serial, migrating legacy-format keys on the way
    Fetch {
        /// Storage category to look in
        #[arg(long, short = 'c', value_enum, default_value = "active")]
        category: CertCategory,

        /// Certificate serial number (colon- or hyphen-delimited hex)
        serial: String,
    },
    /// Store a record under the canonical key for its serial
    Put {
        /// Storage category to write to
        #[arg(long, short = 'c', value_enum, default_value = "active")]
        category: CertCategory,

        /// Certificate serial number
        serial: String,

        /// File holding the payload (reads stdin if omitted)
        #[arg(long, short = 'f')]
        file: Option<String>,
    },
    /// Revoke a stored certificate by serial
    Revoke {
        /// Certificate serial number
        serial: String,
    },
    /// List stored keys in a category
    List {
        /// Storage category to list
        #[arg(long, short = 'c', value_enum, default_value = "active")]
        category: CertCategory,
    },
    /// Delete a record by serial
    Delete {
        /// Storage category to delete from
        #[arg(long, short = 'c', value_enum, default_value = "active")]
        category: CertCategory,

        /// Certificate serial number
        serial: String,
    },
}
