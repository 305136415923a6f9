use crate::utils::errors::{CertStoreError, Result};
use std::path::PathBuf;

pub struct CertStorePaths;
const PROGRAM_NAME: &str = "certstore";

impl CertStorePaths {
    /// Get the base data directory: ~/.local/share/certstore/
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join(PROGRAM_NAME))
            .ok_or_else(|| {
                CertStoreError::Config("Cannot determine local data directory".to_string())
            })
    }

    /// Get the default store root: ~/.local/share/certstore/store/
    pub fn store_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("store"))
    }
}
