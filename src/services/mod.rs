//! Business logic services

pub mod catalog;
pub mod loans;
pub mod metadata;
pub mod roster;

use crate::{config::MetadataConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub roster: roster::RosterService,
    pub loans: loans::LoansService,
    pub metadata: metadata::MetadataService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, metadata_config: &MetadataConfig) -> AppResult<Self> {
        Ok(Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            roster: roster::RosterService::new(repository.clone()),
            loans: loans::LoansService::new(repository),
            metadata: metadata::MetadataService::new(metadata_config)?,
        })
    }
}
