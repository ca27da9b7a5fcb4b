use std::time::Instant;

use uuid::Uuid;

use crate::config::SearchConfig;
use crate::error::AppError;
use crate::filter::{self, FilterCriteria};
use crate::models::{Auto, NewAuto, UpdateAuto};
use crate::repository::AutoRepository;

/// Orchestrates catalog operations and owns the observability hook: each
/// operation logs its name and outcome as structured fields. The filter
/// engine itself stays silent.
#[derive(Clone)]
pub struct CatalogService {
    repo: AutoRepository,
    search: SearchConfig,
}

impl CatalogService {
    pub fn new(repo: AutoRepository, search: SearchConfig) -> Self {
        Self { repo, search }
    }

    pub async fn list(&self) -> Result<Vec<Auto>, AppError> {
        let autos = self.repo.fetch_all().await?;
        tracing::info!(operation = "GET_AUTOS", count = autos.len(), "listed autos");
        Ok(autos)
    }

    pub async fn search(&self, criteria: FilterCriteria) -> Result<Vec<Auto>, AppError> {
        let started = Instant::now();
        let autos = self.repo.fetch_all().await?;
        let matched = filter::apply(autos, &criteria, self.search.mode, self.search.fuzzy_threshold);

        if matched.is_empty() {
            tracing::warn!(
                operation = "SEARCH_BY_FILTERS",
                ?criteria,
                "no autos matched the supplied filters"
            );
        }
        tracing::info!(
            operation = "SEARCH_BY_FILTERS",
            outcome = "success",
            matched = matched.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search completed"
        );

        Ok(matched)
    }

    pub async fn get(&self, id: Uuid) -> Result<Auto, AppError> {
        self.repo
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Auto '{}' not found", id)))
    }

    pub async fn create(&self, auto: NewAuto) -> Result<Auto, AppError> {
        let created = self.repo.create(&auto).await?;
        tracing::info!(operation = "CREATE_AUTO", id = %created.id, "auto created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, changes: UpdateAuto) -> Result<Auto, AppError> {
        let updated = self
            .repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Auto '{}' not found", id)))?;
        tracing::info!(operation = "UPDATE_AUTO", id = %id, "auto updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Auto '{}' not found", id)));
        }
        tracing::info!(operation = "DELETE_AUTO", id = %id, "auto deleted");
        Ok(())
    }
}
