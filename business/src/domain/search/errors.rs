#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search.task_failed")]
    TaskFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
