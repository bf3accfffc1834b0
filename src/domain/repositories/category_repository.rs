use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::category::Category;

/// Repository trait for categories (read-only)
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Category>>;
}
