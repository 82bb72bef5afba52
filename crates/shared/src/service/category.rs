use crate::{
    abstract_trait::{
        CategoryCommandServiceTrait, CategoryQueryServiceTrait, DynCategoryCommandRepository,
        DynCategoryQueryRepository,
    },
    domain::{
        requests::CreateCategoryRequest,
        responses::{ApiResponse, CategoryResponse},
    },
    errors::{RepositoryError, ServiceError},
    service::check_request,
};
use async_trait::async_trait;

pub struct CategoryQueryService {
    query: DynCategoryQueryRepository,
}

impl CategoryQueryService {
    pub fn new(query: DynCategoryQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        let categories = self.query.find_all().await?;
        let responses = categories.into_iter().map(CategoryResponse::from).collect();

        Ok(ApiResponse::success(
            "Categorias recuperadas com sucesso",
            responses,
        ))
    }
}

pub struct CategoryCommandService {
    command: DynCategoryCommandRepository,
}

impl CategoryCommandService {
    pub fn new(command: DynCategoryCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        check_request(req)?;

        let category = self.command.create(&req.name).await.map_err(|e| match e {
            RepositoryError::UniqueViolation(msg) => ServiceError::AlreadyExists(msg),
            other => ServiceError::Repo(other),
        })?;

        Ok(ApiResponse::success(
            "Categoria criada com sucesso",
            category.into(),
        ))
    }

    async fn update_category(
        &self,
        id: i32,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        check_request(req)?;

        self.command
            .update(id, &req.name)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::NotFound("Categoria não encontrada".to_string())
                }
                RepositoryError::UniqueViolation(msg) => ServiceError::AlreadyExists(msg),
                other => ServiceError::Repo(other),
            })?;

        Ok(ApiResponse::success("Categoria atualizada com sucesso", ()))
    }

    async fn delete_category(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.command.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                ServiceError::NotFound("Categoria não encontrada".to_string())
            }
            other => ServiceError::Repo(other),
        })?;

        Ok(ApiResponse::success("Categoria excluída com sucesso", ()))
    }
}
