use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
        ProductQueryServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, FindProducts, UpdateProductRequest},
        responses::{AdminProductResponse, ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    service::check_request,
};
use async_trait::async_trait;
use tracing::error;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_active(
        &self,
        params: &FindProducts,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_active(params.category_id).await?;
        let responses = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse::success(
            "Produtos recuperados com sucesso",
            responses,
        ))
    }

    async fn find_active_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Produto não encontrado".to_string()))?;

        // The single-product page has no category strip, so the row comes
        // without the joined names.
        let response = ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            photo: product.photo,
            price: product.price,
            product_type: product.product_type,
            unit_value: product.unit_value,
            stock: product.stock,
            is_active: product.is_active,
            created_at: product.created_at.map(|dt| dt.to_string()),
            categories: Vec::new(),
        };

        Ok(ApiResponse::success(
            "Produto recuperado com sucesso",
            response,
        ))
    }

    async fn find_all_admin(&self) -> Result<ApiResponse<Vec<AdminProductResponse>>, ServiceError> {
        let products = self.query.find_all_admin().await?;
        let responses = products
            .into_iter()
            .map(AdminProductResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Produtos recuperados com sucesso",
            responses,
        ))
    }
}

pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<i32>, ServiceError> {
        check_request(req)?;

        let id = self.command.create_with_categories(req).await.map_err(|e| {
            error!("❌ Failed to create product {}: {e:?}", req.name);
            ServiceError::from(e)
        })?;

        Ok(ApiResponse::success("Produto criado com sucesso", id))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        check_request(req)?;

        self.command
            .update_with_categories(id, req)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::NotFound("Produto não encontrado".to_string())
                }
                other => ServiceError::Repo(other),
            })?;

        Ok(ApiResponse::success("Produto atualizado com sucesso", ()))
    }

    async fn toggle_product(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError> {
        let is_active = self.command.toggle_active(id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                ServiceError::NotFound("Produto não encontrado".to_string())
            }
            other => ServiceError::Repo(other),
        })?;

        let message = if is_active {
            "Produto ativado com sucesso"
        } else {
            "Produto desativado com sucesso"
        };

        Ok(ApiResponse::success(message, is_active))
    }
}
