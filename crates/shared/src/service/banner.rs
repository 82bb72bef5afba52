use crate::{
    abstract_trait::{
        BannerCommandServiceTrait, BannerQueryServiceTrait, DynBannerCommandRepository,
        DynBannerQueryRepository,
    },
    domain::{
        requests::{CreateBannerRequest, FindBanners},
        responses::{ApiResponse, BannerResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{BANNER_CELULAR, BANNER_NORMAL},
    service::check_request,
};
use async_trait::async_trait;

pub struct BannerQueryService {
    query: DynBannerQueryRepository,
}

impl BannerQueryService {
    pub fn new(query: DynBannerQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl BannerQueryServiceTrait for BannerQueryService {
    async fn find_active(
        &self,
        params: &FindBanners,
    ) -> Result<ApiResponse<Vec<BannerResponse>>, ServiceError> {
        // Anything other than an explicit "celular" serves the desktop set.
        let banner_type = match params.banner_type.as_deref() {
            Some(BANNER_CELULAR) => BANNER_CELULAR,
            _ => BANNER_NORMAL,
        };

        let banners = self.query.find_active(banner_type).await?;
        let responses = banners.into_iter().map(BannerResponse::from).collect();

        Ok(ApiResponse::success(
            "Banners recuperados com sucesso",
            responses,
        ))
    }

    async fn find_all(&self) -> Result<ApiResponse<Vec<BannerResponse>>, ServiceError> {
        let banners = self.query.find_all().await?;
        let responses = banners.into_iter().map(BannerResponse::from).collect();

        Ok(ApiResponse::success(
            "Banners recuperados com sucesso",
            responses,
        ))
    }
}

pub struct BannerCommandService {
    command: DynBannerCommandRepository,
}

impl BannerCommandService {
    pub fn new(command: DynBannerCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl BannerCommandServiceTrait for BannerCommandService {
    async fn create_banners(&self, req: &CreateBannerRequest) -> Result<ApiResponse<()>, ServiceError> {
        check_request(req)?;

        self.command.create_pair(req).await?;

        Ok(ApiResponse::success("Banners criados com sucesso", ()))
    }

    async fn toggle_banner(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError> {
        let is_active = self.command.toggle_active(id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                ServiceError::NotFound("Banner não encontrado".to_string())
            }
            other => ServiceError::Repo(other),
        })?;

        let message = if is_active {
            "Banner ativado com sucesso"
        } else {
            "Banner desativado com sucesso"
        };

        Ok(ApiResponse::success(message, is_active))
    }

    async fn delete_banner(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.command.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                ServiceError::NotFound("Banner não encontrado".to_string())
            }
            other => ServiceError::Repo(other),
        })?;

        Ok(ApiResponse::success("Banner excluído com sucesso", ()))
    }
}
