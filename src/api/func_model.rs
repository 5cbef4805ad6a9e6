use super::{to_params, ApiClient, RequestOptions};
use crate::models::func_model::{
    CreateFuncModelRequest, CreateFuncModelResponse, FuncModel, GetFuncModelsRequest,
    GetFuncModelsResponse,
};
use crate::utils::error::Result;

/// Function model API
///
/// Function models live under the data service: they describe the
/// properties, events, and services a product's devices expose.
impl ApiClient {
    pub async fn get_func_models(
        &self,
        params: &GetFuncModelsRequest,
    ) -> Result<GetFuncModelsResponse> {
        self.get(
            "/api/data-service/func-model/list",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn get_func_model(&self, model_id: &str) -> Result<FuncModel> {
        self.get(
            &format!("/api/data-service/func-model/{model_id}"),
            None,
            RequestOptions::default(),
        )
        .await
    }

    pub async fn create_func_model(
        &self,
        params: &CreateFuncModelRequest,
    ) -> Result<CreateFuncModelResponse> {
        self.post(
            "/api/data-service/func-model",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn update_func_model(&self, params: &FuncModel) -> Result<()> {
        self.put(
            "/api/data-service/func-model",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    /// Delete one or more function models; ids travel in the path.
    pub async fn delete_func_models(&self, model_ids: &[String]) -> Result<()> {
        self.delete(
            &format!("/api/data-service/func-model/{}", model_ids.join(",")),
            None,
            RequestOptions::default(),
        )
        .await
    }
}
