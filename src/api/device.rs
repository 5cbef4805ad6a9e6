use super::{to_params, ApiClient, RequestOptions};
use crate::models::device::{
    CreateDeviceRequest, CreateDeviceResponse, Device, GetDevicesRequest, GetDevicesResponse,
    GetMonitorDataRequest, GetMonitorDataResponse, UpdateDeviceRequest, UpdateDeviceStatusRequest,
};
use crate::utils::error::Result;

/// Device management API
impl ApiClient {
    pub async fn get_devices(&self, params: &GetDevicesRequest) -> Result<GetDevicesResponse> {
        self.get(
            "/api/device/list",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn get_device(&self, device_id: &str) -> Result<Device> {
        self.get(
            &format!("/api/device/{device_id}"),
            None,
            RequestOptions::default(),
        )
        .await
    }

    pub async fn create_device(&self, params: &CreateDeviceRequest) -> Result<CreateDeviceResponse> {
        self.post("/api/device", Some(to_params(params)?), RequestOptions::default())
            .await
    }

    pub async fn update_device(&self, params: &UpdateDeviceRequest) -> Result<()> {
        self.put("/api/device", Some(to_params(params)?), RequestOptions::default())
            .await
    }

    pub async fn update_device_status(&self, params: &UpdateDeviceStatusRequest) -> Result<()> {
        self.put(
            "/api/device/status",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    /// Delete one or more devices; ids travel in the path.
    pub async fn delete_devices(&self, device_ids: &[String]) -> Result<()> {
        self.delete(
            &format!("/api/device/{}", device_ids.join(",")),
            None,
            RequestOptions::default(),
        )
        .await
    }

    /// Fetch a window of monitoring samples for a device metric.
    pub async fn get_monitor_data(
        &self,
        params: &GetMonitorDataRequest,
    ) -> Result<GetMonitorDataResponse> {
        self.get(
            "/api/device/monitor",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }
}
