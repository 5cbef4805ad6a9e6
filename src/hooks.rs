use dioxus::prelude::*;

use crate::utils::error::AppError;

/// State of one in-flight API call.
#[derive(Clone)]
pub struct ApiState<T: Clone + 'static> {
    pub loading: Signal<bool>,
    pub data: Signal<Option<Result<T, AppError>>>,
}

impl<T: Clone + 'static> ApiState<T> {
    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn error(&self) -> Option<AppError> {
        self.data.read().as_ref()?.as_ref().err().cloned()
    }

    pub fn value(&self) -> Option<T> {
        self.data.read().as_ref()?.as_ref().ok().cloned()
    }
}

/// Create the signals for an API call driven by an effect or callback.
pub fn use_api_simple<T: Clone + 'static>() -> ApiState<T> {
    ApiState {
        loading: use_signal(|| true),
        data: use_signal(|| None),
    }
}
