//! Email Scan Popup - View Model

use super::controller::ResultView;
use super::render::RenderState;
use leptos::prelude::*;

/// Состояние сервиса предсказаний по результату `GET /health`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ApiStatus {
    #[default]
    Checking,
    Online,
    Offline(String),
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "Checking API…",
            ApiStatus::Online => "API online",
            ApiStatus::Offline(_) => "API offline",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "api-status api-status--checking",
            ApiStatus::Online => "api-status api-status--online",
            ApiStatus::Offline(_) => "api-status api-status--offline",
        }
    }
}

#[derive(Clone, Copy)]
pub struct EmailScanPopupVm {
    pub result: RwSignal<RenderState>,
    pub api_status: RwSignal<ApiStatus>,
}

impl EmailScanPopupVm {
    pub fn new() -> Self {
        Self {
            result: RwSignal::new(RenderState::Idle),
            api_status: RwSignal::new(ApiStatus::Checking),
        }
    }
}

impl ResultView for RwSignal<RenderState> {
    fn show(&self, state: RenderState) {
        self.set(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_labels() {
        assert_eq!(ApiStatus::default(), ApiStatus::Checking);
        assert_eq!(ApiStatus::Online.label(), "API online");
        assert_eq!(ApiStatus::Offline("HTTP 503".to_string()).label(), "API offline");
        assert!(ApiStatus::Offline(String::new())
            .css_class()
            .ends_with("--offline"));
    }
}
