//! Email Scan Popup UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: fetch transport and health check
//! - controller.rs: scan flow, generic over transport and result view
//! - render.rs: RenderState and its HTML
//! - view_model.rs: EmailScanPopupVm with RwSignals
//! - view.rs: Main component EmailScanPopup

mod controller;
mod model;
mod render;
mod view;
mod view_model;

pub use view::EmailScanPopup;
