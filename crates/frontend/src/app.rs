use crate::domain::a001_email_scan::ui::popup::EmailScanPopup;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <EmailScanPopup />
    }
}
