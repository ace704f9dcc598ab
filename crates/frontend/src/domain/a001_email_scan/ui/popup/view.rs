//! Email Scan Popup - View Component

use super::controller::PopupController;
use super::model::{check_health, FetchTransport};
use super::view_model::{ApiStatus, EmailScanPopupVm};
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn EmailScanPopup() -> impl IntoView {
    let vm = EmailScanPopupVm::new();
    let controller = PopupController::new(load_config(), FetchTransport);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // Check the service once when the popup opens
    Effect::new({
        let health_url = controller.config().health_endpoint();
        move |_| {
            let health_url = health_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match check_health(&health_url).await {
                    Ok(health) if health.is_ok() => vm.api_status.set(ApiStatus::Online),
                    Ok(health) => vm
                        .api_status
                        .set(ApiStatus::Offline(format!("status: {}", health.status))),
                    Err(e) => {
                        log::warn!("Health check {} failed: {}", health_url, e);
                        vm.api_status.set(ApiStatus::Offline(e));
                    }
                }
            });
        }
    });

    // Each click is an independent scan; the button stays enabled
    let handle_scan = Callback::new(move |_| {
        let selection = file_input_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.scan(selection, &vm.result).await;
        });
    });

    view! {
        <div class="popup" style="width: 340px; padding: 12px;">
            <Flex vertical=true gap=FlexGap::Small>
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3 style="margin: 0;">"PhishScan"</h3>
                    <span
                        class=move || vm.api_status.get().css_class()
                        title=move || match vm.api_status.get() {
                            ApiStatus::Offline(reason) => reason,
                            _ => String::new(),
                        }
                    >
                        {move || vm.api_status.get().label()}
                    </span>
                </Flex>

                <input type="file" id="emailFile" accept=".eml" node_ref=file_input_ref />

                <Button
                    appearance=ButtonAppearance::Primary
                    attr:id="scanBtn"
                    on_click=move |_| handle_scan.run(())
                >
                    "Scan email"
                </Button>

                <div id="result" inner_html=move || vm.result.get().to_html()></div>
            </Flex>
        </div>
    }
}
