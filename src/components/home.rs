use crate::config::AppConfig;
use crate::view_model::use_cat_view_model;
use cat_gallery::{PhotoScreen, ScreenGraphics, ScreenLabels};
use dioxus::prelude::*;
use dioxus_i18n::t;

const LOADER: Asset = asset!("/assets/loader.svg");
const PLACEHOLDER: Asset = asset!("/assets/loading_img.svg");
const BROKEN_IMAGE: Asset = asset!("/assets/ic_broken_image.svg");
const CONNECTION_ERROR: Asset = asset!("/assets/ic_connection_error.svg");

#[component]
pub fn HomeScreen(config: AppConfig) -> Element {
    let view_model = use_cat_view_model(config.api.clone());

    let labels = ScreenLabels {
        cat_image: t!("cat-image"),
        loading: t!("loading"),
        error_loading: t!("error-loading"),
        problem_with_connection: t!("problem-with-connection"),
    };
    let graphics = ScreenGraphics {
        loader: LOADER.to_string(),
        placeholder: PLACEHOLDER.to_string(),
        broken_image: BROKEN_IMAGE.to_string(),
        connection_error: CONNECTION_ERROR.to_string(),
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh;",
            // Top bar
            div { class: "top-bar",
                h1 { style: "margin: 0; font-size: 20px; font-weight: 600;", {t!("app-title")} }
            }
            div { style: "flex: 1; overflow-y: auto;",
                PhotoScreen {
                    ui_state: view_model.ui_state.read().clone(),
                    labels,
                    graphics,
                    layout: config.grid,
                }
            }
        }
    }
}
