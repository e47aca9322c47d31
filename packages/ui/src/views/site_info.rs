use dioxus::prelude::*;

use crate::views::Placeholder;
use crate::{use_api, use_site_gallery, use_site_selection};

/// Detail screen for one takeoff site.
#[component]
pub fn SiteInfoView(name: String, on_show_weather: EventHandler<()>, on_back: EventHandler<()>) -> Element {
    let api = use_api();
    let gallery = use_site_gallery();
    let mut selection = use_site_selection();

    let site_name = name.clone();
    let summary = use_resource(use_reactive((&site_name,), move |(site_name,)| {
        let api = api.clone();
        async move {
            let client = match api.client() {
                Ok(client) => client,
                Err(e) => {
                    tracing::warn!("Cannot load site {}: {}", site_name, e);
                    return None;
                }
            };
            match client.site_summaries().await {
                Ok(mut map) => map.remove(&site_name),
                Err(e) => {
                    tracing::warn!("Failed to fetch summary for {}: {}", site_name, e);
                    None
                }
            }
        }
    }));

    let image_src = gallery.image_src(&name);
    let summary_text = summary.read().clone().flatten();
    let weather_name = name.clone();

    rsx! {
        div {
            class: "screen site-info-screen",
            div {
                class: "screen-header",
                button {
                    class: "link-button",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h1 { class: "screen-title", "{name}" }
            }
            img {
                class: "site-info-image",
                src: "{image_src}",
                alt: "{name}",
            }
            div {
                class: "card",
                match summary_text {
                    Some(text) if !text.is_empty() => rsx! { p { class: "site-info-summary", "{text}" } },
                    _ => rsx! { Placeholder { message: "활공장 정보 없음" } },
                }
            }
            button {
                class: "button button-primary",
                onclick: move |_| {
                    selection.write().select(&weather_name);
                    on_show_weather.call(());
                },
                "이 활공장 날씨 보기"
            }
        }
    }
}
