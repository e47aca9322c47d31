use std::collections::HashMap;

use dioxus::prelude::*;

use crate::icons::FaPlus;
use crate::views::Placeholder;
use crate::{use_api, use_site_gallery, use_site_selection, Icon, SiteCard};

/// BowFactory tab: the takeoff sites the user picked, as cards.
#[component]
pub fn BowFactoryView(on_select_site: EventHandler<()>, on_open_site: EventHandler<String>) -> Element {
    let api = use_api();
    let gallery = use_site_gallery();
    let mut selection = use_site_selection();
    let mut summaries = use_signal(HashMap::<String, String>::new);

    // Summaries are fetched once per mount; a failure leaves the cards without text.
    let _summaries = use_resource(move || {
        let api = api.clone();
        async move {
            let result = match api.client() {
                Ok(client) => client.site_summaries().await,
                Err(e) => Err(e),
            };
            match result {
                Ok(map) => summaries.set(map),
                Err(e) => tracing::warn!("Failed to fetch site summaries: {}", e),
            }
        }
    });

    let current = selection();
    let active = current.active.clone();

    rsx! {
        div {
            class: "screen bow-factory-screen",
            button {
                class: "button button-primary select-site-button",
                onclick: move |_| on_select_site.call(()),
                Icon { icon: FaPlus, width: 14, height: 14 }
                span { "활공장 선택" }
            }

            if current.sites.is_empty() {
                Placeholder { message: "선택한 활공장이 없습니다." }
            }

            for site in current.sites.iter().cloned() {
                div {
                    key: "{site}",
                    class: if active.as_deref() == Some(site.as_str()) { "site-entry active" } else { "site-entry" },
                    SiteCard {
                        name: site.clone(),
                        summary: summaries.read().get(&site).cloned(),
                        image_src: gallery.image_src(&site),
                        on_open: on_open_site,
                    }
                    div {
                        class: "site-entry-actions",
                        button {
                            class: "link-button",
                            onclick: {
                                let site = site.clone();
                                move |_| selection.write().select(&site)
                            },
                            "홈에 표시"
                        }
                        button {
                            class: "link-button danger",
                            onclick: {
                                let site = site.clone();
                                move |_| selection.write().remove(&site)
                            },
                            "삭제"
                        }
                    }
                }
            }
        }
    }
}
