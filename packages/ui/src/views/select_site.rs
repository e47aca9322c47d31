use dioxus::prelude::*;
use store::TakeoffSite;

use crate::views::Placeholder;
use crate::{report_error, use_alerts, use_api, use_site_selection};

/// Site picker. Picking a site adds it to the selection and makes it active.
#[component]
pub fn SelectSiteView(on_picked: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let mut selection = use_site_selection();
    let mut alerts = use_alerts();
    let mut filter = use_signal(String::new);

    let sites = use_resource(move || {
        let api = api.clone();
        async move {
            let result = match api.client() {
                Ok(client) => client.list_sites().await,
                Err(e) => Err(e),
            };
            result.unwrap_or_else(|e| {
                report_error(&mut alerts, &e, "오류", "활공장 목록을 가져오는 중 오류가 발생했습니다.");
                Vec::new()
            })
        }
    });

    let query = filter();
    let visible: Option<Vec<TakeoffSite>> = sites.read().as_ref().map(|all| {
        all.iter()
            .filter(|site| query.is_empty() || site.name.contains(query.trim()))
            .cloned()
            .collect()
    });

    rsx! {
        div {
            class: "screen select-site-screen",
            div {
                class: "screen-header",
                button {
                    class: "link-button",
                    onclick: move |_| on_cancel.call(()),
                    "✕"
                }
                h1 { class: "screen-title", "활공장 선택" }
            }
            input {
                class: "input",
                r#type: "search",
                placeholder: "활공장 이름 검색",
                value: filter(),
                oninput: move |evt: FormEvent| filter.set(evt.value()),
            }

            match visible {
                None => rsx! { Placeholder { message: "불러오는 중..." } },
                Some(list) if list.is_empty() => rsx! {
                    Placeholder { message: "활공장이 없습니다." }
                },
                Some(list) => rsx! {
                    ul {
                        class: "site-list",
                        for site in list {
                            li {
                                key: "{site.name}",
                                class: "site-list-item",
                                onclick: {
                                    let name = site.name.clone();
                                    move |_| {
                                        tracing::debug!("Picked site {}", name);
                                        selection.write().select(&name);
                                        on_picked.call(());
                                    }
                                },
                                span { class: "site-list-name", "{site.name}" }
                                if !site.summary.is_empty() {
                                    span { class: "site-list-summary", "{site.summary}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
