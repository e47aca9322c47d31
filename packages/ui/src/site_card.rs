use dioxus::prelude::*;

/// Summary card for one takeoff site: name, summary text and photo.
#[component]
pub fn SiteCard(
    name: String,
    summary: Option<String>,
    image_src: String,
    on_open: Option<EventHandler<String>>,
) -> Element {
    let open_name = name.clone();

    rsx! {
        div {
            class: "card site-card",
            onclick: move |_| {
                if let Some(handler) = on_open {
                    handler.call(open_name.clone());
                }
            },
            h3 { class: "site-card-title", "{name}" }
            if let Some(summary) = summary {
                p { class: "site-card-summary", "{summary}" }
            }
            img {
                class: "site-card-image",
                src: "{image_src}",
                alt: "{name}",
            }
        }
    }
}
