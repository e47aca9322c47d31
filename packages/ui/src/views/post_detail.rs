use dioxus::prelude::*;

use crate::views::Placeholder;
use crate::{use_api, use_post_feed};

/// One post from the last fetched feed.
#[component]
pub fn PostDetailView(index: usize, on_back: EventHandler<()>) -> Element {
    let api = use_api();
    let feed = use_post_feed();
    let post = feed.read().get(index).cloned();

    rsx! {
        div {
            class: "screen post-detail-screen",
            div {
                class: "screen-header",
                button {
                    class: "link-button",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h1 { class: "screen-title", "게시글" }
            }

            if let Some(post) = post {
                article {
                    class: "card post-detail",
                    span { class: "post-board", "{post.board_type}" }
                    h2 { class: "post-detail-title", "{post.title}" }
                    if let Some(location) = post.location.as_deref().filter(|l| !l.is_empty()) {
                        p { class: "post-location", "방문한 장소: {location}" }
                    }
                    p { class: "post-detail-content", "{post.content}" }
                    div {
                        class: "post-images",
                        for (i, path) in post.images.iter().enumerate() {
                            img {
                                key: "{i}",
                                class: "post-image",
                                src: api.media_url(path),
                                alt: format!("사진{}", i + 1),
                            }
                        }
                    }
                }
            } else {
                Placeholder { message: "게시물을 찾을 수 없습니다." }
            }
        }
    }
}
