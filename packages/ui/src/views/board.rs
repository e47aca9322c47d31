use api::{require_token, ApiError};
use dioxus::prelude::*;
use store::BoardType;

use crate::icons::FaPen;
use crate::views::Placeholder;
use crate::{report_error, use_alerts, use_api, use_post_feed, use_session, Icon};

/// Which posts the board list shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BoardFilter {
    #[default]
    All,
    Board(BoardType),
}

impl BoardFilter {
    pub fn options() -> Vec<BoardFilter> {
        std::iter::once(BoardFilter::All)
            .chain(BoardType::WRITABLE.into_iter().map(BoardFilter::Board))
            .collect()
    }

    pub fn label(&self) -> &str {
        match self {
            BoardFilter::All => "전체",
            BoardFilter::Board(board) => board.as_str(),
        }
    }

    pub fn board(&self) -> Option<&BoardType> {
        match self {
            BoardFilter::All => None,
            BoardFilter::Board(board) => Some(board),
        }
    }
}

/// Board tab: the post list with a board filter.
#[component]
pub fn BoardView(on_write: EventHandler<()>, on_open_post: EventHandler<usize>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut feed = use_post_feed();
    let mut alerts = use_alerts();
    let mut filter = use_signal(BoardFilter::default);
    let mut loading = use_signal(|| true);

    let _posts = use_resource(move || {
        let api = api.clone();
        async move {
            let result: Result<_, ApiError> = async {
                let token = require_token(session.peek().token.clone())?;
                api.client()?.list_posts(&token).await
            }
            .await;
            match result {
                Ok(posts) => feed.write().posts = posts,
                Err(e) => report_error(&mut alerts, &e, "오류", "게시물을 가져오는 중 오류가 발생했습니다."),
            }
            loading.set(false);
        }
    });

    let current_filter = filter();
    let feed_snapshot = feed();
    let rows = feed_snapshot.filtered(current_filter.board());

    rsx! {
        div {
            class: "screen board-screen",
            div {
                class: "screen-header",
                h1 { class: "screen-title", "게시판" }
                button {
                    class: "button button-primary write-button",
                    onclick: move |_| on_write.call(()),
                    Icon { icon: FaPen, width: 14, height: 14 }
                    span { "글쓰기" }
                }
            }

            div {
                class: "board-filter",
                for option in BoardFilter::options() {
                    button {
                        key: "{option.label()}",
                        class: if option == current_filter { "chip active" } else { "chip" },
                        onclick: {
                            let option = option.clone();
                            move |_| filter.set(option.clone())
                        },
                        "{option.label()}"
                    }
                }
            }

            if loading() && rows.is_empty() {
                Placeholder { message: "불러오는 중..." }
            } else if rows.is_empty() {
                Placeholder { message: "게시물이 없습니다." }
            } else {
                ul {
                    class: "post-list",
                    for (index, post) in rows {
                        li {
                            key: "{index}",
                            class: "post-list-item",
                            onclick: move |_| on_open_post.call(index),
                            span { class: "post-board", "{post.board_type}" }
                            span { class: "post-title", "{post.title}" }
                            if let Some(location) = post.location.as_deref().filter(|l| !l.is_empty()) {
                                span { class: "post-location", "{location}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
