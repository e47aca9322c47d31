use dioxus::prelude::*;

use ui::views::{BoardView, PostDetailView, WritePostView};

use crate::Route;

#[component]
pub fn Board() -> Element {
    let nav = use_navigator();

    rsx! {
        BoardView {
            on_write: move |_| {
                nav.push(Route::WritePost {});
            },
            on_open_post: move |index: usize| {
                nav.push(Route::PostDetail { index });
            },
        }
    }
}

#[component]
pub fn WritePost() -> Element {
    let nav = use_navigator();

    rsx! {
        WritePostView {
            on_done: move |_| nav.go_back(),
            on_cancel: move |_| nav.go_back(),
        }
    }
}

#[component]
pub fn PostDetail(index: usize) -> Element {
    let nav = use_navigator();

    rsx! {
        PostDetailView {
            index,
            on_back: move |_| nav.go_back(),
        }
    }
}
