use dioxus::prelude::*;

use ui::views::{ChangeUserInfoView, CheckUserInfoView, DeleteAccountView, MyPageView};

use crate::Route;

#[component]
pub fn MyPage() -> Element {
    let nav = use_navigator();

    rsx! {
        MyPageView {
            on_check_info: move |_| {
                nav.push(Route::CheckUserInfo {});
            },
            on_change_info: move |_| {
                nav.push(Route::ChangeUserInfo {});
            },
            on_delete_account: move |_| {
                nav.push(Route::DeleteAccount {});
            },
            on_logged_out: move |_| {
                nav.replace(Route::First {});
            },
        }
    }
}

#[component]
pub fn CheckUserInfo() -> Element {
    let nav = use_navigator();

    rsx! {
        CheckUserInfoView {
            on_change: move |_| {
                nav.replace(Route::ChangeUserInfo {});
            },
            on_back: move |_| nav.go_back(),
        }
    }
}

#[component]
pub fn ChangeUserInfo() -> Element {
    let nav = use_navigator();

    rsx! {
        ChangeUserInfoView {
            on_saved: move |_| {
                nav.replace(Route::MyPage {});
            },
            on_back: move |_| nav.go_back(),
        }
    }
}

#[component]
pub fn DeleteAccount() -> Element {
    let nav = use_navigator();

    rsx! {
        DeleteAccountView {
            on_deleted: move |_| {
                nav.replace(Route::First {});
            },
            on_cancel: move |_| nav.go_back(),
        }
    }
}
