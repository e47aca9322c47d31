use dioxus::prelude::*;

use ui::views::{FirstView, LoginView, SignUpView};
use ui::use_session;

use crate::Route;

/// Landing route. An already authenticated session goes straight to Home.
#[component]
pub fn First() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if session().is_authenticated() {
        nav.replace(Route::Home {});
    }

    rsx! {
        FirstView {
            on_login: move |_| {
                nav.push(Route::Login {});
            },
            on_sign_up: move |_| {
                nav.push(Route::SignUp {});
            },
        }
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_logged_in: move |_| {
                nav.replace(Route::Home {});
            },
            on_sign_up: move |_| {
                nav.replace(Route::SignUp {});
            },
        }
    }
}

#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();

    rsx! {
        SignUpView {
            on_signed_up: move |_| {
                nav.replace(Route::Login {});
            },
            on_back: move |_| nav.go_back(),
        }
    }
}
