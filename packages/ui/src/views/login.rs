//! Login screen with id/password.

use api::{ApiError, Credentials};
use dioxus::prelude::*;

use crate::{report_error, show_alert, sign_in, use_alerts, use_api, use_session, use_session_store};

/// Login form. Calls `on_logged_in` once the token is stored.
#[component]
pub fn LoginView(on_logged_in: EventHandler<()>, on_sign_up: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let store = use_session_store();
    let mut alerts = use_alerts();
    let mut user_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let store = store.clone();
        spawn(async move {
            error.set(None);

            let id = user_id().trim().to_string();
            let pw = password();
            if id.is_empty() {
                error.set(Some("아이디를 입력하세요.".to_string()));
                return;
            }
            if pw.is_empty() {
                error.set(Some("비밀번호를 입력하세요.".to_string()));
                return;
            }

            loading.set(true);
            let result: Result<String, ApiError> = async {
                let client = api.client()?;
                client.login(&Credentials { id, password: pw }).await
            }
            .await;

            match result {
                Ok(token) => {
                    if let Err(e) = sign_in(session, store, token).await {
                        tracing::error!("Failed to persist session: {}", e);
                        show_alert(&mut alerts, "오류", "로그인 정보를 저장하지 못했습니다.");
                        loading.set(false);
                        return;
                    }
                    on_logged_in.call(());
                }
                Err(e) => {
                    loading.set(false);
                    if e.status() == Some(401) {
                        error.set(Some("아이디 또는 비밀번호가 올바르지 않습니다.".to_string()));
                    } else {
                        report_error(&mut alerts, &e, "로그인 실패", "로그인 중 오류가 발생했습니다.");
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "screen screen-centered",
            h1 { class: "screen-title", "로그인" }

            form {
                class: "form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "아이디",
                    value: user_id(),
                    oninput: move |evt: FormEvent| user_id.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "비밀번호",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "로그인 중..." } else { "로그인" }
                }
            }

            p {
                class: "form-footer",
                "계정이 없으신가요? "
                button {
                    class: "link-button",
                    onclick: move |_| on_sign_up.call(()),
                    "회원가입"
                }
            }
        }
    }
}
