use api::{ApiError, SignUpRequest};
use dioxus::prelude::*;

use crate::{report_error, show_alert, use_alerts, use_api};

/// Check the sign-up form before it is sent.
fn validate(request: &SignUpRequest, confirm: &str) -> Result<(), &'static str> {
    if request.id.is_empty() {
        return Err("아이디를 입력하세요.");
    }
    if request.password.is_empty() {
        return Err("비밀번호를 입력하세요.");
    }
    if request.password != confirm {
        return Err("비밀번호가 일치하지 않습니다.");
    }
    Ok(())
}

/// Account creation form. Calls `on_signed_up` after the backend accepts it.
#[component]
pub fn SignUpView(on_signed_up: EventHandler<()>, on_back: EventHandler<()>) -> Element {
    let api = use_api();
    let mut alerts = use_alerts();
    let mut user_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let request = SignUpRequest {
                id: user_id().trim().to_string(),
                password: password(),
                name: name().trim().to_string(),
                email: email().trim().to_string(),
            };
            if let Err(msg) = validate(&request, &confirm()) {
                error.set(Some(msg.to_string()));
                return;
            }
            error.set(None);
            loading.set(true);

            let result: Result<(), ApiError> = async {
                let client = api.client()?;
                client.sign_up(&request).await
            }
            .await;
            loading.set(false);

            match result {
                Ok(()) => {
                    tracing::info!("Account {} created", request.id);
                    show_alert(&mut alerts, "회원가입", "회원가입이 완료되었습니다. 로그인해 주세요.");
                    on_signed_up.call(());
                }
                Err(e) => report_error(&mut alerts, &e, "회원가입 실패", "회원가입 중 오류가 발생했습니다."),
            }
        });
    };

    rsx! {
        div {
            class: "screen screen-centered",
            div {
                class: "screen-header",
                button {
                    class: "link-button",
                    onclick: move |_| on_back.call(()),
                    "✕"
                }
                h1 { class: "screen-title", "회원가입" }
            }

            form {
                class: "form",
                onsubmit: handle_sign_up,

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
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "비밀번호 확인",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "이름",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "이메일",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "가입 중..." } else { "가입하기" }
                }
            }
        }
    }
}
