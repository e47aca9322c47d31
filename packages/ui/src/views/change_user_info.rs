use api::{require_token, ApiError, UserUpdate};
use dioxus::prelude::*;

use crate::{report_error, show_alert, use_alerts, use_api, use_session};

/// `None` for blank input, so untouched fields are left out of the update.
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn build_update(name: &str, email: &str, password: &str, confirm: &str) -> Result<UserUpdate, &'static str> {
    if password != confirm {
        return Err("비밀번호가 일치하지 않습니다.");
    }
    let update = UserUpdate {
        name: non_empty(name),
        email: non_empty(email),
        password: (!password.is_empty()).then(|| password.to_string()),
    };
    if update.is_empty() {
        return Err("변경할 내용을 입력하세요.");
    }
    Ok(update)
}

#[component]
pub fn ChangeUserInfoView(on_saved: EventHandler<()>, on_back: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut alerts = use_alerts();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let update = match build_update(&name(), &email(), &password(), &confirm()) {
                Ok(update) => update,
                Err(msg) => {
                    error.set(Some(msg.to_string()));
                    return;
                }
            };
            error.set(None);
            saving.set(true);

            let result: Result<(), ApiError> = async {
                let token = require_token(session.peek().token.clone())?;
                api.client()?.update_user_info(&update, &token).await
            }
            .await;
            saving.set(false);

            match result {
                Ok(()) => {
                    tracing::info!("Account updated");
                    password.set(String::new());
                    confirm.set(String::new());
                    show_alert(&mut alerts, "완료", "개인정보가 수정되었습니다.");
                    on_saved.call(());
                }
                Err(e) => report_error(&mut alerts, &e, "오류", "개인정보 수정 중 오류가 발생했습니다."),
            }
        });
    };

    rsx! {
        div {
            class: "screen change-user-info-screen",
            div {
                class: "screen-header",
                button {
                    class: "link-button",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h1 { class: "screen-title", "개인정보 수정" }
            }

            form {
                class: "form",
                onsubmit: handle_save,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "새 이름",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "새 이메일",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "새 비밀번호",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "새 비밀번호 확인",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }
                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "저장 중..." } else { "저장" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" 홍길동 "), Some("홍길동".to_string()));
    }

    #[test]
    fn test_build_update_skips_blank_fields() {
        let update = build_update("", "pilot@example.com", "", "").unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.email.as_deref(), Some("pilot@example.com"));
        assert_eq!(update.password, None);

        assert_eq!(build_update("", "", "", ""), Err("변경할 내용을 입력하세요."));
        assert_eq!(build_update("", "", "a", "b"), Err("비밀번호가 일치하지 않습니다."));
    }
}
