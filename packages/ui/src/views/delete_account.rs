use api::{require_token, ApiError};
use dioxus::prelude::*;

use crate::{report_error, show_alert, sign_out, use_alerts, use_api, use_session, use_session_store};

/// Account deletion confirmation. On success the session is cleared,
/// which closes every protected screen.
#[component]
pub fn DeleteAccountView(on_deleted: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let store = use_session_store();
    let mut alerts = use_alerts();
    let mut confirmed = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let handle_delete = move |_| {
        let api = api.clone();
        let store = store.clone();
        spawn(async move {
            deleting.set(true);
            let result: Result<(), ApiError> = async {
                let token = require_token(session.peek().token.clone())?;
                api.client()?.delete_account(&token).await
            }
            .await;

            match result {
                Ok(()) => {
                    tracing::info!("Account deleted");
                    if let Err(e) = sign_out(session, store).await {
                        tracing::error!("Failed to clear stored session: {}", e);
                    }
                    show_alert(&mut alerts, "회원 탈퇴", "회원 탈퇴가 완료되었습니다.");
                    on_deleted.call(());
                }
                Err(e) => {
                    deleting.set(false);
                    report_error(&mut alerts, &e, "오류", "회원 탈퇴 중 오류가 발생했습니다.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "screen screen-centered delete-account-screen",
            h1 { class: "screen-title", "회원 탈퇴" }
            p {
                class: "warning-text",
                "탈퇴하면 계정과 작성한 정보가 삭제되며 되돌릴 수 없습니다."
            }
            label {
                class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: confirmed(),
                    onchange: move |evt: FormEvent| confirmed.set(evt.checked()),
                }
                span { "위 내용을 확인했습니다." }
            }
            div {
                class: "button-stack",
                button {
                    class: "button button-danger",
                    disabled: !confirmed() || deleting(),
                    onclick: handle_delete,
                    if deleting() { "탈퇴 중..." } else { "탈퇴하기" }
                }
                button {
                    class: "button button-outline",
                    onclick: move |_| on_cancel.call(()),
                    "취소"
                }
            }
        }
    }
}
