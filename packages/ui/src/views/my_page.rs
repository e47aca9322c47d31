use api::{require_token, ApiError};
use dioxus::prelude::*;

use crate::icons::{FaChevronRight, FaCircleUser};
use crate::{show_alert, sign_out, use_alerts, use_api, use_session, use_session_store, Icon};

/// MyPage tab: account menu and logout.
#[component]
pub fn MyPageView(
    on_check_info: EventHandler<()>,
    on_change_info: EventHandler<()>,
    on_delete_account: EventHandler<()>,
    on_logged_out: EventHandler<()>,
) -> Element {
    let api = use_api();
    let session = use_session();
    let store = use_session_store();
    let mut alerts = use_alerts();

    let user = use_resource(move || {
        let api = api.clone();
        async move {
            let result: Result<_, ApiError> = async {
                let token = require_token(session.peek().token.clone())?;
                api.client()?.get_user_info(&token).await
            }
            .await;
            result
                .inspect_err(|e| tracing::warn!("Failed to load account: {}", e))
                .ok()
        }
    });

    let handle_logout = move |_| {
        let store = store.clone();
        spawn(async move {
            if let Err(e) = sign_out(session, store).await {
                tracing::error!("Failed to clear stored session: {}", e);
                show_alert(&mut alerts, "오류", "저장된 로그인 정보를 지우지 못했습니다.");
            }
            on_logged_out.call(());
        });
    };

    let greeting = match &*user.read() {
        Some(Some(info)) => format!("{}님", info.display_name()),
        _ => "파일럿님".to_string(),
    };

    rsx! {
        div {
            class: "screen my-page-screen",
            div {
                class: "profile",
                Icon { icon: FaCircleUser, width: 56, height: 56 }
                h2 { class: "profile-name", "{greeting}" }
            }

            ul {
                class: "menu",
                li {
                    class: "menu-item",
                    onclick: move |_| on_check_info.call(()),
                    span { "개인정보 확인" }
                    Icon { icon: FaChevronRight, width: 14, height: 14 }
                }
                li {
                    class: "menu-item",
                    onclick: move |_| on_change_info.call(()),
                    span { "개인정보 수정" }
                    Icon { icon: FaChevronRight, width: 14, height: 14 }
                }
                li {
                    class: "menu-item danger",
                    onclick: move |_| on_delete_account.call(()),
                    span { "회원 탈퇴" }
                    Icon { icon: FaChevronRight, width: 14, height: 14 }
                }
            }

            button {
                class: "button button-outline",
                onclick: handle_logout,
                "로그아웃"
            }
        }
    }
}
