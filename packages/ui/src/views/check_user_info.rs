use api::{require_token, ApiError};
use dioxus::prelude::*;

use crate::views::Placeholder;
use crate::{report_error, use_alerts, use_api, use_session};

#[component]
pub fn CheckUserInfoView(on_change: EventHandler<()>, on_back: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut alerts = use_alerts();

    let info = use_resource(move || {
        let api = api.clone();
        async move {
            let result: Result<_, ApiError> = async {
                let token = require_token(session.peek().token.clone())?;
                api.client()?.get_user_info(&token).await
            }
            .await;
            match result {
                Ok(info) => Some(info),
                Err(e) => {
                    report_error(&mut alerts, &e, "오류", "개인정보를 가져오는 중 오류가 발생했습니다.");
                    None
                }
            }
        }
    });

    rsx! {
        div {
            class: "screen check-user-info-screen",
            div {
                class: "screen-header",
                button {
                    class: "link-button",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h1 { class: "screen-title", "개인정보 확인" }
            }

            match &*info.read() {
                None => rsx! { Placeholder { message: "불러오는 중..." } },
                Some(None) => rsx! { Placeholder { message: "개인정보를 불러오지 못했습니다." } },
                Some(Some(user)) => rsx! {
                    dl {
                        class: "card info-list",
                        dt { "아이디" }
                        dd { "{user.id}" }
                        dt { "이름" }
                        dd { {user.name.clone().unwrap_or_else(|| "-".to_string())} }
                        dt { "이메일" }
                        dd { {user.email.clone().unwrap_or_else(|| "-".to_string())} }
                    }
                    button {
                        class: "button button-primary",
                        onclick: move |_| on_change.call(()),
                        "개인정보 수정"
                    }
                },
            }
        }
    }
}
