use dioxus::prelude::*;

use crate::icons::FaParachuteBox;
use crate::Icon;

/// Landing screen before login.
#[component]
pub fn FirstView(on_login: EventHandler<()>, on_sign_up: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "screen screen-centered first-screen",
            div {
                class: "brand",
                Icon { icon: FaParachuteBox, width: 64, height: 64 }
                h1 { class: "brand-name", "GlideMate" }
                p { class: "brand-tagline", "패러글라이딩 · 행글라이딩 파일럿을 위한 활공 도우미" }
            }
            div {
                class: "button-stack",
                button {
                    class: "button button-primary",
                    onclick: move |_| on_login.call(()),
                    "로그인"
                }
                button {
                    class: "button button-outline",
                    onclick: move |_| on_sign_up.call(()),
                    "회원가입"
                }
            }
        }
    }
}
