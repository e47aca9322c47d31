//! Modal alerts shown to the user, one at a time.

use std::collections::VecDeque;

use api::ApiError;
use dioxus::prelude::*;

use crate::views::ModalOverlay;

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Pending alerts. The front entry is on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Alerts {
    queue: VecDeque<Alert>,
}

impl Alerts {
    pub fn push(&mut self, title: &str, message: &str) {
        self.queue.push_back(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn current(&self) -> Option<&Alert> {
        self.queue.front()
    }

    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

pub fn use_alerts() -> Signal<Alerts> {
    use_context::<Signal<Alerts>>()
}

pub fn show_alert(alerts: &mut Signal<Alerts>, title: &str, message: &str) {
    alerts.write().push(title, message);
}

/// Message shown for `err`. Connection and session problems get their own
/// text; everything else uses `fallback`.
pub fn user_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Unauthenticated => "로그인이 필요합니다. 다시 로그인해 주세요.".to_string(),
        ApiError::Status { status: 401, .. } => {
            "로그인이 만료되었습니다. 다시 로그인해 주세요.".to_string()
        }
        ApiError::Transport(_) => "서버에 연결할 수 없습니다. 네트워크를 확인해 주세요.".to_string(),
        ApiError::Config(_) => "서버 설정이 올바르지 않습니다.".to_string(),
        _ => fallback.to_string(),
    }
}

/// Log `err` and queue an alert for it.
pub fn report_error(alerts: &mut Signal<Alerts>, err: &ApiError, title: &str, fallback: &str) {
    tracing::error!("{}: {}", fallback, err);
    let message = user_message(err, fallback);
    show_alert(alerts, title, &message);
}

/// Provides [`Alerts`] to its children and renders the front alert over them.
#[component]
pub fn AlertHost(children: Element) -> Element {
    let mut alerts = use_context_provider(|| Signal::new(Alerts::default()));
    let current = alerts().current().cloned();

    rsx! {
        {children}
        if let Some(alert) = current {
            ModalOverlay {
                on_close: move |_| alerts.write().dismiss(),
                div {
                    class: "alert",
                    h3 { class: "alert-title", "{alert.title}" }
                    p { class: "alert-message", "{alert.message}" }
                    button {
                        class: "button button-primary alert-confirm",
                        onclick: move |_| alerts.write().dismiss(),
                        "확인"
                    }
                }
            }
        }
    }
}
