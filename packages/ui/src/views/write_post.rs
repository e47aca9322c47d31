//! Post composer with up to [`MAX_IMAGES`] photos.

use api::{require_token, ApiError};
use dioxus::prelude::*;
use store::{BoardType, ImageAttachment, PostDraft, MAX_IMAGES};
use thiserror::Error;

use crate::icons::FaCamera;
use crate::{show_alert, use_alerts, use_api, use_session, Icon};

/// Failure while attaching a picked photo.
#[derive(Debug, Error, PartialEq)]
pub enum PickError {
    /// The file was picked but the app may not read it.
    #[error("cannot read picked file {0}")]
    PermissionDenied(String),
}

fn attachment(name: String, data: Option<Vec<u8>>) -> Result<ImageAttachment, PickError> {
    match data {
        Some(data) => Ok(ImageAttachment { uri: name, data }),
        None => Err(PickError::PermissionDenied(name)),
    }
}

/// Alert text for a failed submit. A response from the backend is a rejection;
/// anything else is an error on the way there.
fn submit_failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Status { .. } | ApiError::UnexpectedStatus(_) => "글 등록에 실패했습니다.",
        _ => "글 등록 중 오류가 발생했습니다.",
    }
}

#[component]
pub fn WritePostView(on_done: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut alerts = use_alerts();
    let mut draft = use_signal(PostDraft::new);
    let mut submitting = use_signal(|| false);

    let handle_pick = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        for name in engine.files() {
            if !draft.read().can_add_image() {
                tracing::debug!("Ignoring {}: draft already has {} images", name, MAX_IMAGES);
                break;
            }
            let data = engine.read_file(&name).await;
            match attachment(name, data) {
                Ok(image) => {
                    draft.write().add_image(image);
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    show_alert(&mut alerts, "권한 거부", "사진에 접근할 수 있도록 권한을 허용해 주세요.");
                }
            }
        }
    };

    let handle_submit = move |_| {
        let api = api.clone();
        spawn(async move {
            if submitting() {
                return;
            }
            submitting.set(true);
            let snapshot = draft.read().clone();
            let result: Result<(), ApiError> = async {
                let token = require_token(session.peek().token.clone())?;
                api.client()?.create_post(&snapshot, &token).await
            }
            .await;
            submitting.set(false);

            match result {
                Ok(()) => {
                    tracing::info!("Post created on {}", snapshot.board);
                    show_alert(&mut alerts, "완료", "글이 성공적으로 등록되었습니다.");
                    on_done.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to create post: {}", e);
                    show_alert(&mut alerts, "오류", submit_failure_message(&e));
                }
            }
        });
    };

    let current = draft();
    let can_add = current.can_add_image();

    rsx! {
        div {
            class: "screen write-post-screen",
            div {
                class: "screen-header",
                button {
                    class: "link-button",
                    onclick: move |_| on_cancel.call(()),
                    "✕"
                }
                h1 { class: "screen-title", "글쓰기" }
                button {
                    class: "button button-primary",
                    disabled: submitting(),
                    onclick: handle_submit,
                    "완료"
                }
            }

            input {
                class: "input",
                r#type: "text",
                placeholder: "제목",
                value: current.title.clone(),
                oninput: move |evt: FormEvent| draft.write().title = evt.value(),
            }
            input {
                class: "input",
                r#type: "text",
                placeholder: "방문한 장소(선택)",
                value: current.location.clone(),
                oninput: move |evt: FormEvent| draft.write().location = evt.value(),
            }
            textarea {
                class: "input textarea",
                placeholder: "내용",
                value: current.content.clone(),
                oninput: move |evt: FormEvent| draft.write().content = evt.value(),
            }
            select {
                class: "input",
                value: current.board.as_str().to_string(),
                onchange: move |evt: FormEvent| draft.write().board = BoardType::from(evt.value()),
                for board in BoardType::WRITABLE {
                    option {
                        key: "{board}",
                        value: "{board}",
                        selected: board == current.board,
                        "{board}"
                    }
                }
            }

            div {
                class: "image-picker",
                label {
                    class: if can_add { "image-add" } else { "image-add disabled" },
                    Icon { icon: FaCamera, width: 24, height: 24 }
                    input {
                        class: "image-input",
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        disabled: !can_add,
                        onchange: handle_pick,
                    }
                }
                for (index, _) in current.images().iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "image-thumb",
                        span { class: "image-thumb-label", {format!("사진{}", index + 1)} }
                        button {
                            class: "image-remove",
                            onclick: move |_| {
                                draft.write().remove_image(index);
                            },
                            "✕"
                        }
                    }
                }
            }
            p { class: "image-count", "{current.images().len()} / {MAX_IMAGES}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_pick_is_permission_denied() {
        assert_eq!(
            attachment("photo.jpg".to_string(), None),
            Err(PickError::PermissionDenied("photo.jpg".to_string()))
        );
        let image = attachment("photo.jpg".to_string(), Some(vec![1, 2])).unwrap();
        assert_eq!(image.uri, "photo.jpg");
        assert_eq!(image.data, [1, 2]);
    }

    #[test]
    fn test_submit_failure_messages() {
        assert_eq!(
            submit_failure_message(&ApiError::UnexpectedStatus(200)),
            "글 등록에 실패했습니다."
        );
        assert_eq!(
            submit_failure_message(&ApiError::Status { status: 500, body: String::new() }),
            "글 등록에 실패했습니다."
        );
        assert_eq!(
            submit_failure_message(&ApiError::Unauthenticated),
            "글 등록 중 오류가 발생했습니다."
        );
    }
}
