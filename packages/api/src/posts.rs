//! Multipart encoding for `POST /api/createPosts`.
//!
//! The backend expects four text fields (`title`, `location`, `content`, `board`)
//! followed by one `image` file part per attachment, named `image{index}.jpg`.
//! Nothing is validated here: an empty title is sent as an empty field.

use reqwest::multipart::{Form, Part};
use store::PostDraft;

use crate::error::ApiError;

/// Form key shared by every image part.
pub const IMAGE_FIELD: &str = "image";
const IMAGE_MIME: &str = "image/jpeg";

/// Text fields of the create-post form, in the order they are sent.
pub fn text_fields(draft: &PostDraft) -> [(&'static str, String); 4] {
    [
        ("title", draft.title.clone()),
        ("location", draft.location.clone()),
        ("content", draft.content.clone()),
        ("board", draft.board.as_str().to_string()),
    ]
}

/// File name synthesized for the image at `index`.
pub fn image_file_name(index: usize) -> String {
    format!("image{index}.jpg")
}

/// Build the multipart body for `draft`.
pub fn build_form(draft: &PostDraft) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in text_fields(draft) {
        form = form.text(name, value);
    }
    for (index, image) in draft.images().iter().enumerate() {
        let part = Part::bytes(image.data.clone())
            .file_name(image_file_name(index))
            .mime_str(IMAGE_MIME)?;
        form = form.part(IMAGE_FIELD, part);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{BoardType, ImageAttachment};

    #[test]
    fn test_text_fields_keep_empty_values() {
        let mut draft = PostDraft::new();
        draft.content = "바람 좋았어요".to_string();
        draft.board = BoardType::Meetup;

        let fields = text_fields(&draft);
        assert_eq!(fields[0], ("title", String::new()));
        assert_eq!(fields[1], ("location", String::new()));
        assert_eq!(fields[2], ("content", "바람 좋았어요".to_string()));
        assert_eq!(fields[3], ("board", "모임게시판".to_string()));
    }

    #[test]
    fn test_image_parts_use_synthesized_names() {
        assert_eq!(image_file_name(0), "image0.jpg");
        assert_eq!(image_file_name(4), "image4.jpg");

        let mut draft = PostDraft::new();
        draft.add_image(ImageAttachment {
            uri: "content://media/1".to_string(),
            data: vec![0xff, 0xd8],
        });
        let form = build_form(&draft).unwrap();
        assert!(!form.boundary().is_empty());
    }
}
