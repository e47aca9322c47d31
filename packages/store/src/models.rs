//! Records exchanged with the GlideMate backend, plus the local post draft.

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of images attached to one post.
pub const MAX_IMAGES: usize = 5;

/// A paragliding takeoff site ("bow factory") as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffSite {
    pub name: String,
    #[serde(default)]
    pub summary: String,
}

/// Community board a post belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BoardType {
    /// 자유게시판
    #[default]
    Free,
    /// 모임게시판
    Meetup,
    /// A board name this client does not know about yet.
    Other(String),
}

impl BoardType {
    /// The boards a user can write to.
    pub const WRITABLE: [BoardType; 2] = [BoardType::Free, BoardType::Meetup];

    pub fn as_str(&self) -> &str {
        match self {
            BoardType::Free => "자유게시판",
            BoardType::Meetup => "모임게시판",
            BoardType::Other(name) => name,
        }
    }
}

impl From<String> for BoardType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "자유게시판" => BoardType::Free,
            "모임게시판" => BoardType::Meetup,
            _ => BoardType::Other(value),
        }
    }
}

impl From<BoardType> for String {
    fn from(value: BoardType) -> Self {
        match value {
            BoardType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for BoardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A board post as returned by `GET /api/getPosts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, deserialize_with = "null_as_default")]
    pub board_type: BoardType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Server-side image URLs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

/// Read an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Post {
    /// One-line label used in post lists, e.g. `자유게시판 (첫 비행)`.
    pub fn list_label(&self) -> String {
        format!("{} ({})", self.board_type, self.title)
    }
}

/// A local image picked from the device library.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    /// Local handle reported by the picker.
    pub uri: String,
    pub data: Vec<u8>,
}

/// Form state for a post being written.
///
/// No field is required: a draft with an empty title is still submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub location: String,
    pub content: String,
    pub board: BoardType,
    images: Vec<ImageAttachment>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[ImageAttachment] {
        &self.images
    }

    pub fn can_add_image(&self) -> bool {
        self.images.len() < MAX_IMAGES
    }

    /// Attach an image. Returns `false` and leaves the draft untouched when
    /// it already holds [`MAX_IMAGES`].
    pub fn add_image(&mut self, image: ImageAttachment) -> bool {
        if !self.can_add_image() {
            return false;
        }
        self.images.push(image);
        true
    }

    /// Remove the image at `index`. Out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageAttachment> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }
}

/// Account information shown on the My Page screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to the account id if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub id: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub id: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

/// Partial account update. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}
