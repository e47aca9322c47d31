pub mod config;
pub mod error;
pub mod kv;
pub mod models;
pub mod session;
pub mod sites;
pub mod weather;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

pub use config::GlideMateConfig;
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use models::{
    BoardType, Credentials, ImageAttachment, Post, PostDraft, SignUpRequest, TakeoffSite,
    UserInfo, UserUpdate, MAX_IMAGES,
};
pub use session::SessionStore;
pub use sites::SiteImages;
pub use weather::{compass_label, WeatherSnapshot, WindDirection};
