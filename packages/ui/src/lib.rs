//! This crate contains all shared UI for GlideMate.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const GLIDEMATE_CSS: Asset = asset!("/assets/glidemate.css");

mod services;
pub use services::{data_dir, use_api, use_site_gallery, ApiContext, ServicesProvider, SiteGallery};

mod session;
pub use session::{
    make_session_store, sign_in, sign_out, use_session, use_session_store, AppSessionStore,
    SessionProvider, SessionState,
};

pub mod alert;
pub use alert::{report_error, show_alert, use_alerts, Alert, AlertHost, Alerts};

mod shared_state;
pub use shared_state::{use_post_feed, use_site_selection, PostFeed, SiteSelection};

mod tab_bar;
pub use tab_bar::{Tab, TabBar};

mod site_card;
pub use site_card::SiteCard;
