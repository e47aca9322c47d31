use dioxus::prelude::*;

use ui::views::{BowFactoryView, SelectSiteView, SiteInfoView};

use crate::Route;

#[component]
pub fn BowFactory() -> Element {
    let nav = use_navigator();

    rsx! {
        BowFactoryView {
            on_select_site: move |_| {
                nav.push(Route::SelectSite {});
            },
            on_open_site: move |name: String| {
                nav.push(Route::SiteInfo { name });
            },
        }
    }
}

#[component]
pub fn SelectSite() -> Element {
    let nav = use_navigator();

    rsx! {
        SelectSiteView {
            on_picked: move |_| {
                nav.replace(Route::BowFactory {});
            },
            on_cancel: move |_| nav.go_back(),
        }
    }
}

#[component]
pub fn SiteInfo(name: String) -> Element {
    let nav = use_navigator();

    rsx! {
        SiteInfoView {
            name,
            on_show_weather: move |_| {
                nav.push(Route::Home {});
            },
            on_back: move |_| nav.go_back(),
        }
    }
}
