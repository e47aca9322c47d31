use dioxus::prelude::*;

use crate::icons::{FaHouse, FaList, FaMap, FaUser};
use crate::Icon;

/// Bottom tabs of the authenticated app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Home,
    BowFactory,
    Board,
    MyPage,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::BowFactory, Tab::Board, Tab::MyPage];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "홈",
            Tab::BowFactory => "활공장",
            Tab::Board => "게시판",
            Tab::MyPage => "마이페이지",
        }
    }
}

fn tab_icon(tab: Tab) -> Element {
    match tab {
        Tab::Home => rsx! { Icon { icon: FaHouse, width: 20, height: 20 } },
        Tab::BowFactory => rsx! { Icon { icon: FaMap, width: 20, height: 20 } },
        Tab::Board => rsx! { Icon { icon: FaList, width: 20, height: 20 } },
        Tab::MyPage => rsx! { Icon { icon: FaUser, width: 20, height: 20 } },
    }
}

#[component]
pub fn TabBar(active: Option<Tab>, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        nav {
            class: "tab-bar",
            for tab in Tab::ALL {
                button {
                    key: "{tab.label()}",
                    class: if active == Some(tab) { "tab-bar-item active" } else { "tab-bar-item" },
                    onclick: move |_| on_select.call(tab),
                    {tab_icon(tab)}
                    span { class: "tab-bar-label", "{tab.label()}" }
                }
            }
        }
    }
}
