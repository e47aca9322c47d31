use dioxus::prelude::*;

use ui::views::LoadingView;
use ui::{use_session, TabBar};

use crate::{route_reachable, Route};

/// Wraps every protected route. Re-renders on each session change and sends
/// the user back to [`Route::First`] once no token is held.
#[component]
pub fn SessionGate() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let state = session();
    if state.loading {
        return rsx! { LoadingView {} };
    }
    if !route_reachable(&route, &state) {
        tracing::debug!("No session for {}, redirecting", route);
        nav.replace(Route::First {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// The four main tabs with the bottom tab bar.
#[component]
pub fn TabLayout() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        Outlet::<Route> {}
        TabBar {
            active: route.tab(),
            on_select: move |tab| {
                nav.push(Route::for_tab(tab));
            },
        }
    }
}
