use dioxus::prelude::*;

use ui::{AlertHost, PostFeed, ServicesProvider, SessionProvider, SessionState, SiteSelection, Tab};
use views::{
    Board, BowFactory, ChangeUserInfo, CheckUserInfo, DeleteAccount, First, Home, Login, MyPage,
    PostDetail, SelectSite, SessionGate, SignUp, SiteInfo, TabLayout, WritePost,
};

mod views;

/// Used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,api=debug,ui=debug,store=debug,mobile=debug";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    First {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    SignUp {},
    #[layout(SessionGate)]
        #[layout(TabLayout)]
            #[route("/home")]
            Home {},
            #[route("/bow-factory")]
            BowFactory {},
            #[route("/board")]
            Board {},
            #[route("/my-page")]
            MyPage {},
        #[end_layout]
        #[route("/select-site")]
        SelectSite {},
        #[route("/sites/:name")]
        SiteInfo { name: String },
        #[route("/board/write")]
        WritePost {},
        #[route("/board/posts/:index")]
        PostDetail { index: usize },
        #[route("/my-page/info")]
        CheckUserInfo {},
        #[route("/my-page/edit")]
        ChangeUserInfo {},
        #[route("/my-page/delete")]
        DeleteAccount {},
}

impl Route {
    /// Routes behind [`SessionGate`].
    fn requires_session(&self) -> bool {
        !matches!(self, Route::First {} | Route::Login {} | Route::SignUp {})
    }

    /// The tab highlighted while this route is shown.
    fn tab(&self) -> Option<Tab> {
        match self {
            Route::Home {} => Some(Tab::Home),
            Route::BowFactory {} | Route::SelectSite {} | Route::SiteInfo { .. } => {
                Some(Tab::BowFactory)
            }
            Route::Board {} | Route::WritePost {} | Route::PostDetail { .. } => Some(Tab::Board),
            Route::MyPage {}
            | Route::CheckUserInfo {}
            | Route::ChangeUserInfo {}
            | Route::DeleteAccount {} => Some(Tab::MyPage),
            Route::First {} | Route::Login {} | Route::SignUp {} => None,
        }
    }

    fn for_tab(tab: Tab) -> Route {
        match tab {
            Tab::Home => Route::Home {},
            Tab::BowFactory => Route::BowFactory {},
            Tab::Board => Route::Board {},
            Tab::MyPage => Route::MyPage {},
        }
    }
}

/// Whether `route` may be shown for `session`.
fn route_reachable(route: &Route, session: &SessionState) -> bool {
    !route.requires_session() || session.is_authenticated()
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("Global tracing subscriber already installed");
    }
}

fn main() {
    init_tracing();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(SiteSelection::default()));
    use_context_provider(|| Signal::new(PostFeed::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::GLIDEMATE_CSS }

        SessionProvider {
            ServicesProvider {
                AlertHost {
                    Router::<Route> {}
                }
            }
        }
    }
}
