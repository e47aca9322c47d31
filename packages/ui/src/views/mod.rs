mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod placeholder;
pub use placeholder::{LoadingView, Placeholder};

mod first;
pub use first::FirstView;

mod login;
pub use login::LoginView;

mod sign_up;
pub use sign_up::SignUpView;

mod home;
pub use home::{HomeView, WeatherDisplay};

mod bow_factory;
pub use bow_factory::BowFactoryView;

mod select_site;
pub use select_site::SelectSiteView;

mod site_info;
pub use site_info::SiteInfoView;

mod board;
pub use board::{BoardFilter, BoardView};

mod post_detail;
pub use post_detail::PostDetailView;

mod write_post;
pub use write_post::{PickError, WritePostView};

mod my_page;
pub use my_page::MyPageView;

mod check_user_info;
pub use check_user_info::CheckUserInfoView;

mod change_user_info;
pub use change_user_info::ChangeUserInfoView;

mod delete_account;
pub use delete_account::DeleteAccountView;
