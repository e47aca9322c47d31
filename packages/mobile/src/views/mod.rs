mod layout;
pub use layout::{SessionGate, TabLayout};

mod auth;
pub use auth::{First, Login, SignUp};

mod home;
pub use home::Home;

mod sites;
pub use sites::{BowFactory, SelectSite, SiteInfo};

mod board;
pub use board::{Board, PostDetail, WritePost};

mod account;
pub use account::{ChangeUserInfo, CheckUserInfo, DeleteAccount, MyPage};
