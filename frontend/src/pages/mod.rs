pub mod catalogue_page;
pub mod home_page;
pub mod login_page;
