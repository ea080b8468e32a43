use dioxus::prelude::*;

use common::filter_state::FilterState;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::catalogue_page::CataloguePage;
use crate::pages::home_page::HomePage;
use crate::pages::login_page::LoginPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/catalogue/:filters")]
    CataloguePage { filters: UrlParam<FilterState> },


    #[route("/login")]
    LoginPage {},

}

impl Route {
    pub fn catalogue_page_from_filters(filters: FilterState) -> Self {
        Self::CataloguePage { filters: UrlParam::from(filters) }
    }
}
