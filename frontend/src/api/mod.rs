pub mod catalogue_api;
