pub mod catalogue_context;
pub mod filter_sync;
pub mod url_param;
