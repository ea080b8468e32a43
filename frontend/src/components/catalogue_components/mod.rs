pub mod catalogue_toolbar;
pub mod category_sidebar;
pub mod dataset_selector;
pub mod filter_panel;
pub mod item_table;
pub mod pagination_strip;
pub mod search_top_bar;
