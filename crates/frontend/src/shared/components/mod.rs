pub mod data_table;
pub mod modal_form;
pub mod notifications;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;
