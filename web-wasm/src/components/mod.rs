//! UIコンポーネント

pub mod add_items_modal;
pub mod delete_confirm_modal;
pub mod events_tab;
pub mod header;
pub mod items_tab;
pub mod login_form;
pub mod logs_tab;
pub mod manual_run;
pub mod settings_panel;
pub mod status_cards;
pub mod toast;
