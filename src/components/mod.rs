pub mod card;
pub mod common;
pub mod header;
pub mod icon;
pub mod layout;
pub mod page;
pub mod sidebar;
pub mod table;
pub mod toast;
