pub mod dropdown;
pub mod hooks;
pub mod tab_list;

pub use dropdown::Dropdown;
pub use hooks::{use_dropdowns, use_dropdowns_with, use_tabs, use_tabs_with};
pub use tab_list::{TabItem, TabList, TabPanel};
