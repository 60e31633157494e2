// Components module - reusable UI building blocks
//
// - Disclosure panel: Email button + panel for a contact widget
// - Toast: notice overlay in the top-right corner
// - Status bar: focus, key hints, clipboard
// - Logs panel: captured log entries

pub mod disclosure_panel;
pub mod logs_panel;
pub mod status_bar;
pub mod toast;

pub use logs_panel::LogsPanel;
pub use toast::Toast;
