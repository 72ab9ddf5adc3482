//! UI Components
//!
//! Leptos components for the pain marker page.

mod action_bar;
mod body_figure;
mod clear_confirm_button;
mod level_selector;
mod marker_dot;
mod notice_toast;
mod silhouette;
mod view_toggle;

pub use action_bar::ActionBar;
pub use body_figure::BodyFigure;
pub use level_selector::LevelSelector;
pub use notice_toast::NoticeToast;
pub use view_toggle::ViewToggle;
