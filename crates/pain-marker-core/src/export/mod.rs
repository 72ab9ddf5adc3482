//! Export
//!
//! What the exported PNG contains and what it is called. The browser side
//! replays an [`ExportPlan`] onto a canvas.

mod naming;
mod plan;

pub use naming::{download_file_name, share_file_name, svg_data_url, PNG_MIME};
pub use plan::{ExportCircle, ExportPlan};
