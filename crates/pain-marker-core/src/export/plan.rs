//! Export composition plan

use crate::config::ExportStyle;
use crate::domain::Marker;
use crate::geometry::{LOGICAL_HEIGHT, LOGICAL_WIDTH};

/// One marker circle in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub struct ExportCircle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub line_width: f64,
}

/// Canvas size, background fill and circles drawn over the body image
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub circles: Vec<ExportCircle>,
}

impl ExportPlan {
    /// Plan for a view's markers; circles keep the markers' order.
    pub fn new(markers: &[Marker], style: &ExportStyle) -> Self {
        let scale = style.scale;
        let circles = markers
            .iter()
            .map(|marker| ExportCircle {
                cx: marker.x * scale,
                cy: marker.y * scale,
                radius: style.marker_radius,
                fill: marker.color.clone(),
                stroke: style.outline_color.clone(),
                line_width: style.outline_width,
            })
            .collect();

        Self {
            width: (LOGICAL_WIDTH * scale).round() as u32,
            height: (LOGICAL_HEIGHT * scale).round() as u32,
            background: style.background.clone(),
            circles,
        }
    }
}
