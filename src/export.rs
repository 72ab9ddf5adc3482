//! PNG Export
//!
//! Rasterizes a body view to a 2× PNG, then downloads or shares it.
//! Decode, encode and share are awaited one after another in a single task.

use chrono::Utc;
use js_sys::{Array, Function, Promise, Reflect};
use pain_marker_core::export::{download_file_name, share_file_name, svg_data_url, PNG_MIME};
use pain_marker_core::{AppConfig, BodyView, ExportPlan, ExportStyle, Labels, Marker};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("drawing surface `{0}` not found")]
    MissingSurface(&'static str),
    #[error("2d canvas unavailable")]
    NoCanvas,
    #[error("canvas produced no image")]
    EmptyBlob,
    #[error("sharing files is not supported here")]
    ShareUnsupported,
    #[error("browser error: {0}")]
    Js(String),
}

impl From<JsValue> for ExportError {
    fn from(value: JsValue) -> Self {
        ExportError::Js(format!("{:?}", value))
    }
}

/// How a share request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// Share failed or is missing; the PNG was downloaded instead
    Downloaded,
}

#[derive(Serialize)]
struct ShareText<'a> {
    title: &'a str,
    text: &'a str,
}

fn document() -> Result<Document, ExportError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ExportError::NoWindow)
}

/// Render `view`'s surface plus its markers to a PNG blob
pub async fn render_png(view: BodyView, markers: &[Marker], style: &ExportStyle) -> Result<Blob, ExportError> {
    let document = document()?;
    let surface = document
        .get_element_by_id(view.surface_id())
        .ok_or(ExportError::MissingSurface(view.surface_id()))?;

    let markup = web_sys::XmlSerializer::new()?.serialize_to_string(&surface)?;
    let image = HtmlImageElement::new()?;
    image.set_src(&svg_data_url(&markup));
    JsFuture::from(image.decode()).await?;

    let plan = ExportPlan::new(markers, style);
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| ExportError::NoCanvas)?;
    canvas.set_width(plan.width);
    canvas.set_height(plan.height);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(ExportError::NoCanvas)?
        .dyn_into()
        .map_err(|_| ExportError::NoCanvas)?;

    draw_plan(&ctx, &image, &plan)?;
    log::debug!("[Export] Composed {} markers for {}", plan.circles.len(), view.key());
    to_png_blob(&canvas).await
}

fn draw_plan(ctx: &CanvasRenderingContext2d, image: &HtmlImageElement, plan: &ExportPlan) -> Result<(), ExportError> {
    let width = f64::from(plan.width);
    let height = f64::from(plan.height);

    ctx.set_fill_style_str(&plan.background);
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, width, height)?;

    for circle in &plan.circles {
        ctx.set_fill_style_str(&circle.fill);
        ctx.begin_path();
        ctx.arc(circle.cx, circle.cy, circle.radius, 0.0, std::f64::consts::TAU)?;
        ctx.fill();
        ctx.set_stroke_style_str(&circle.stroke);
        ctx.set_line_width(circle.line_width);
        ctx.stroke();
    }
    Ok(())
}

async fn to_png_blob(canvas: &HtmlCanvasElement) -> Result<Blob, ExportError> {
    let promise = Promise::new(&mut |resolve, reject| {
        let on_blob = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &blob);
        });
        if let Err(e) = canvas.to_blob_with_type(on_blob.unchecked_ref(), PNG_MIME) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    JsFuture::from(promise)
        .await?
        .dyn_into::<Blob>()
        .map_err(|_| ExportError::EmptyBlob)
}

/// Save `blob` through a temporary object URL
pub fn download(blob: &Blob, file_name: &str) -> Result<(), ExportError> {
    let anchor: HtmlAnchorElement = document()?
        .create_element("a")?
        .dyn_into()
        .map_err(|e| ExportError::Js(format!("{:?}", e)))?;
    let url = web_sys::Url::create_object_url_with_blob(blob)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;
    log::info!("[Export] Downloaded {}", file_name);
    Ok(())
}

/// Hand `blob` to `navigator.share` as a PNG file
pub async fn share(blob: &Blob, file_name: &str, labels: &Labels) -> Result<(), ExportError> {
    let navigator = web_sys::window().ok_or(ExportError::NoWindow)?.navigator();
    let share_fn = Reflect::get(&navigator, &JsValue::from_str("share"))?;
    let share_fn = share_fn
        .dyn_ref::<Function>()
        .ok_or(ExportError::ShareUnsupported)?;

    let options = web_sys::FilePropertyBag::new();
    options.set_type(PNG_MIME);
    let file = web_sys::File::new_with_blob_sequence_and_options(&Array::of1(blob), file_name, &options)?;

    let data = serde_wasm_bindgen::to_value(&ShareText {
        title: &labels.share_title,
        text: &labels.share_text,
    })
    .map_err(|e| ExportError::Js(e.to_string()))?;
    Reflect::set(&data, &JsValue::from_str("files"), &Array::of1(&file))?;

    let can_share = Reflect::get(&navigator, &JsValue::from_str("canShare"))?;
    if let Some(can_share) = can_share.dyn_ref::<Function>() {
        if !can_share.call1(&navigator, &data)?.is_truthy() {
            return Err(ExportError::ShareUnsupported);
        }
    }

    let promise: Promise = share_fn
        .call1(&navigator, &data)?
        .dyn_into()
        .map_err(|_| ExportError::ShareUnsupported)?;
    JsFuture::from(promise).await?;
    log::info!("[Export] Shared {}", file_name);
    Ok(())
}

/// Render and download the view
pub async fn save_view(view: BodyView, markers: Vec<Marker>, config: AppConfig) -> Result<(), ExportError> {
    let blob = render_png(view, &markers, &config.export).await?;
    let name = download_file_name(&config.labels, view, Utc::now().date_naive());
    download(&blob, &name)
}

/// Render and share the view, downloading when sharing is not possible
pub async fn share_view(view: BodyView, markers: Vec<Marker>, config: AppConfig) -> Result<ShareOutcome, ExportError> {
    let blob = render_png(view, &markers, &config.export).await?;
    let name = share_file_name(&config.labels, view);
    match share(&blob, &name, &config.labels).await {
        Ok(()) => Ok(ShareOutcome::Shared),
        Err(e) => {
            log::info!("[Export] Share failed, downloading instead: {}", e);
            let name = download_file_name(&config.labels, view, Utc::now().date_naive());
            download(&blob, &name)?;
            Ok(ShareOutcome::Downloaded)
        }
    }
}
