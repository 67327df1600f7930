//! Panorama image loading: decode through an `HtmlImageElement`, read the
//! pixels back via an offscreen 2D canvas. The pixel buffer is uploaded to
//! the GPU by the render layer only after the decode completes, so the
//! previous panorama stays visible during a scene change.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub async fn load_panorama_rgba(url: &str) -> anyhow::Result<DecodedImage> {
    let image = web::HtmlImageElement::new()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    image.set_cross_origin(Some("anonymous"));

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!(format!("image load {url}: {:?}", e)))?;

    let width = image.natural_width();
    let height = image.natural_height();
    if width == 0 || height == 0 {
        anyhow::bail!("image {url} decoded to zero size");
    }

    let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    ctx.draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    Ok(DecodedImage {
        width,
        height,
        rgba: data.data().0,
    })
}
