use crate::constants::LABEL_FONT;
use crate::dom;
use anyhow::anyhow;
use glam::Vec2;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;
use wipeit_core::{Rect, Sprite, Surface, Viewport};

fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow!("{:?}", e))?;
    img.set_src(src);
    Ok(img)
}

/// 2D canvas implementation of [`Surface`]. The context is only acquired on
/// the first [`CanvasSurface::resize`]; until then every draw is a no-op.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    rag: web::HtmlImageElement,
    dirt: web::HtmlImageElement,
}

impl CanvasSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        rag_src: &str,
        dirt_src: &str,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            canvas,
            ctx: None,
            rag: load_image(rag_src)?,
            dirt: load_image(dirt_src)?,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        dom::sync_canvas_to_video(&self.canvas, width, height);
        if self.ctx.is_none() {
            self.ctx = self
                .canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
            if self.ctx.is_none() {
                log::error!("[canvas] 2d context unavailable");
            }
        }
        log::info!("[canvas] resized to {}x{}", width, height);
    }

    fn image(&self, sprite: Sprite) -> &web::HtmlImageElement {
        match sprite {
            Sprite::Rag => &self.rag,
            Sprite::Dirt => &self.dirt,
        }
    }
}

#[allow(deprecated)]
fn set_colors(ctx: &web::CanvasRenderingContext2d, color: &str) {
    let c = JsValue::from_str(color);
    ctx.set_fill_style(&c);
    ctx.set_stroke_style(&c);
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Option<Viewport> {
        self.ctx.as_ref()?;
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        if let Some(ctx) = &self.ctx {
            ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        }
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32) {
        let Some(ctx) = &self.ctx else { return };
        ctx.save();
        set_colors(ctx, color);
        ctx.set_line_width(line_width as f64);
        ctx.begin_path();
        if ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, 2.0 * PI)
            .is_ok()
        {
            ctx.fill();
            ctx.stroke();
        }
        ctx.restore();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32) {
        let Some(ctx) = &self.ctx else { return };
        ctx.save();
        set_colors(ctx, color);
        ctx.set_line_width(width as f64);
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
        ctx.restore();
    }

    // The canvas is mirrored with CSS; flip text back so it stays readable.
    fn text(&mut self, at: Vec2, text: &str, color: &str) {
        let Some(ctx) = &self.ctx else { return };
        let w = self.canvas.width() as f64;
        ctx.save();
        set_colors(ctx, color);
        ctx.set_font(LABEL_FONT);
        if ctx.scale(-1.0, 1.0).is_ok() && ctx.translate(-w, 0.0).is_ok() {
            _ = ctx.fill_text(text, w - at.x as f64, at.y as f64);
        }
        ctx.restore();
    }

    fn sprite(&mut self, sprite: Sprite, rect: Rect) {
        let Some(ctx) = &self.ctx else { return };
        let img = self.image(sprite);
        if !img.complete() || img.natural_width() == 0 {
            return;
        }
        _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            rect.min.x as f64,
            rect.min.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }
}
