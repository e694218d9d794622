//! Decorative matrix-rain background.
//!
//! A full-viewport canvas behind the page content, driven by
//! [`RainField`](crate::core::rain::RainField). The component owns its frame
//! loop and resize listener and releases both on unmount. When the `2d`
//! context cannot be acquired the canvas stays blank and no loop is started.

use leptos::html;
use leptos::prelude::*;

#[component]
pub fn MatrixBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::rain::{GLYPH_SIZE, RainField};
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

        fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        }

        fn draw_frame(ctx: &CanvasRenderingContext2d, field: &mut RainField) {
            // Low-opacity overlay instead of a clear, so glyphs leave trails.
            ctx.set_fill_style_str("rgba(10, 10, 10, 0.04)");
            ctx.fill_rect(0.0, 0.0, field.width(), field.height());

            ctx.set_font("16px 'JetBrains Mono', monospace");
            ctx.set_text_align("center");

            let cells = field.advance(&mut || js_sys::Math::random());
            for cell in cells {
                let gradient =
                    ctx.create_linear_gradient(cell.x, cell.y - GLYPH_SIZE, cell.x, cell.y + GLYPH_SIZE);
                let (top, bottom) = cell.tone.gradient_stops();
                let _ = gradient.add_color_stop(0.0, &top);
                let _ = gradient.add_color_stop(1.0, &bottom);
                ctx.set_fill_style_canvas_gradient(&gradient);

                let glyph = cell.ch.to_string();
                let _ = ctx.fill_text(&glyph, cell.x, cell.y);

                if cell.glow {
                    ctx.set_shadow_color("rgba(220, 38, 38, 0.5)");
                    ctx.set_shadow_blur(10.0);
                    let _ = ctx.fill_text(&glyph, cell.x, cell.y);
                    ctx.set_shadow_blur(0.0);
                }
            }
        }

        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let canvas: HtmlCanvasElement = canvas;

            // Unsupported surface: render nothing, no animation.
            let Some(ctx) = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                return;
            };

            let Some(window) = web_sys::window() else {
                return;
            };

            let (width, height) = viewport_size(&window);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);

            let field = Rc::new(RefCell::new(RainField::new(width, height, &mut || {
                js_sys::Math::random()
            })));

            // Resize listener: adopt new surface dimensions, keep positions.
            let resize_closure = Closure::<dyn FnMut()>::new({
                let canvas = canvas.clone();
                let field = field.clone();
                move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let (width, height) = viewport_size(&window);
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                    field
                        .borrow_mut()
                        .resize(width, height, &mut || js_sys::Math::random());
                }
            });
            let _ = window.add_event_listener_with_callback(
                "resize",
                resize_closure.as_ref().unchecked_ref(),
            );

            // Frame loop. The closure re-schedules itself through the shared
            // slot; the pending frame id is kept so teardown can cancel it.
            let frame_id = Rc::new(Cell::new(0i32));
            let frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));

            let frame_id_for_loop = frame_id.clone();
            let frame_closure_for_loop = frame_closure.clone();
            let field_for_loop = field.clone();
            *frame_closure.borrow_mut() = Some(Closure::new(move || {
                draw_frame(&ctx, &mut field_for_loop.borrow_mut());

                if let Some(window) = web_sys::window() {
                    if let Some(callback) = frame_closure_for_loop.borrow().as_ref() {
                        if let Ok(id) =
                            window.request_animation_frame(callback.as_ref().unchecked_ref())
                        {
                            frame_id_for_loop.set(id);
                        }
                    }
                }
            }));

            if let Some(callback) = frame_closure.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    frame_id.set(id);
                }
            }

            // Teardown: cancel the pending frame, detach the resize listener
            // and drop the closures so nothing keeps firing after unmount.
            on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(frame_id.get());
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_closure.as_ref().unchecked_ref(),
                    );
                }
                frame_closure.borrow_mut().take();
            });
        });
    }

    view! {
        // Cyber grid backdrop
        <div class="cyber-grid" aria-hidden="true"></div>

        // Matrix rain canvas
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 pointer-events-none z-0"
            style="mix-blend-mode: screen; opacity: 0.6;"
        ></canvas>

        // Atmospheric overlays
        <div class="fixed inset-0 pointer-events-none z-0" aria-hidden="true">
            <div class="absolute inset-0 bg-[radial-gradient(ellipse_at_center,transparent_0%,rgba(10,10,10,0.3)_70%)]"></div>
        </div>
    }
}
