use crate::slot::CallbackSlot;
use crate::surface::DomSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tagsphere_core::AnimationLoop;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animation: AnimationLoop,
    pub surface: DomSurface,
    pub started: Instant,
}

impl FrameContext {
    pub fn new(animation: AnimationLoop, surface: DomSurface) -> Self {
        Self {
            animation,
            surface,
            started: Instant::now(),
        }
    }

    /// Returns `false` once the loop has been stopped.
    pub fn frame(&mut self) -> bool {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.animation.frame(now_ms, &mut self.surface)
    }
}

type Tick = Closure<dyn FnMut()>;

fn request_frame(tick: &CallbackSlot<Tick>) {
    if let Some(w) = web::window() {
        tick.with(|cb| {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        });
    }
}

/// Drop the tick closure, and the frame context it owns, from outside its
/// own invocation.
fn release_later(tick: &CallbackSlot<Tick>) {
    let tick = tick.clone();
    let cleanup = Closure::once_into_js(move || {
        drop(tick.release());
        log::info!("[frame] loop released");
    });
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cleanup.unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: CallbackSlot<Tick> = CallbackSlot::new();
    let tick_clone = tick.clone();
    tick.set(Closure::wrap(Box::new(move || {
        if frame_ctx.borrow_mut().frame() {
            request_frame(&tick_clone);
        } else {
            log::info!("[frame] loop stopped");
            release_later(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
