#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use tagsphere_core::constants::DEFAULT_LAYOUT_SEED;
use tagsphere_core::{AnimationLoop, InputQueue, Scene, SphereConfig, StopHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bindings;
mod constants;
mod dom;
mod events;
mod fetch;
mod frame;
mod slot;
mod style;
mod surface;
mod tooltip;

thread_local! {
    static STOP: RefCell<Option<StopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tagsphere starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation loop. Listeners stay attached but become inert once
/// no frames run.
#[wasm_bindgen]
pub fn stop_sphere() {
    STOP.with(|s| {
        if let Some(handle) = s.borrow_mut().take() {
            handle.stop();
            log::info!("[frame] stop requested");
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: web::HtmlElement = dom::element_by_id(&document, constants::WRAP_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::WRAP_ID))?;

    let overrides = dom::config_overrides(&container);
    let config = SphereConfig::default()
        .with_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let url = dom::data_url(&container);
    let items = fetch::load_items(&url).await;
    let scene = Scene::new(config, items, DEFAULT_LAYOUT_SEED)?;
    let palette = scene.palette();

    let inputs = InputQueue::new();
    let animation = AnimationLoop::new(scene, inputs.clone());
    STOP.with(|s| *s.borrow_mut() = Some(animation.stop_handle()));

    events::wire_pointer_handlers(events::PointerWiring {
        document: document.clone(),
        container: container.clone(),
        inputs: inputs.clone(),
        pressed: Rc::new(std::cell::Cell::new(false)),
    });
    events::wire_label_handlers(&document, &container, &inputs);
    events::wire_controls(&document, &inputs, palette);

    let surface = surface::DomSurface::new(document.clone(), container);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(animation, surface)));
    frame::start_loop(frame_ctx);
    Ok(())
}
