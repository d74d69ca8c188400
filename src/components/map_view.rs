use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::Universe;
use crate::render::paint_frame;
use crate::state::{HitTarget, MapEngine, NavTarget, Viewport};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub universe: UseReducerHandle<Universe>,
    pub on_select: Callback<HitTarget>,
    /// Autopilot acquires new targets only while this is true; the ship
    /// still glides to wherever it was already headed.
    pub autopilot_active: bool,
}

fn describe_decision(target: Option<&NavTarget>) -> String {
    match target {
        Some(NavTarget {
            system_index,
            planet_index: Some(planet_index),
            ..
        }) => format!(
            "autopilot: heading to system {} planet {}",
            system_index, planet_index
        ),
        Some(NavTarget { system_index, .. }) => {
            format!("autopilot: hovering at system {} star", system_index)
        }
        None => "autopilot: all missions complete".to_string(),
    }
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let engine = use_mut_ref(|| {
        // Seeded once per session; tests construct their own engines with
        // fixed seeds instead.
        MapEngine::new((js_sys::Math::random() * u64::MAX as f64) as u64)
    });
    let universe_ref = use_mut_ref(|| props.universe.clone());

    // Keep the frame loop's handle pointing at the latest universe.
    {
        let universe_ref = universe_ref.clone();
        let handle = props.universe.clone();
        use_effect_with(handle.version, move |_| {
            *universe_ref.borrow_mut() = handle;
            || ()
        });
    }

    // Opening a detail view suspends target acquisition (policy decides
    // whether closing it resumes).
    {
        let engine = engine.clone();
        let active = props.autopilot_active;
        use_effect_with(active, move |_| {
            let mut engine = engine.borrow_mut();
            if active {
                engine.autopilot.resume();
            } else {
                engine.autopilot.suspend();
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let engine = engine.clone();
        let universe_ref = universe_ref.clone();
        let on_select = props.on_select.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            apply_canvas_size();

            engine
                .borrow_mut()
                .autopilot
                .set_trace(Box::new(|target| clog(&describe_decision(target))));

            // Frame loop: advance the engine, then paint what it computed.
            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            {
                let engine = engine.clone();
                let universe_ref = universe_ref.clone();
                let canvas = canvas.clone();
                let window_loop = window.clone();
                let raf_id_clone = raf_id.clone();
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    if canvas.is_connected() {
                        if let Some(ctx) = canvas
                            .get_context("2d")
                            .ok()
                            .flatten()
                            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                        {
                            let viewport = Viewport {
                                width: canvas.width() as f64,
                                height: canvas.height() as f64,
                            };
                            let universe = (**universe_ref.borrow()).clone();
                            let mut engine = engine.borrow_mut();
                            let layout = engine.advance(&universe, viewport);
                            paint_frame(&ctx, &engine, &universe, &layout, viewport);
                        }
                    }
                    if let Ok(id) = window_loop.request_animation_frame(
                        closure_cell_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        *raf_id_clone.borrow_mut() = Some(id);
                    }
                })
                    as Box<dyn FnMut()>));
                if let Ok(id) = window.request_animation_frame(
                    closure_cell
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }

            // Clicks resolve against the registry the frame loop just built.
            let click_cb = {
                let engine = engine.clone();
                let canvas = canvas.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let rect = canvas.get_bounding_client_rect();
                    let x = e.client_x() as f64 - rect.left();
                    let y = e.client_y() as f64 - rect.top();
                    if let Some(target) = engine.borrow().hits.resolve(x, y) {
                        on_select.emit(target);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                .unwrap();

            let resize_cb = {
                let apply_canvas_size = apply_canvas_size.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    apply_canvas_size();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            let window_clone = window.clone();
            move || {
                let _ = canvas
                    .remove_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                // Keep closures alive until the listeners are detached.
                let _keep_alive = (&click_cb, &resize_cb, &closure_cell);
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            id="map-canvas"
            style="position:absolute; inset:0; display:block; width:100%; height:100%;"
        ></canvas>
    }
}
