//! Browser host: Plotly.js charts in DOM containers.
//!
//! [`mount`] is the page entry point. It builds the dashboard, renders it once
//! the document has loaded and relayouts on window resize. Resize bursts are
//! coalesced to one relayout pass per animation frame.
//!
//! Plotly itself is expected on the page as the global `Plotly`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::figure::{Figure, LayoutUpdate};
use crate::host::{ChartHost, HostError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn plotly_new_plot(target: &str, data: &JsValue, layout: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, js_name = relayout, catch)]
    fn plotly_relayout(target: &str, update: &JsValue) -> Result<JsValue, JsValue>;
}

/// [`ChartHost`] over the page document and the global Plotly object.
pub struct PlotlyHost {
    document: Document,
}

impl PlotlyHost {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ChartHost for PlotlyHost {
    fn has_target(&self, target: &str) -> bool {
        self.document.get_element_by_id(target).is_some()
    }

    fn render(&mut self, target: &str, figure: &Figure) -> Result<(), HostError> {
        if !self.has_target(target) {
            return Err(HostError::MissingTarget(target.to_string()));
        }
        let data = to_js(&figure.data)?;
        let layout = to_js(&figure.layout)?;
        plotly_new_plot(target, &data, &layout).map_err(library_error)?;
        Ok(())
    }

    fn relayout(&mut self, target: &str, update: &LayoutUpdate) -> Result<(), HostError> {
        if !self.has_target(target) {
            return Err(HostError::MissingTarget(target.to_string()));
        }
        let update = to_js(update)?;
        plotly_relayout(target, &update).map_err(library_error)?;
        Ok(())
    }

    fn target_width(&self, target: &str) -> Option<f64> {
        let element = self.document.get_element_by_id(target)?;
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            return None;
        };
        Some(f64::from(element.offset_width()))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, HostError> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(library_error)
}

fn library_error(err: JsValue) -> HostError {
    HostError::Library(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// State shared by the ready and resize callbacks.
struct App {
    dashboard: RefCell<Dashboard>,
    host: RefCell<PlotlyHost>,
    resize_pending: Cell<bool>,
}

impl App {
    fn ready(&self) {
        let (Ok(mut dashboard), Ok(mut host)) = (self.dashboard.try_borrow_mut(), self.host.try_borrow_mut()) else {
            log::warn!("dashboard busy; skipping ready event");
            return;
        };
        let report = dashboard.on_ready(&mut *host);
        if !report.is_complete() {
            log::warn!("{} chart(s) could not be rendered; see earlier warnings", report.failures.len());
        }
    }

    fn resize(&self) {
        let (Ok(dashboard), Ok(mut host)) = (self.dashboard.try_borrow(), self.host.try_borrow_mut()) else {
            log::debug!("dashboard busy; skipping resize");
            return;
        };
        let widths = dashboard.measure(&*host);
        let updated = dashboard.on_resize(&mut *host, &widths);
        log::debug!("resized {updated} chart(s)");
    }
}

/// Build the dashboard and bind it to the page.
///
/// `config_json` is an optional [`DashboardConfig`] as JSON; `None` uses the
/// stock target ids and layout.
///
/// # Errors
///
/// Returns a JS error string when the configuration is invalid, when there is
/// no `window`/`document`, or when an event listener cannot be installed.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {err}");
    }

    let config = match config_json.as_deref() {
        Some(raw) => DashboardConfig::from_json(raw),
        None => Ok(DashboardConfig::default()),
    };
    let dashboard = config
        .and_then(Dashboard::new)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let app = Rc::new(App {
        dashboard: RefCell::new(dashboard),
        host: RefCell::new(PlotlyHost::new(document.clone())),
        resize_pending: Cell::new(false),
    });

    install_resize_listener(&window, &app)?;

    if document.ready_state() == "loading" {
        let app_for_ready = Rc::clone(&app);
        let on_ready = Closure::once_into_js(move || app_for_ready.ready());
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        app.ready();
    }
    Ok(())
}

fn install_resize_listener(window: &Window, app: &Rc<App>) -> Result<(), JsValue> {
    let app_for_resize = Rc::clone(app);
    let window_for_resize = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        schedule_resize(&app_for_resize, &window_for_resize);
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    // Registered for the lifetime of the page.
    on_resize.forget();
    Ok(())
}

/// Queue one resize pass on the next animation frame unless one is already queued.
fn schedule_resize(app: &Rc<App>, window: &Window) {
    if app.resize_pending.get() {
        return;
    }
    app.resize_pending.set(true);

    let app_for_frame = Rc::clone(app);
    let on_frame = Closure::once_into_js(move |_ts: f64| {
        app_for_frame.resize_pending.set(false);
        app_for_frame.resize();
    });
    if let Err(err) = window.request_animation_frame(on_frame.unchecked_ref()) {
        log::debug!("requestAnimationFrame failed ({err:?}); resizing now");
        app.resize_pending.set(false);
        app.resize();
    }
}
