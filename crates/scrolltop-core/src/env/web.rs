//! Browser host backed by `web_sys::Window`.
//!
//! Scroll offset is `window.scrollY`, frames come from
//! `requestAnimationFrame`, timeouts from `setTimeout`, and time from
//! `performance.now()`. Native smooth scroll is used when the document's
//! style declares a `scrollBehavior` property.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Performance, ScrollBehavior, ScrollToOptions, Window};

use super::pending::PendingCallbacks;
use super::{
    Environment, FrameCallback, FrameId, ListenerId, Scheduler, ScrollListener, TimerCallback,
    TimerId, Viewport,
};

/// Build an environment for the current page, or `None` outside a browser
pub fn environment() -> Option<Environment> {
    let viewport = WindowViewport::new()?;
    let scheduler = WindowScheduler::new()?;
    Some(Environment::new(Rc::new(viewport), Rc::new(scheduler)))
}

fn millis_to_duration(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

pub struct WindowViewport {
    window: Window,
    listeners: RefCell<HashMap<u64, Closure<dyn FnMut()>>>,
    next_id: Cell<u64>,
}

impl WindowViewport {
    pub fn new() -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        })
    }
}

impl Viewport for WindowViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_scroll_offset(&self, offset: f64) {
        let x = self.window.scroll_x().unwrap_or(0.0);
        self.window.scroll_to_with_x_and_y(x, offset);
    }

    fn supports_smooth_scroll(&self) -> bool {
        let Some(root) = self
            .window
            .document()
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return false;
        };
        Reflect::has(&root.style(), &JsValue::from_str("scrollBehavior")).unwrap_or(false)
    }

    fn smooth_scroll_to(&self, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let closure = Closure::<dyn FnMut()>::new(move || listener());
        if let Err(err) = self
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to add scroll listener: {:?}", err);
        }
        self.listeners.borrow_mut().insert(id, closure);
        ListenerId(id)
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        let Some(closure) = self.listeners.borrow_mut().remove(&id.0) else {
            return;
        };
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
}

type FrameClosure = Closure<dyn FnMut(f64)>;
type TimerClosure = Closure<dyn FnMut()>;

pub struct WindowScheduler {
    window: Window,
    performance: Option<Performance>,
    next_id: Cell<u64>,
    frames: Rc<RefCell<PendingCallbacks<FrameClosure>>>,
    timers: Rc<RefCell<PendingCallbacks<TimerClosure>>>,
}

impl WindowScheduler {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let performance = window.performance();
        Some(Self {
            window,
            performance,
            next_id: Cell::new(1),
            frames: Rc::new(RefCell::new(PendingCallbacks::new())),
            timers: Rc::new(RefCell::new(PendingCallbacks::new())),
        })
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl Scheduler for WindowScheduler {
    fn now(&self) -> Duration {
        let ms = match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        };
        millis_to_duration(ms)
    }

    fn request_frame(&self, callback: FrameCallback) -> FrameId {
        let id = self.allocate_id();
        let frames = Rc::downgrade(&self.frames);
        let mut callback = Some(callback);
        let closure = FrameClosure::new(move |timestamp: f64| {
            if let Some(frames) = frames.upgrade() {
                frames.borrow_mut().retire(id);
            }
            if let Some(callback) = callback.take() {
                callback(millis_to_duration(timestamp));
            }
        });

        match self.window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => {
                self.frames.borrow_mut().insert(id, handle, closure);
            }
            Err(err) => tracing::warn!("requestAnimationFrame failed: {:?}", err),
        }
        FrameId(id)
    }

    fn cancel_frame(&self, id: FrameId) {
        let entry = self.frames.borrow_mut().cancel(id.0);
        if let Some((handle, _closure)) = entry {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }

    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let id = self.allocate_id();
        let timers = Rc::downgrade(&self.timers);
        let mut callback = Some(callback);
        let closure = TimerClosure::new(move || {
            if let Some(timers) = timers.upgrade() {
                timers.borrow_mut().retire(id);
            }
            if let Some(callback) = callback.take() {
                callback();
            }
        });

        let millis = delay.as_millis().min(i32::MAX as u128) as i32;
        match self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        ) {
            Ok(handle) => {
                self.timers.borrow_mut().insert(id, handle, closure);
            }
            Err(err) => tracing::warn!("setTimeout failed: {:?}", err),
        }
        TimerId(id)
    }

    fn clear_timeout(&self, id: TimerId) {
        let entry = self.timers.borrow_mut().cancel(id.0);
        if let Some((handle, _closure)) = entry {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
