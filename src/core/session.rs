use crate::core::listeners::{EventKind, ListenerGuard, ListenerRegistry, ViewEvent};
use crate::core::motion::{
    element_tilt, heading_transform, window_tilt, HeadingTransform, PointerKind, Rect, Size, Tilt,
    ELEMENT_TILT_DEG, WINDOW_TILT_DEG,
};
use crate::navigation::Route;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub tilt: Tilt,
    pub heading: HeadingTransform,
}

/// Client-side geometry a view needs when it mounts.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub size: Size,
    pub pointer: PointerKind,
    /// Bounding box of the product's main image.
    pub hero_rect: Rect,
}

/// One mounted page. Listeners for the route are installed on mount and
/// removed when the session is dropped.
pub struct ViewSession {
    route: Route,
    motion: Arc<Mutex<MotionState>>,
    listeners: Vec<ListenerGuard>,
}

impl ViewSession {
    pub fn mount(route: Route, registry: &ListenerRegistry, viewport: Viewport) -> Self {
        let motion = Arc::new(Mutex::new(MotionState::default()));
        let mut listeners = Vec::new();

        match route {
            Route::Home if viewport.pointer == PointerKind::Fine => {
                let state = Arc::clone(&motion);
                let size = viewport.size;
                listeners.push(registry.register(EventKind::PointerMove, move |event| {
                    if let ViewEvent::PointerMove(point) = event {
                        update(&state, |m| m.tilt = window_tilt(*point, size, WINDOW_TILT_DEG));
                    }
                }));
            }
            Route::Product => {
                let state = Arc::clone(&motion);
                let rect = viewport.hero_rect;
                listeners.push(registry.register(EventKind::PointerMove, move |event| {
                    if let ViewEvent::PointerMove(point) = event {
                        update(&state, |m| m.tilt = element_tilt(*point, rect, ELEMENT_TILT_DEG));
                    }
                }));

                let state = Arc::clone(&motion);
                listeners.push(registry.register(EventKind::PointerLeave, move |_| {
                    update(&state, |m| m.tilt = Tilt::default());
                }));
            }
            Route::Journey => {
                let state = Arc::clone(&motion);
                listeners.push(registry.register(EventKind::Scroll, move |event| {
                    if let ViewEvent::Scroll(progress) = event {
                        update(&state, |m| m.heading = heading_transform(*progress));
                    }
                }));
            }
            _ => {}
        }

        tracing::debug!(
            "Mounted {} with {} listener(s)",
            route.path(),
            listeners.len()
        );

        Self {
            route,
            motion,
            listeners,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn motion(&self) -> MotionState {
        *self.motion.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for ViewSession {
    fn drop(&mut self) {
        tracing::debug!("Unmounted {}", self.route.path());
    }
}

fn update(state: &Mutex<MotionState>, f: impl FnOnce(&mut MotionState)) {
    let mut guard = state.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut guard);
}
