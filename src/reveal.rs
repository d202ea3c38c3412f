use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

/// Stops an observation started by [`ObservableVisibility::register`].
/// Calling it more than once is harmless.
pub type Unregister = Box<dyn FnMut()>;

/// Something that can tell us when a block scrolls into view.
pub trait ObservableVisibility {
    fn register(&self, on_visible: Box<dyn FnMut()>) -> Unregister;
}

/// One-shot reveal: the first visibility signal flips the block to revealed
/// and detaches from the observer. Later signals are ignored.
pub struct Reveal {
    revealed: Rc<Cell<bool>>,
    stop: Rc<RefCell<Option<Unregister>>>,
}

impl Reveal {
    pub fn attach<O, F>(observer: &O, on_reveal: F) -> Self
    where
        O: ObservableVisibility + ?Sized,
        F: FnOnce() + 'static,
    {
        let revealed = Rc::new(Cell::new(false));
        let stop: Rc<RefCell<Option<Unregister>>> = Rc::new(RefCell::new(None));

        let callback = {
            let revealed = Rc::clone(&revealed);
            let stop = Rc::clone(&stop);
            let mut on_reveal = Some(on_reveal);
            move || {
                if revealed.replace(true) {
                    return;
                }
                if let Some(on_reveal) = on_reveal.take() {
                    on_reveal();
                }
                let pending = stop.borrow_mut().take();
                if let Some(mut unregister) = pending {
                    unregister();
                }
            }
        };

        let mut unregister = observer.register(Box::new(callback));
        if revealed.get() {
            // fired synchronously during registration
            unregister();
        } else {
            *stop.borrow_mut() = Some(unregister);
        }

        Self { revealed, stop }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    /// Stops observing without revealing, e.g. when the block unmounts.
    pub fn detach(&self) {
        let pending = self.stop.borrow_mut().take();
        if let Some(mut unregister) = pending {
            unregister();
        }
    }
}

/// Inline style for a block that is either still waiting or already revealed.
pub fn reveal_style(revealed: bool, delay_secs: f64) -> String {
    let (opacity, offset) = if revealed {
        (1, 0)
    } else {
        (0, config::REVEAL_OFFSET_PX)
    };
    let duration = config::REVEAL_DURATION_SECS;
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity {duration}s ease-out {delay_secs}s, transform {duration}s ease-out {delay_secs}s;"
    )
}

type ObserverCallback = Closure<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>;

/// Browser-backed visibility source using `IntersectionObserver`. Holds the JS
/// callback alive for as long as the observer itself lives.
pub struct ViewportObserver {
    target: Element,
    callback: RefCell<Option<ObserverCallback>>,
}

impl ViewportObserver {
    pub fn new(target: Element) -> Self {
        Self {
            target,
            callback: RefCell::new(None),
        }
    }
}

impl ObservableVisibility for ViewportObserver {
    fn register(&self, on_visible: Box<dyn FnMut()>) -> Unregister {
        let on_visible = Rc::new(RefCell::new(on_visible));
        let notify = Rc::clone(&on_visible);
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: web_sys::js_sys::Array, _observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if visible {
                    let mut notify = notify.borrow_mut();
                    (*notify)();
                }
            },
        )
            as Box<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config::reveal_root_margin());

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                let mut on_visible = on_visible.borrow_mut();
                (*on_visible)();
                return Box::new(|| ());
            }
        };
        observer.observe(&self.target);
        *self.callback.borrow_mut() = Some(callback);

        Box::new(move || observer.disconnect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Visibility source driven by hand from the test.
    #[derive(Default)]
    struct ManualVisibility {
        callbacks: RefCell<Vec<Box<dyn FnMut()>>>,
        unregistered: Rc<Cell<usize>>,
    }

    impl ManualVisibility {
        fn trigger(&self) {
            for callback in self.callbacks.borrow_mut().iter_mut() {
                callback();
            }
        }

        fn active(&self) -> bool {
            self.unregistered.get() == 0 && !self.callbacks.borrow().is_empty()
        }
    }

    impl ObservableVisibility for ManualVisibility {
        fn register(&self, on_visible: Box<dyn FnMut()>) -> Unregister {
            self.callbacks.borrow_mut().push(on_visible);
            let unregistered = Rc::clone(&self.unregistered);
            Box::new(move || unregistered.set(unregistered.get() + 1))
        }
    }

    #[test]
    fn test_reveal_starts_hidden() {
        let observer = ManualVisibility::default();
        let reveal = Reveal::attach(&observer, || ());
        assert!(!reveal.is_revealed());
        assert!(observer.active());
    }

    #[test]
    fn test_reveal_fires_once_and_unregisters() {
        let observer = ManualVisibility::default();
        let fired = Rc::new(Cell::new(0));
        let reveal = {
            let fired = Rc::clone(&fired);
            Reveal::attach(&observer, move || fired.set(fired.get() + 1))
        };

        observer.trigger();
        assert!(reveal.is_revealed());
        assert_eq!(fired.get(), 1);
        assert_eq!(observer.unregistered.get(), 1);

        observer.trigger();
        assert!(reveal.is_revealed());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_detach_stops_observing_without_revealing() {
        let observer = ManualVisibility::default();
        let reveal = Reveal::attach(&observer, || ());
        reveal.detach();
        reveal.detach();
        assert!(!reveal.is_revealed());
        assert_eq!(observer.unregistered.get(), 1);
    }

    struct AlreadyVisible {
        unregistered: Rc<Cell<usize>>,
    }

    impl ObservableVisibility for AlreadyVisible {
        fn register(&self, mut on_visible: Box<dyn FnMut()>) -> Unregister {
            on_visible();
            let unregistered = Rc::clone(&self.unregistered);
            Box::new(move || unregistered.set(unregistered.get() + 1))
        }
    }

    #[test]
    fn test_synchronous_trigger_still_unregisters() {
        let observer = AlreadyVisible {
            unregistered: Rc::new(Cell::new(0)),
        };
        let reveal = Reveal::attach(&observer, || ());
        assert!(reveal.is_revealed());
        assert_eq!(observer.unregistered.get(), 1);

        reveal.detach();
        assert_eq!(observer.unregistered.get(), 1);
    }

    #[test]
    fn test_hidden_style_is_offset() {
        let style = reveal_style(false, 0.0);
        assert!(style.starts_with("opacity: 0; transform: translateY(50px);"));
        assert!(style.contains("opacity 0.6s ease-out 0s"));
    }

    #[test]
    fn test_revealed_style_is_settled_with_delay() {
        let style = reveal_style(true, 0.2);
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(style.contains("transform 0.6s ease-out 0.2s"));
    }
}
