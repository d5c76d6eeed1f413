use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use crate::reveal::registry::{Intersection, RevealId, RevealRegistry, RevealState};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub visible_class: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            visible_class: config::VISIBLE_CLASS,
        }
    }
}

struct Targets {
    registry: RevealRegistry,
    elements: Vec<Element>,
    visible_class: &'static str,
}

impl Targets {
    fn slot_of(&self, target: &Element) -> Option<RevealId> {
        self.elements.iter().position(|el| el == target).map(RevealId)
    }

    fn show(&self, id: RevealId) {
        debug_assert_eq!(self.registry.state(id), RevealState::Visible);
        let Some(element) = self.elements.get(id.0) else {
            return;
        };
        match element.class_list().add_1(self.visible_class) {
            Ok(()) => debug!("Revealed element #{}", id.0),
            Err(err) => warn!("Failed to mark element #{} visible: {:?}", id.0, err),
        }
    }
}

/// Reveals elements once they scroll into view.
///
/// Intersection tracking is left to the browser's `IntersectionObserver`; the
/// controller only decides when a reported ratio is enough and makes sure an
/// element is handled once. Browsers without the observer get every element
/// revealed right away instead of leaving content hidden.
pub struct RevealController {
    targets: Rc<RefCell<Targets>>,
    observer: Option<IntersectionObserver>,
    // Must outlive the observer, JS keeps calling into it until disconnect.
    callback: Option<ObserverCallback>,
}

impl RevealController {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            targets: Rc::new(RefCell::new(Targets {
                registry: RevealRegistry::new(options.threshold),
                elements: Vec::new(),
                visible_class: options.visible_class,
            })),
            observer: None,
            callback: None,
        }
    }

    /// Begins observing every element in `elements`.
    pub fn start(&mut self, elements: Vec<Element>) {
        if self.targets.borrow().registry.is_stopped() {
            debug!("Ignoring start on a stopped reveal controller");
            return;
        }

        let fresh = self.register(elements);
        if fresh.is_empty() {
            return;
        }

        match self.observer() {
            Ok(observer) => {
                for (_, element) in &fresh {
                    observer.observe(element);
                }
                info!("Reveal controller observing {} elements", fresh.len());
            }
            Err(err) => {
                warn!(
                    "IntersectionObserver unavailable ({:?}), showing {} elements without animation",
                    err,
                    fresh.len()
                );
                self.reveal_all();
            }
        }
    }

    /// Ceases all observation. Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        let mut targets = self.targets.borrow_mut();
        if !targets.registry.is_stopped() {
            info!(
                "Reveal controller stopped with {} elements still hidden",
                targets.registry.pending()
            );
        }
        targets.registry.stop();
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub fn is_visible(&self, element: &Element) -> bool {
        let targets = self.targets.borrow();
        targets
            .slot_of(element)
            .map(|id| targets.registry.state(id) == RevealState::Visible)
            .unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.targets.borrow().registry.pending()
    }

    /// Fallback path: reveals every element still waiting.
    pub(crate) fn reveal_all(&mut self) {
        let mut targets = self.targets.borrow_mut();
        for id in targets.registry.reveal_all() {
            targets.show(id);
        }
    }

    fn register(&mut self, elements: Vec<Element>) -> Vec<(RevealId, Element)> {
        let mut targets = self.targets.borrow_mut();
        let mut fresh = Vec::with_capacity(elements.len());
        for element in elements {
            let id = match targets.slot_of(&element) {
                Some(id) => id,
                None => {
                    targets.elements.push(element.clone());
                    RevealId(targets.elements.len() - 1)
                }
            };
            if targets.registry.observe(id) {
                fresh.push((id, element));
            }
        }
        fresh
    }

    fn observer(&mut self) -> Result<IntersectionObserver, JsValue> {
        if let Some(observer) = &self.observer {
            return Ok(observer.clone());
        }
        if !observer_supported() {
            return Err(JsValue::from_str("IntersectionObserver is not defined"));
        }

        let targets = Rc::clone(&self.targets);
        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            let mut targets = targets.borrow_mut();
            if targets.registry.is_stopped() {
                return;
            }
            let batch: Vec<Intersection> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    targets
                        .slot_of(&entry.target())
                        .map(|id| Intersection::new(id, entry.intersection_ratio()))
                })
                .collect();
            for id in targets.registry.apply(batch) {
                if let Some(element) = targets.elements.get(id.0) {
                    observer.unobserve(element);
                }
                targets.show(id);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.targets.borrow().registry.threshold()));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        self.callback = Some(callback);
        self.observer = Some(observer.clone());
        Ok(observer)
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.stop();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn reveal_block() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        element.set_class_name(config::REVEAL_CLASS);
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    fn has_visible_class(element: &Element) -> bool {
        element.class_list().contains(config::VISIBLE_CLASS)
    }

    #[wasm_bindgen_test]
    fn start_registers_every_element_hidden() {
        let (a, b) = (reveal_block(), reveal_block());
        let mut controller = RevealController::new(RevealOptions::default());

        controller.start(vec![a.clone(), b.clone()]);

        assert_eq!(controller.pending(), 2);
        assert!(!controller.is_visible(&a));
        assert!(!has_visible_class(&b));
    }

    #[wasm_bindgen_test]
    fn duplicate_elements_are_registered_once() {
        let a = reveal_block();
        let mut controller = RevealController::new(RevealOptions::default());

        controller.start(vec![a.clone(), a.clone()]);
        controller.start(vec![a]);

        assert_eq!(controller.pending(), 1);
    }

    #[wasm_bindgen_test]
    fn fallback_reveals_everything_at_once() {
        let (a, b) = (reveal_block(), reveal_block());
        let mut controller = RevealController::new(RevealOptions::default());
        controller.register(vec![a.clone(), b.clone()]);

        controller.reveal_all();

        assert!(has_visible_class(&a));
        assert!(has_visible_class(&b));
        assert!(controller.is_visible(&a));
        assert_eq!(controller.pending(), 0);
    }

    /// Hides `window.IntersectionObserver` until dropped.
    struct ObserverRemoved {
        window: web_sys::Window,
        original: JsValue,
    }

    impl ObserverRemoved {
        fn new() -> Self {
            let window = web_sys::window().unwrap();
            let key = JsValue::from_str("IntersectionObserver");
            let original = Reflect::get(&window, &key).unwrap();
            assert!(Reflect::delete_property(&window, &key).unwrap());
            Self { window, original }
        }
    }

    impl Drop for ObserverRemoved {
        fn drop(&mut self) {
            let key = JsValue::from_str("IntersectionObserver");
            Reflect::set(&self.window, &key, &self.original).unwrap();
        }
    }

    #[wasm_bindgen_test]
    fn start_without_observer_reveals_immediately() {
        let (a, b) = (reveal_block(), reveal_block());
        let mut controller = RevealController::new(RevealOptions::default());

        {
            let _removed = ObserverRemoved::new();
            assert!(!observer_supported());
            controller.start(vec![a.clone(), b.clone()]);
        }

        assert!(observer_supported());
        assert!(has_visible_class(&a));
        assert!(has_visible_class(&b));
        assert!(controller.is_visible(&b));
        assert_eq!(controller.pending(), 0);
    }

    #[wasm_bindgen_test]
    fn stop_is_idempotent_and_safe_before_start() {
        let mut controller = RevealController::new(RevealOptions::default());
        controller.stop();
        controller.stop();
        assert_eq!(controller.pending(), 0);
    }

    #[wasm_bindgen_test]
    fn start_after_stop_does_nothing() {
        let a = reveal_block();
        let mut controller = RevealController::new(RevealOptions::default());
        controller.stop();

        controller.start(vec![a.clone()]);

        assert_eq!(controller.pending(), 0);
        assert!(!has_visible_class(&a));
    }

    #[wasm_bindgen_test]
    fn stop_keeps_revealed_elements_visible() {
        let a = reveal_block();
        let mut controller = RevealController::new(RevealOptions::default());
        controller.register(vec![a.clone()]);
        controller.reveal_all();

        controller.stop();

        assert!(has_visible_class(&a));
        assert!(controller.is_visible(&a));
    }
}
