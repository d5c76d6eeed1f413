use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::reveal::controller::{RevealController, RevealOptions};

/// Reveals `targets` as they scroll into view while the calling component is mounted.
#[hook]
pub fn use_reveal(targets: Vec<NodeRef>) {
    use_effect_with_deps(
        move |_| {
            let elements: Vec<Element> = targets
                .iter()
                .filter_map(|target| target.cast::<Element>())
                .collect();
            if elements.len() != targets.len() {
                warn!(
                    "{} of {} reveal targets were not mounted",
                    targets.len() - elements.len(),
                    targets.len()
                );
            }

            let mut controller = RevealController::new(RevealOptions::default());
            controller.start(elements);
            debug!("{} reveal targets waiting to scroll into view", controller.pending());

            move || controller.stop()
        },
        (), // Only on mount, the page markup never changes
    );
}
