use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// In-page targets the header and footer can jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Hero,
    Strip,
    Brick,
    Fabric,
    Stage,
}

impl Anchor {
    /// Anchors listed in the header, in display order.
    pub const NAV: [Anchor; 5] = [
        Anchor::Hero,
        Anchor::Strip,
        Anchor::Brick,
        Anchor::Fabric,
        Anchor::Stage,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Hero => "hero",
            Anchor::Strip => "strip",
            Anchor::Brick => "brick",
            Anchor::Fabric => "fabric",
            Anchor::Stage => "stage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Top => "Back to top",
            Anchor::Hero => "Intro",
            Anchor::Strip => "Brand",
            Anchor::Brick => "Poster",
            Anchor::Fabric => "Fabric",
            Anchor::Stage => "Stage",
        }
    }
}

/// Smoothly scrolls the anchor's element to the top of the viewport.
/// Returns false when the element is not in the document.
pub fn scroll_to(anchor: Anchor) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(anchor.id()))
    else {
        debug!("No element with id #{} to scroll to", anchor.id());
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_order_matches_header() {
        let labels: Vec<&str> = Anchor::NAV.iter().map(|anchor| anchor.label()).collect();
        assert_eq!(labels, ["Intro", "Brand", "Poster", "Fabric", "Stage"]);
    }

    #[test]
    fn anchor_ids_are_unique() {
        let mut ids: Vec<&str> = Anchor::NAV.iter().map(|anchor| anchor.id()).collect();
        ids.push(Anchor::Top.id());
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn top_is_not_in_the_header() {
        assert!(!Anchor::NAV.contains(&Anchor::Top));
    }
}
