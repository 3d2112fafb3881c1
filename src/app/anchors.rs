use leptos::{
    html,
    prelude::{GetUntracked, GetValue, NodeRef, SetValue, StoredValue},
};

use crate::scroll::{Anchor, TransformDescriptor};

/// Holds the live element for every scroll-driven anchor and applies
/// computed transforms to them. This is the only place the choreography
/// touches the DOM.
///
/// The binder is `Copy`, so the page component can hand it to the scroll
/// handler and to `on_cleanup` without reference counting. Elements attach
/// through [`AnchorBinder::anchor_ref`] when their nodes mount; an anchor
/// whose element is not (or no longer) attached is simply skipped.
#[derive(Clone, Copy)]
pub struct AnchorBinder {
    refs: [NodeRef<html::Div>; Anchor::ALL.len()],
    active: StoredValue<bool>,
}

impl AnchorBinder {
    pub fn new() -> Self {
        Self {
            refs: [
                NodeRef::new(),
                NodeRef::new(),
                NodeRef::new(),
                NodeRef::new(),
                NodeRef::new(),
            ],
            active: StoredValue::new(true),
        }
    }

    /// Node ref to attach to the anchor's element via `node_ref=`.
    pub fn anchor_ref(&self, anchor: Anchor) -> NodeRef<html::Div> {
        self.refs[anchor.index()]
    }

    /// Write each descriptor's transform onto its bound element. Anchors
    /// without a live element are skipped; after [`AnchorBinder::unbind_all`]
    /// every anchor is skipped. Never fails.
    pub fn apply(&self, transforms: &[(Anchor, TransformDescriptor)]) {
        if !self.active.get_value() {
            return;
        }
        for (anchor, descriptor) in transforms {
            if let Some(el) = self.refs[anchor.index()].get_untracked() {
                let _ = el.style().set_property("transform", &descriptor.to_css());
            }
        }
    }

    /// Release all bindings; subsequent [`AnchorBinder::apply`] calls are
    /// no-ops. Called on page unmount.
    pub fn unbind_all(&self) {
        self.active.set_value(false);
    }
}

impl Default for AnchorBinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{compute_transforms, ScrollState};
    use leptos::prelude::Owner;

    #[test]
    fn apply_without_live_bindings_is_a_noop() {
        let owner = Owner::new();
        owner.set();
        let binder = AnchorBinder::new();
        // no elements ever mounted - every anchor must be skipped quietly
        binder.apply(&compute_transforms(&ScrollState::new(120.0, 800.0)));
        binder.apply(&compute_transforms(&ScrollState::new(0.0, 0.0)));
    }

    #[test]
    fn unbind_all_disables_further_applies() {
        let owner = Owner::new();
        owner.set();
        let binder = AnchorBinder::new();
        binder.unbind_all();
        binder.apply(&compute_transforms(&ScrollState::new(640.0, 800.0)));
        // unbinding twice is fine
        binder.unbind_all();
        binder.apply(&compute_transforms(&ScrollState::new(640.0, 800.0)));
    }
}
