//! Pointer-event normalization.
//!
//! Mouse and touch events arrive with different shapes; this module folds
//! both into one [`PointerSample`] consumed uniformly by the drag session,
//! and describes which platform events a host adapter should listen for.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
}

/// One finger position from a touch event's changed-contact list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchContact {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchContact {
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Raw pointer payload as delivered by the host event layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse {
        client_x: f64,
        client_y: f64,
        button: MouseButton,
    },
    Touch {
        changed: SmallVec<[TouchContact; 2]>,
    },
}

impl PointerInput {
    #[must_use]
    pub fn mouse(client_x: f64, client_y: f64, button: MouseButton) -> Self {
        Self::Mouse {
            client_x,
            client_y,
            button,
        }
    }

    #[must_use]
    pub fn touch(contacts: impl IntoIterator<Item = TouchContact>) -> Self {
        Self::Touch {
            changed: contacts.into_iter().collect(),
        }
    }
}

/// Normalized pointer position consumed by the drag session.
///
/// Touch input has no button, so it reports `MouseButton::Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub client_x: f64,
    pub client_y: f64,
    pub button: MouseButton,
}

/// Collapses a raw pointer payload into a single client position.
///
/// Touch events contribute their **last** changed contact. Only one
/// concurrent touch is supported; which contact wins under simultaneous
/// multi-touch is unspecified. An empty contact list yields `None`.
#[must_use]
pub fn normalize(input: &PointerInput) -> Option<PointerSample> {
    match input {
        PointerInput::Mouse {
            client_x,
            client_y,
            button,
        } => Some(PointerSample {
            kind: PointerKind::Mouse,
            client_x: *client_x,
            client_y: *client_y,
            button: *button,
        }),
        PointerInput::Touch { changed } => changed.last().map(|contact| PointerSample {
            kind: PointerKind::Touch,
            client_x: contact.client_x,
            client_y: contact.client_y,
            button: MouseButton::Primary,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Where a listener is attached.
///
/// Release listeners go on the document so a drag that leaves the chart can
/// still resolve deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListenScope {
    Chart,
    Document,
}

/// One platform event name a host adapter should attach a listener for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerBinding {
    pub event: String,
    pub phase: PointerPhase,
    pub scope: ListenScope,
}

/// Splits a space-separated event-name list.
#[must_use]
pub fn parse_event_names(list: &str) -> Vec<&str> {
    list.split_whitespace().collect()
}

/// Declarative listener set a platform adapter wires against the real event
/// layer: one listener per event name, routed by phase into the binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerPlan {
    bindings: Vec<ListenerBinding>,
}

impl ListenerPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one binding per name in a space-separated list.
    pub fn listen(&mut self, names: &str, phase: PointerPhase, scope: ListenScope) {
        for event in parse_event_names(names) {
            self.bindings.push(ListenerBinding {
                event: event.to_owned(),
                phase,
                scope,
            });
        }
    }

    /// Standard plan: press and move on the chart, release at document scope,
    /// mouse and touch names side by side.
    #[must_use]
    pub fn standard() -> Self {
        let mut plan = Self::new();
        plan.listen("mousedown touchstart", PointerPhase::Down, ListenScope::Chart);
        plan.listen("mousemove touchmove", PointerPhase::Move, ListenScope::Chart);
        plan.listen("mouseup touchend", PointerPhase::Up, ListenScope::Document);
        plan
    }

    #[must_use]
    pub fn bindings(&self) -> &[ListenerBinding] {
        &self.bindings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
