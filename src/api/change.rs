use std::fmt;

use serde::{Deserialize, Serialize};

/// Chart attribute whose accepted change triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadarProperty {
    Title,
    Labels,
    Values,
    MaxValue,
    GridLines,
    Margin,
    FillColor,
    StrokeColor,
    PointColor,
    GridColor,
    LabelColor,
    BackgroundColor,
    ShowPoints,
}

/// Handle returned by `RadarChart::connect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub type ChangeListener = Box<dyn FnMut(RadarProperty)>;

/// Ordered callback list invoked on every accepted chart mutation.
#[derive(Default)]
pub struct ChangeListeners {
    next_id: u64,
    entries: Vec<(ListenerId, ChangeListener)>,
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}

impl ChangeListeners {
    pub fn connect(&mut self, listener: ChangeListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Removes a listener. Returns `true` when it was registered.
    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        if let Some(position) = self.entries.iter().position(|(entry, _)| *entry == id) {
            self.entries.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify(&mut self, property: RadarProperty) {
        for (_, listener) in &mut self.entries {
            listener(property);
        }
    }
}
