// SPDX-License-Identifier: GPL-3.0-only

//! The layout model: observable key-area state plus gesture routing.
//!
//! The model owns the current [`KeyArea`], exposes it as an indexable grid
//! of key records, and mediates between the gesture layer and the layout
//! updater. Gesture indices come in, get resolved against current data,
//! get translated into policy-driven key state, and get re-broadcast at two
//! granularities: a row-scoped `KeysChanged` for a single key substitution,
//! and a `ResetBegan`/`ResetEnded` bracket when the whole surface swaps.
//!
//! Structural-change events (`WidthChanged`, `HeightChanged`,
//! `BackgroundChanged`, `VisibleChanged`) are a pure diff of the previous
//! area against the incoming one, computed before the old value is
//! discarded. Nothing fires for dimensions that did not change.
//!
//! All operations are fail-soft: out-of-range indices resolve to the
//! default empty key, a missing updater degrades state transforms to the
//! default key, and unknown role names log a warning and return
//! [`FieldValue::None`]. A dropped frame is preferable to a crash here.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use futures::channel::mpsc;
use tracing::{debug, warn};

use crate::geometry::Rect;
use crate::layout::event::LayoutEvent;
use crate::layout::key::{Key, KeyState};
use crate::layout::key_area::KeyArea;
use crate::logic::{ActivePanel, SharedLayoutUpdater};

/// Shared handle to a layout model.
///
/// Exactly one owner (the input method controller) controls the lifetime;
/// the gesture router, updater wiring, and renderer hold clones.
pub type SharedLayoutModel = Rc<RefCell<LayoutModel>>;

/// Creates a layout model behind a shared handle.
pub fn shared_layout_model(updater: Option<SharedLayoutUpdater>) -> SharedLayoutModel {
    Rc::new(RefCell::new(LayoutModel::new(updater)))
}

// ============================================================================
// Per-key field queries
// ============================================================================

/// The closed set of per-key fields the presentation layer may query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    /// Raw reactive hit rectangle.
    ReactiveArea,
    /// Visual key face (reactive rect shrunk by margins).
    Rectangle,
    /// Background URL resolved against the image directory.
    Background,
    /// Nine-patch borders of the key background, packed into a `Rect`.
    BackgroundBorders,
    /// Key label.
    Text,
}

impl KeyField {
    /// All fields, in role-map declaration order.
    pub const ALL: [KeyField; 5] = [
        KeyField::ReactiveArea,
        KeyField::Rectangle,
        KeyField::Background,
        KeyField::BackgroundBorders,
        KeyField::Text,
    ];

    /// Role name used by the declarative presentation layer. Under_score
    /// naming because the names surface as template variables there.
    pub fn role_name(self) -> &'static str {
        match self {
            KeyField::ReactiveArea => "key_reactive_area",
            KeyField::Rectangle => "key_rectangle",
            KeyField::Background => "key_background",
            KeyField::BackgroundBorders => "key_background_borders",
            KeyField::Text => "key_text",
        }
    }
}

/// Value of a single per-key field query.
///
/// A deliberately small variant set: the presentation layer has no native
/// inset type, so border insets ride in the `Rect` variant with left, top,
/// right, bottom stored as x, y, width, height.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A rectangle-shaped value.
    Rect(Rect),
    /// A resolved background URL; `None` when there is no background.
    Url(Option<String>),
    /// A text value.
    Text(String),
    /// Default value for contract violations (unknown role name).
    None,
}

// ============================================================================
// Layout model
// ============================================================================

/// Observable container mediating key-area state and gesture routing.
pub struct LayoutModel {
    key_area: KeyArea,
    image_directory: PathBuf,
    roles: HashMap<&'static str, KeyField>,
    updater: Option<SharedLayoutUpdater>,
    subscribers: Vec<mpsc::UnboundedSender<LayoutEvent>>,
}

impl LayoutModel {
    /// Creates an empty model, optionally attached to a layout updater.
    pub fn new(updater: Option<SharedLayoutUpdater>) -> Self {
        let roles = KeyField::ALL
            .iter()
            .map(|field| (field.role_name(), *field))
            .collect();

        Self {
            key_area: KeyArea::default(),
            image_directory: PathBuf::new(),
            roles,
            updater,
            subscribers: Vec::new(),
        }
    }

    /// Attaches (or detaches) the layout updater.
    pub fn set_updater(&mut self, updater: Option<SharedLayoutUpdater>) {
        self.updater = updater;
    }

    /// Returns a clone of the updater handle, if one is attached.
    pub fn updater(&self) -> Option<SharedLayoutUpdater> {
        self.updater.clone()
    }

    /// Registers an observer and returns its event stream.
    ///
    /// Emission is synchronous fan-out on the calling thread; receivers
    /// that have been dropped are pruned on the next emission.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<LayoutEvent> {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: LayoutEvent) {
        self.subscribers
            .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
    }

    // ------------------------------------------------------------------------
    // Key area state
    // ------------------------------------------------------------------------

    /// Replaces the current key area, diffing it against the previous one.
    ///
    /// The whole operation is bracketed by `ResetBegan`/`ResetEnded`;
    /// structural events fire in between, only for dimensions that changed.
    pub fn set_key_area(&mut self, area: KeyArea) {
        self.emit(LayoutEvent::ResetBegan);

        // The diff must read the old area before it is discarded.
        let geometry_changed = !self.key_area.rect.same_size(&area.rect);
        let background_changed = self.key_area.background != area.background;
        let visible_changed = self.key_area.is_empty() != area.is_empty();

        debug!(
            keys = area.keys.len(),
            geometry_changed, background_changed, visible_changed, "key area replaced"
        );

        self.key_area = area;

        if geometry_changed {
            self.emit(LayoutEvent::WidthChanged(self.width()));
            self.emit(LayoutEvent::HeightChanged(self.height()));
        }

        if background_changed {
            let url = self.background();
            self.emit(LayoutEvent::BackgroundChanged(url));
        }

        if visible_changed {
            let visible = self.is_visible();
            self.emit(LayoutEvent::VisibleChanged(visible));
        }

        self.emit(LayoutEvent::ResetEnded);
    }

    /// Read-only snapshot of the current key area.
    pub fn key_area(&self) -> &KeyArea {
        &self.key_area
    }

    /// Surface width.
    pub fn width(&self) -> f32 {
        self.key_area.rect.width
    }

    /// Surface height.
    pub fn height(&self) -> f32 {
        self.key_area.rect.height
    }

    /// A surface with no keys is not visible.
    pub fn is_visible(&self) -> bool {
        !self.key_area.is_empty()
    }

    /// Resolved surface background URL, `None` when there is none.
    pub fn background(&self) -> Option<String> {
        to_url(&self.image_directory, &self.key_area.background)
    }

    /// Base directory for resolving background image names.
    pub fn image_directory(&self) -> &Path {
        &self.image_directory
    }

    /// Updates the image directory. All previously resolved background
    /// URLs become stale, so a change triggers a full reset bracket even
    /// though no key geometry moved.
    pub fn set_image_directory(&mut self, directory: impl Into<PathBuf>) {
        let directory = directory.into();
        if self.image_directory == directory {
            return;
        }

        self.image_directory = directory;
        self.emit(LayoutEvent::ResetBegan);
        let url = self.background();
        self.emit(LayoutEvent::BackgroundChanged(url));
        self.emit(LayoutEvent::ResetEnded);
    }

    // ------------------------------------------------------------------------
    // Indexed queries
    // ------------------------------------------------------------------------

    /// Number of keys in the current area.
    pub fn row_count(&self) -> usize {
        self.key_area.keys.len()
    }

    /// Role-name mapping exposed to the presentation layer.
    pub fn role_names(&self) -> impl Iterator<Item = (&'static str, KeyField)> + '_ {
        self.roles.iter().map(|(name, field)| (*name, *field))
    }

    /// One derived field of the key at `index`.
    ///
    /// Out-of-range indices resolve against the default empty key.
    pub fn field(&self, index: usize, field: KeyField) -> FieldValue {
        let key = self.key_area.key_or_default(index);

        match field {
            KeyField::ReactiveArea => FieldValue::Rect(key.rect),
            KeyField::Rectangle => FieldValue::Rect(key.visual_rect()),
            KeyField::Background => {
                FieldValue::Url(to_url(&self.image_directory, &key.background))
            }
            KeyField::BackgroundBorders => {
                let m = key.background_borders;
                FieldValue::Rect(Rect::new(m.left, m.top, m.right, m.bottom))
            }
            KeyField::Text => FieldValue::Text(key.label),
        }
    }

    /// Field query keyed by role name, for the declarative front end.
    ///
    /// An unknown role name is a contract violation: it is logged and
    /// answered with [`FieldValue::None`] instead of failing hard.
    pub fn field_by_name(&self, index: usize, role: &str) -> FieldValue {
        match self.roles.get(role) {
            Some(field) => self.field(index, *field),
            None => {
                warn!(index, role, "invalid role in field query");
                FieldValue::None
            }
        }
    }

    // ------------------------------------------------------------------------
    // Gesture routing
    // ------------------------------------------------------------------------

    /// Hover entered the key at `index`. Forwarded to the updater and
    /// re-emitted as `KeyEntered`; no local state change.
    pub fn on_entered(&mut self, index: usize) {
        let key = self.key_area.key_or_default(index);

        if let Some(updater) = self.updater.clone() {
            updater.borrow_mut().on_key_entered(&key);
        }

        self.emit(LayoutEvent::KeyEntered(key));
    }

    /// Hover left the key at `index`.
    pub fn on_exited(&mut self, index: usize) {
        let key = self.key_area.key_or_default(index);

        if let Some(updater) = self.updater.clone() {
            updater.borrow_mut().on_key_exited(&key);
        }

        self.emit(LayoutEvent::KeyExited(key));
    }

    /// The key at `index` went down.
    ///
    /// The updater supplies the Pressed-state variant (the default empty
    /// key when no updater is attached — degraded behavior, not a
    /// failure), which replaces the key in place. Emits a partial update
    /// scoped to exactly this index, then `KeyPressed`.
    pub fn on_pressed(&mut self, index: usize) {
        let key = self.key_area.key_or_default(index);
        let pressed_key = match self.updater.clone() {
            Some(updater) => updater.borrow().modify_key(&key, KeyState::Pressed),
            None => Key::default(),
        };

        let replaced = self.key_area.replace_key(index, pressed_key.clone());

        if let Some(updater) = self.updater.clone() {
            updater.borrow_mut().on_key_pressed(&pressed_key);
        }

        if replaced {
            self.emit(LayoutEvent::KeysChanged { index });
        }
        self.emit(LayoutEvent::KeyPressed(pressed_key));
    }

    /// The key at `index` came up.
    ///
    /// The key is restored to its Normal-state variant. The release is
    /// routed by the panel active *now*: while the extended panel is up it
    /// becomes an extended-key selection, otherwise a plain release. A
    /// policy that flips panels during the press therefore changes how its
    /// own release routes; the panel is deliberately not captured earlier.
    pub fn on_released(&mut self, index: usize) {
        let key = self.key_area.key_or_default(index);
        let normal_key = match self.updater.clone() {
            Some(updater) => updater.borrow().modify_key(&key, KeyState::Normal),
            None => Key::default(),
        };

        let replaced = self.key_area.replace_key(index, normal_key.clone());

        if let Some(updater) = self.updater.clone() {
            let panel = updater.borrow().active_panel();
            if panel == ActivePanel::Extended {
                updater.borrow_mut().on_extended_key_selected(&normal_key);
            } else {
                updater.borrow_mut().on_key_released(&normal_key);
            }
        }

        if replaced {
            self.emit(LayoutEvent::KeysChanged { index });
        }
        self.emit(LayoutEvent::KeyReleased(normal_key));
    }

    /// The key at `index` was held past the long-press threshold.
    ///
    /// Requests the extended-key popup when the key offers one; the model
    /// itself is not mutated. Always emits `KeyLongPressed`.
    pub fn on_press_and_hold(&mut self, index: usize) {
        let key = self.key_area.key_or_default(index);

        if key.has_extended_keys {
            self.emit(LayoutEvent::ExtendedKeysShown(key.clone()));
        }

        self.emit(LayoutEvent::KeyLongPressed(key));
    }

    /// The extended-key popup became visible for `key`. Forwarded to the
    /// updater unconditionally.
    pub fn on_extended_keys_shown(&mut self, key: &Key) {
        if let Some(updater) = self.updater.clone() {
            updater.borrow_mut().on_extended_keys_shown(key);
        }
    }
}

/// Joins an image directory and a base name into a background URL.
///
/// Either part being empty resolves to "no background" rather than a
/// malformed locator.
fn to_url(directory: &Path, base_name: &str) -> Option<String> {
    if directory.as_os_str().is_empty() || base_name.is_empty() {
        return None;
    }

    Some(format!("{}/{}", directory.display(), base_name))
}

// ============================================================================
// Tests
// ============================================================================
