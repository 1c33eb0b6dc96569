//! Input representation for the sequence engine

/// One raw key-press notification from the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Platform key identifier: a single printable character or a named
    /// key such as `Enter` or `ArrowUp`.
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    /// Whether the event target is an editable surface. Outside
    /// editable surfaces the engine only reacts to accelerator-style
    /// combos carrying Ctrl or Alt.
    pub editable: bool,
}

impl KeyEvent {
    /// Creates an unmodified key press in an editable context.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
            editable: true,
        }
    }

    /// Creates a Ctrl+key press in an editable context.
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    /// Creates an Alt+key press in an editable context.
    pub fn alt(key: impl Into<String>) -> Self {
        Self {
            alt: true,
            ..Self::plain(key)
        }
    }

    /// Marks the event as targeting a non-editable surface.
    pub fn outside_editable(mut self) -> Self {
        self.editable = false;
        self
    }
}
