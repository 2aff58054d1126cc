//! Dialog lifecycle
//!
//! Tracks which mode the shared product dialog is in and mediates show/hide
//! on the presentation surface. Both operations are idempotent and safe to
//! call before any surface has been installed.

/// Which operation the dialog is performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    Edit,
    Delete,
}

impl DialogMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Handle to the presentation layer's dialog widget.
pub trait DialogSurface {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Owns the dialog mode and the optional presentation handle.
#[derive(Debug, Default)]
pub struct DialogController<S> {
    mode: DialogMode,
    surface: Option<S>,
    visible: bool,
}

impl<S: DialogSurface> DialogController<S> {
    pub fn new() -> Self {
        Self {
            mode: DialogMode::Closed,
            surface: None,
            visible: false,
        }
    }

    /// Install the presentation handle once the host UI has one.
    pub fn install_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_open()
    }

    /// Enter `mode` and show the surface.
    pub fn open(&mut self, mode: DialogMode) {
        if !mode.is_open() {
            self.close();
            return;
        }
        self.mode = mode;
        self.show();
    }

    /// Leave any open mode and hide the surface.
    pub fn close(&mut self) {
        self.mode = DialogMode::Closed;
        self.hide();
    }

    /// Show the surface; a no-op when already visible or never installed.
    pub fn show(&mut self) {
        if self.visible {
            return;
        }
        self.visible = true;
        match self.surface.as_mut() {
            Some(surface) => surface.show(),
            None => tracing::debug!("no dialog surface installed, show skipped"),
        }
    }

    /// Hide the surface; a no-op when already hidden or never installed.
    pub fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        match self.surface.as_mut() {
            Some(surface) => surface.hide(),
            None => tracing::debug!("no dialog surface installed, hide skipped"),
        }
    }
}
