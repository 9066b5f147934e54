use crate::chart::ChartSpec;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Figures to show; the first one lives in the root window.
    pub charts: Vec<ChartSpec>,

    /// Whether each figure is still shown (index 0 is the root window).
    open: Vec<bool>,

    /// Summary line shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(charts: Vec<ChartSpec>, status_message: Option<String>) -> Self {
        let open = vec![true; charts.len()];
        Self {
            charts,
            open,
            status_message,
        }
    }

    /// The figure drawn in the root window.
    pub fn primary(&self) -> Option<&ChartSpec> {
        self.charts.first()
    }

    /// Indices of figures drawn in their own windows.
    pub fn secondary_indices(&self) -> std::ops::Range<usize> {
        1.min(self.charts.len())..self.charts.len()
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.open.get(idx).copied().unwrap_or(false)
    }

    /// Mark a figure closed by the user.
    pub fn close(&mut self, idx: usize) {
        if let Some(flag) = self.open.get_mut(idx) {
            log::debug!("Closed figure {}", self.charts[idx].id);
            *flag = false;
        }
    }

    /// The user asked to close the root window. Returns `true` when other
    /// figures are still open, in which case the root is only hidden.
    pub fn close_primary(&mut self) -> bool {
        self.close(0);
        !self.all_closed()
    }

    /// Every figure has been closed; the event loop may end.
    pub fn all_closed(&self) -> bool {
        self.open_count() == 0
    }

    /// Toggle a secondary figure window. The root window is not toggled.
    pub fn toggle(&mut self, idx: usize) {
        if idx == 0 {
            return;
        }
        if self.is_open(idx) {
            self.close(idx);
        } else if let Some(flag) = self.open.get_mut(idx) {
            *flag = true;
        }
    }

    /// Number of figures currently visible.
    pub fn open_count(&self) -> usize {
        (0..self.charts.len()).filter(|&i| self.is_open(i)).count()
    }
}
