use std::cell::RefCell;

use crate::state::ConversationState;

/// Marks the state as busy for as long as the guard lives.
///
/// Acquiring never waits or fails, even if another guard is alive. The
/// flag is cleared when any guard is dropped.
pub(crate) struct BusyGuard<'a> {
    state: &'a RefCell<ConversationState>,
    clear_pending_file: bool,
}

impl<'a> BusyGuard<'a> {
    /// Sets the busy flag and clears the last error.
    pub fn acquire(state: &'a RefCell<ConversationState>) -> Self {
        {
            let mut state = state.borrow_mut();
            state.is_busy = true;
            state.last_error = None;
        }
        Self {
            state,
            clear_pending_file: false,
        }
    }

    /// Also drops the selected file on release.
    #[inline]
    pub fn clear_pending_file_on_release(&mut self) {
        self.clear_pending_file = true;
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.is_busy = false;
        if self.clear_pending_file {
            state.pending_file = None;
        }
    }
}
