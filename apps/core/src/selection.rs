#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Copy the command of the filtered result at this position.
    Copy(usize),
    /// Highlight the command at this position so the user can copy it by hand.
    MarkForManualCopy(usize),
    None,
}

/// Which filtered result is highlighted. `None` only while the result list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<usize>,
    len: usize,
}

impl SelectionState {
    pub fn for_results(len: usize) -> Self {
        let mut state = Self::default();
        state.reset(len);
        state
    }

    /// Discards any prior selection; the first result is selected when there is one.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.selected = if len > 0 { Some(0) } else { None };
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Wire form of the selection: `-1` when nothing is selected.
    pub fn index(&self) -> isize {
        self.selected.map(|index| index as isize).unwrap_or(-1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn move_down(&mut self) {
        if let Some(current) = self.selected {
            self.selected = Some((current + 1).min(self.len - 1));
        }
    }

    pub fn move_up(&mut self) {
        if let Some(current) = self.selected {
            self.selected = Some(current.saturating_sub(1));
        }
    }

    pub fn pick(&mut self, index: usize, auto_copy: bool) -> SelectAction {
        if index >= self.len {
            return SelectAction::None;
        }

        self.selected = Some(index);
        if auto_copy {
            SelectAction::Copy(index)
        } else {
            SelectAction::None
        }
    }

    pub fn confirm(&self, auto_copy: bool) -> SelectAction {
        match self.selected {
            Some(index) if auto_copy => SelectAction::Copy(index),
            Some(index) => SelectAction::MarkForManualCopy(index),
            None => SelectAction::None,
        }
    }
}
