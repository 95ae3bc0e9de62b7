/// Explicit record of what is active across the workspace.
///
/// Carries a monotonically increasing revision so render-side consumers can
/// detect a focus change without comparing the whole state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    tab: usize,
    frame: usize,
    revision: u64,
}

impl Selection {
    pub fn tab(&self) -> usize {
        self.tab
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Point the selection at a tab/frame pair. The revision is bumped only
    /// when something actually changed.
    pub fn select(&mut self, tab: usize, frame: usize) {
        if self.tab != tab || self.frame != frame {
            self.tab = tab;
            self.frame = frame;
            self.revision += 1;
        }
    }

    pub fn select_frame(&mut self, frame: usize) {
        if self.frame != frame {
            self.frame = frame;
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_bumps_only_on_change() {
        let mut selection = Selection::default();
        assert_eq!(selection.revision(), 0);

        selection.select(1, 0);
        assert_eq!(selection.revision(), 1);

        selection.select(1, 0);
        assert_eq!(selection.revision(), 1);

        selection.select_frame(2);
        assert_eq!(selection.revision(), 2);
        assert_eq!((selection.tab(), selection.frame()), (1, 2));
    }
}
