//! Single selection slot that decides which dialog is open.
//!
//! Editing and viewing share one slot, so both dialogs can never be visible
//! at the same time. Switching modes requires a `close` first.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    Idle,
    Editing(T),
    Viewing(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("another record is already open for {0}")]
    Busy(SelectionMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Editing,
    Viewing,
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionMode::Editing => f.write_str("editing"),
            SelectionMode::Viewing => f.write_str("viewing"),
        }
    }
}

impl<T> Selection<T> {
    /// `Idle -> Editing(record)`; rejected in any other state
    pub fn edit(&mut self, record: T) -> Result<(), SelectionError> {
        self.ensure_idle()?;
        *self = Selection::Editing(record);
        Ok(())
    }

    /// `Idle -> Viewing(record)`; rejected in any other state
    pub fn view(&mut self, record: T) -> Result<(), SelectionError> {
        self.ensure_idle()?;
        *self = Selection::Viewing(record);
        Ok(())
    }

    /// Back to `Idle`, returning the record that was open
    pub fn close(&mut self) -> Option<T> {
        match std::mem::replace(self, Selection::Idle) {
            Selection::Idle => None,
            Selection::Editing(record) | Selection::Viewing(record) => Some(record),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn mode(&self) -> Option<SelectionMode> {
        match self {
            Selection::Idle => None,
            Selection::Editing(_) => Some(SelectionMode::Editing),
            Selection::Viewing(_) => Some(SelectionMode::Viewing),
        }
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            Selection::Editing(record) => Some(record),
            _ => None,
        }
    }

    pub fn viewing(&self) -> Option<&T> {
        match self {
            Selection::Viewing(record) => Some(record),
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&T> {
        match self {
            Selection::Idle => None,
            Selection::Editing(record) | Selection::Viewing(record) => Some(record),
        }
    }

    fn ensure_idle(&self) -> Result<(), SelectionError> {
        match self.mode() {
            None => Ok(()),
            Some(mode) => Err(SelectionError::Busy(mode)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_then_close() {
        let mut s = Selection::Idle;
        s.edit("a").unwrap();
        assert_eq!(s.editing(), Some(&"a"));
        assert_eq!(s.viewing(), None);
        assert_eq!(s.close(), Some("a"));
        assert!(s.is_idle());
    }

    #[test]
    fn test_view_then_edit_is_rejected() {
        let mut s = Selection::Idle;
        s.view("a").unwrap();
        assert_eq!(
            s.edit("b"),
            Err(SelectionError::Busy(SelectionMode::Viewing))
        );
        // the open view is untouched and no edit dialog appeared
        assert_eq!(s.viewing(), Some(&"a"));
        assert_eq!(s.editing(), None);
    }

    #[test]
    fn test_edit_then_view_is_rejected() {
        let mut s = Selection::Idle;
        s.edit(1).unwrap();
        assert!(s.view(2).is_err());
        assert!(s.edit(3).is_err());
        assert_eq!(s, Selection::Editing(1));
    }

    #[test]
    fn test_close_is_mandatory_between_modes() {
        let mut s = Selection::Idle;
        s.view(1).unwrap();
        s.close();
        s.edit(1).unwrap();
        assert_eq!(s.mode(), Some(SelectionMode::Editing));
    }

    #[test]
    fn test_close_when_idle() {
        let mut s: Selection<u8> = Selection::Idle;
        assert_eq!(s.close(), None);
        assert!(s.is_idle());
    }
}
