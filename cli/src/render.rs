//! Plain-text rendering of a `TodoState` snapshot.

use std::fmt;

use todo_core::TodoState;

/// Display adapter that prints the banner, the items and the footer.
pub struct Screen<'a>(pub &'a TodoState);

pub fn render(state: &TodoState) -> Screen<'_> {
    Screen(state)
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        if state.is_loading() {
            return writeln!(f, "Loading todos...");
        }

        if let Some(banner) = state.error() {
            writeln!(f, "! {banner}")?;
        }

        if state.todos().is_empty() {
            writeln!(f, "No todos yet. Add one above!")?;
        } else {
            let width = state.todos().iter().map(|t| t.id.as_str().len()).max().unwrap_or(0);
            for todo in state.todos() {
                let mark = if todo.completed { "x" } else { " " };
                writeln!(f, "[{mark}] {:>width$}  {}", todo.id, todo.text)?;
            }
        }

        let stats = state.stats();
        writeln!(
            f,
            "Total: {} | Completed: {} | Pending: {}",
            stats.total, stats.completed, stats.pending
        )
    }
}
