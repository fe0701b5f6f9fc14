//! Component trait for UI pieces

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI piece that renders from props and turns events into actions
///
/// Props carry everything read-only the component needs. `handle_event`
/// returns actions and never touches app state; anything a component keeps
/// in `&mut self` is view-local (cursor position and the like).
pub trait Component<A> {
    type Props<'a>;

    /// Map an event to actions
    ///
    /// Returns `None`, `Some(action)` or a collection. The default is for
    /// render-only components.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
