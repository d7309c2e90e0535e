use assistant_core::ElementKind;

/// Seam between the assistant and the host page.
///
/// Implementations are expected to be defensive: operations on unknown
/// identifiers are no-ops, never panics. The injection routines in this
/// crate rely on that to stay safe when called speculatively.
pub trait Document: Send + Sync {
    /// The element's kind, or `None` when no such editable element exists.
    fn kind(&self, id: &str) -> Option<ElementKind>;

    /// Live text: the value for inputs and textareas, the text content for
    /// rich-text regions.
    fn value(&self, id: &str) -> Option<String>;

    /// Assigns text through whatever path the host framework's reactivity
    /// system observes, so the write looks like user typing.
    fn set_value(&self, id: &str, text: &str);

    /// Synthesizes a bubbling `input` event after programmatic assignment.
    fn dispatch_input(&self, id: &str);

    /// Dispatches the custom AI-update event the rich-text editor listens
    /// for; the editor applies the content through its own command
    /// interface.
    fn dispatch_ai_update(&self, id: &str, text: &str);

    /// Moves focus to the element.
    fn focus(&self, id: &str);

    /// Whether the element sits inside the assistant popup.
    fn in_popup(&self, id: &str) -> bool;
}
