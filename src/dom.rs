//! The page elements the widget writes to, abstracted so the widget can run
//! against a live document or an in-memory stand-in.

/// The scrolling container that holds message bubbles.
pub trait MessageLog {
    /// Appends a node with the given class whose content is `text` as plain
    /// text, never parsed as markup.
    fn append(&self, class_name: &str, text: &str);

    /// Scrolls so the newest node is visible.
    fn scroll_to_bottom(&self);
}

/// The text field the user types into.
pub trait InputField {
    fn value(&self) -> String;
    fn clear(&self);
}
