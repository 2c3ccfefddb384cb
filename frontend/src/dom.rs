use chat_widget::{InputField, MessageLog};
use web_sys::{Document, HtmlElement, HtmlInputElement};

/// The `#messages` container.
pub struct DomMessageLog {
    document: Document,
    container: HtmlElement,
}

impl DomMessageLog {
    pub fn new(document: Document, container: HtmlElement) -> Self {
        Self { document, container }
    }
}

impl MessageLog for DomMessageLog {
    fn append(&self, class_name: &str, text: &str) {
        let node = match self.document.create_element("div") {
            Ok(node) => node,
            Err(e) => {
                log::error!("Failed to create message node: {e:?}");
                return;
            }
        };
        node.set_class_name(class_name);
        // textContent, so replies are never interpreted as markup
        node.set_text_content(Some(text));
        if let Err(e) = self.container.append_child(&node) {
            log::error!("Failed to append message node: {e:?}");
        }
    }

    fn scroll_to_bottom(&self) {
        self.container.set_scroll_top(self.container.scroll_height());
    }
}

/// The `#message-input` text field.
pub struct DomInput(HtmlInputElement);

impl DomInput {
    pub fn new(input: HtmlInputElement) -> Self {
        Self(input)
    }
}

impl InputField for DomInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn clear(&self) {
        self.0.set_value("");
    }
}
