use std::rc::Rc;

use chat_widget::{ChatError, ChatOutcome, ChatWidget, WidgetConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::api::FetchTransport;
use crate::dom::{DomInput, DomMessageLog};

type PageWidget = ChatWidget<DomMessageLog, DomInput, FetchTransport>;

/// Binds the widget to the chat elements already on the page and starts
/// listening for submissions.
pub fn mount() -> Result<(), ChatError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ChatError::MissingDocument)?;

    let defaults = WidgetConfig::default();
    let form: HtmlFormElement = element_by_id(&document, &defaults.form_id, "form")?;
    let config = WidgetConfig::from_lookup(|key| form.get_attribute(&format!("data-{key}")));

    let input: HtmlInputElement = element_by_id(&document, &config.input_id, "text input")?;
    let container: HtmlElement = element_by_id(&document, &config.log_id, "HTML element")?;

    let transport = FetchTransport::new(&config);
    let widget: Rc<PageWidget> = Rc::new(ChatWidget::new(
        DomMessageLog::new(document, container),
        DomInput::new(input),
        transport,
        config,
    ));

    let on_submit = Closure::<dyn Fn(Event)>::new(move |ev: Event| {
        ev.prevent_default();
        let Some(pending) = widget.submit() else {
            return;
        };
        let widget = widget.clone();
        spawn_local(async move {
            if let ChatOutcome::Answered { seq, content } = widget.deliver(pending).await {
                log::debug!("Reply #{seq} rendered ({} chars)", content.len());
            }
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|e| ChatError::Listener { message: format!("{e:?}") })?;
    // The listener lives as long as the page.
    on_submit.forget();

    log::info!("Chat widget mounted on #{}", defaults.form_id);
    Ok(())
}

fn element_by_id<E: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<E, ChatError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ChatError::MissingElement { id: id.to_string() })?
        .dyn_into::<E>()
        .map_err(|_| ChatError::WrongElementType { id: id.to_string(), expected })
}
