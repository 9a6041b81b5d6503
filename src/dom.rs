//! DOM Binding
//!
//! Resolves the configured elements once, implements `PageSurface` over
//! them and hooks their events to the controller.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::api::HttpRecordsApi;
use crate::components::RecordTable;
use crate::config::PageConfig;
use crate::controller::{PageController, PageSurface, StatusTone};
use crate::error::{js_error_message, ApiError, UiError};
use crate::i18n::Labels;
use crate::models::{NewRecord, RECORD_FIELDS};
use crate::table::TableState;

type DomController = PageController<HttpRecordsApi, DomSurface>;

struct FormBinding {
    form: HtmlFormElement,
    /// Inputs keyed by their `RECORD_FIELDS` id
    fields: Vec<(&'static str, Element)>,
    status: Option<HtmlElement>,
}

/// Resolved page elements
pub struct DomSurface {
    table_wrap: HtmlElement,
    search: Element,
    filter: Element,
    refresh: Element,
    form: Option<FormBinding>,
    labels: &'static Labels,
    /// Set on first render, when the table view gets mounted
    table: RefCell<Option<ArcRwSignal<TableState>>>,
}

impl DomSurface {
    pub fn resolve(document: &Document, config: &PageConfig) -> Result<Self, UiError> {
        let table_wrap = cast::<HtmlElement>(
            by_id(document, &config.table_wrap)?,
            &config.table_wrap,
            "HTML element",
        )?;
        let search = control(document, &config.search)?;
        let filter = control(document, &config.filter)?;
        let refresh = by_id(document, &config.refresh)?;

        let form = match &config.write {
            Some(targets) => {
                let form = cast::<HtmlFormElement>(
                    by_id(document, &targets.form)?,
                    &targets.form,
                    "form",
                )?;
                let fields = RECORD_FIELDS
                    .iter()
                    .map(|&id| control(document, id).map(|el| (id, el)))
                    .collect::<Result<Vec<_>, _>>()?;
                let status = match &targets.status {
                    Some(id) => {
                        Some(cast::<HtmlElement>(by_id(document, id)?, id, "HTML element")?)
                    }
                    None => None,
                };
                Some(FormBinding { form, fields, status })
            }
            None => None,
        };

        Ok(Self {
            table_wrap,
            search,
            filter,
            refresh,
            form,
            labels: config.locale.labels(),
            table: RefCell::new(None),
        })
    }

    fn mount_table(&self, state: TableState) -> ArcRwSignal<TableState> {
        let signal = ArcRwSignal::new(state);
        let view_signal = signal.clone();
        let labels = self.labels;
        self.table_wrap.set_inner_html("");
        leptos::mount::mount_to(self.table_wrap.clone(), move || {
            view! { <RecordTable state=view_signal labels=labels /> }
        })
        .forget();
        signal
    }
}

impl PageSurface for DomSurface {
    fn search_text(&self) -> Option<String> {
        Some(control_value(&self.search))
    }

    fn filter_value(&self) -> Option<String> {
        Some(control_value(&self.filter))
    }

    fn render(&self, state: TableState) {
        let mut table = self.table.borrow_mut();
        if let Some(signal) = table.as_ref() {
            signal.set(state);
            return;
        }
        *table = Some(self.mount_table(state));
    }

    fn form_values(&self) -> NewRecord {
        let Some(binding) = &self.form else {
            return NewRecord::default();
        };
        NewRecord::from_fn(|name| {
            binding
                .fields
                .iter()
                .find(|(id, _)| *id == name)
                .map(|(_, el)| control_value(el))
                .unwrap_or_default()
        })
    }

    fn reset_form(&self) {
        if let Some(binding) = &self.form {
            binding.form.reset();
        }
    }

    fn show_status(&self, text: &str, tone: StatusTone) {
        let Some(status) = self.form.as_ref().and_then(|b| b.status.as_ref()) else {
            return;
        };
        status.set_text_content(Some(text));
        if let Err(err) = status.style().set_property("color", tone.color()) {
            log::warn!("Could not color status line: {}", js_error_message(&err));
        }
    }
}

/// Bind one page: resolve elements, attach listeners, run the first load
pub fn bind_page(config: &PageConfig) -> Result<(), UiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ApiError::NoWindow)?;
    let surface = DomSurface::resolve(&document, config)?;
    let api = HttpRecordsApi::new(config.endpoint.clone());
    let controller = Rc::new(PageController::new(
        api,
        surface,
        config.locale.labels(),
        config.write.is_some(),
    ));

    let surface = controller.surface();
    listen(&surface.search, "input", reload_on(&controller))?;
    listen(&surface.filter, "change", reload_on(&controller))?;
    listen(&surface.refresh, "click", reload_on(&controller))?;

    if let Some(binding) = surface.form.as_ref().filter(|_| controller.is_writable()) {
        let submitting = controller.clone();
        listen(&binding.form, "submit", move |ev: Event| {
            ev.prevent_default();
            let controller = submitting.clone();
            spawn_local(async move {
                match controller.submit().await {
                    Ok(outcome) => log::debug!("Submit finished, saved={}", outcome.saved),
                    Err(err) => log::error!("Saving record failed: {}", err),
                }
            });
        })?;
    }

    log::info!("Bound {:?} page against {}", config.scope, config.endpoint);
    spawn_load(controller);
    Ok(())
}

fn reload_on(controller: &Rc<DomController>) -> impl FnMut(Event) + 'static {
    let controller = controller.clone();
    move |_| spawn_load(controller.clone())
}

fn spawn_load(controller: Rc<DomController>) {
    spawn_local(async move {
        if let Err(err) = controller.load().await {
            log::error!("Loading records failed: {}", err);
        }
    });
}

/// Attach a listener for the lifetime of the page
fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), UiError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| UiError::Listener(event, js_error_message(&e)))?;
    closure.forget();
    Ok(())
}

fn by_id(document: &Document, id: &str) -> Result<Element, UiError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(id.to_string()))
}

fn cast<T: JsCast>(element: Element, id: &str, kind: &'static str) -> Result<T, UiError> {
    element
        .dyn_into::<T>()
        .map_err(|_| UiError::WrongElement(id.to_string(), kind))
}

/// Element that has a `value`: input, select or textarea
fn control(document: &Document, id: &str) -> Result<Element, UiError> {
    let element = by_id(document, id)?;
    let is_control = element.is_instance_of::<HtmlInputElement>()
        || element.is_instance_of::<HtmlSelectElement>()
        || element.is_instance_of::<HtmlTextAreaElement>();
    if is_control {
        Ok(element)
    } else {
        Err(UiError::WrongElement(id.to_string(), "form control"))
    }
}

fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
