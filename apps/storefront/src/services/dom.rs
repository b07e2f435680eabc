//! DOM host for third-party widgets.

use leptos::prelude::{LocalStorage, StoredValue};
use mason_core::widget::{WidgetError, WidgetHost, WidgetRegistry};
use wasm_bindgen::{JsCast, JsValue};

/// App-wide widget registry, provided as context.
pub type DomWidgets = StoredValue<WidgetRegistry<DomWidgetHost>, LocalStorage>;

/// Mounts widgets into the current document.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomWidgetHost;

fn host_err(e: JsValue) -> WidgetError {
    WidgetError::Host(format!("{e:?}"))
}

fn window() -> Result<web_sys::Window, WidgetError> {
    web_sys::window().ok_or_else(|| WidgetError::Host("no window".to_string()))
}

fn document() -> Result<web_sys::Document, WidgetError> {
    window()?
        .document()
        .ok_or_else(|| WidgetError::Host("no document".to_string()))
}

impl WidgetHost for DomWidgetHost {
    fn set_global(&self, name: &str, value: &str) -> Result<(), WidgetError> {
        // JSON literals become real values; anything else stays a string.
        let value = js_sys::JSON::parse(value).unwrap_or_else(|_| JsValue::from_str(value));
        js_sys::Reflect::set(&window()?, &JsValue::from_str(name), &value)
            .map(|_| ())
            .map_err(host_err)
    }

    fn clear_global(&self, name: &str) -> Result<(), WidgetError> {
        let target: js_sys::Object = window()?.into();
        js_sys::Reflect::delete_property(&target, &JsValue::from_str(name))
            .map(|_| ())
            .map_err(host_err)
    }

    fn inject_script(&self, element_id: &str, src: &str) -> Result<(), WidgetError> {
        let doc = document()?;
        let script = doc
            .create_element("script")
            .map_err(host_err)?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| WidgetError::Host("script element cast failed".to_string()))?;
        script.set_id(element_id);
        script.set_src(src);
        script.set_async(true);

        let body = doc
            .body()
            .ok_or_else(|| WidgetError::Host("no document body".to_string()))?;
        body.append_child(&script).map(|_| ()).map_err(host_err)
    }

    fn remove_script(&self, element_id: &str) -> Result<(), WidgetError> {
        if let Some(el) = document()?.get_element_by_id(element_id) {
            el.remove();
        }
        Ok(())
    }
}
