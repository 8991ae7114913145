use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure to install a controller. Handlers themselves never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("failed to register `{event}` listener: {message}")]
    Listener { event: String, message: String },
}

impl InitError {
    pub(crate) fn listener(event: &str, err: JsValue) -> Self {
        InitError::Listener {
            event: event.to_string(),
            message: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        }
    }
}

impl From<InitError> for JsValue {
    fn from(err: InitError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(InitError::NoWindow.to_string(), "no global `window` available");
        let err = InitError::Listener {
            event: "click".to_string(),
            message: "denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to register `click` listener: denied"
        );
    }
}
