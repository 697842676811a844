/// Host bridge: the only code that talks to `window`

use crate::links::GenerationError;
use crate::storage::ThemePreference;
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("no browser window available")]
    NoWindow,

    #[error("local storage unavailable")]
    NoStorage,

    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(format!("{:?}", value))
    }
}

/// Something that can open a URL in a new tab
pub trait TabOpener {
    fn open_in_new_tab(&mut self, url: &str) -> Result<(), HostError>;
}

/// Opens tabs through `window.open`
#[derive(Debug, Default)]
pub struct WindowTabOpener;

impl TabOpener for WindowTabOpener {
    fn open_in_new_tab(&mut self, url: &str) -> Result<(), HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        // noopener makes window.open return null, so a blocked popup is not detectable here
        window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")?;
        Ok(())
    }
}

/// Tally of one "open selected" action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenReport {
    pub opened: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Open every generated link, in order, skipping broken tools
///
/// Every open is issued immediately and synchronously. Browsers only allow
/// several popups while still inside the originating click handler, so this
/// must never be moved behind a timer or future.
pub fn open_all<O>(opener: &mut O, outcomes: &[Result<String, GenerationError>]) -> OpenReport
where
    O: TabOpener + ?Sized,
{
    let mut report = OpenReport::default();

    for outcome in outcomes {
        match outcome {
            Ok(url) => match opener.open_in_new_tab(url) {
                Ok(()) => report.opened += 1,
                Err(e) => {
                    log::warn!("Failed to open {}: {}", url, e);
                    report.failed += 1;
                }
            },
            Err(e) => {
                log::debug!("Skipping unavailable tool '{}'", e.tool_id());
                report.skipped += 1;
            }
        }
    }

    log::debug!(
        "Opened {} tabs ({} skipped, {} failed)",
        report.opened,
        report.skipped,
        report.failed
    );

    report
}

fn local_storage() -> Result<web_sys::Storage, HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    window.local_storage()?.ok_or(HostError::NoStorage)
}

/// Read a key from localStorage. Failures are logged and read as absent.
pub fn read_storage(key: &str) -> Option<String> {
    match local_storage().and_then(|storage| storage.get_item(key).map_err(HostError::from)) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to read '{}' from storage: {}", key, e);
            None
        }
    }
}

pub fn write_storage(key: &str, value: &str) -> Result<(), HostError> {
    local_storage()?.set_item(key, value)?;
    Ok(())
}

/// Run `f` once after `ms` milliseconds
pub fn set_timeout<F>(ms: i32, f: F) -> Result<(), HostError>
where
    F: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)?;
    Ok(())
}

pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |query| query.matches())
}

/// Set `data-theme` on the root element to the concrete theme
pub fn apply_theme(theme: ThemePreference) -> Result<(), HostError> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or(HostError::NoWindow)?;

    let effective = theme.effective(prefers_dark());
    root.set_attribute("data-theme", effective.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Vec<String>,
        fail_on: Option<String>,
    }

    impl TabOpener for RecordingOpener {
        fn open_in_new_tab(&mut self, url: &str) -> Result<(), HostError> {
            if self.fail_on.as_deref() == Some(url) {
                return Err(HostError::Js("blocked".to_string()));
            }
            self.opened.push(url.to_string());
            Ok(())
        }
    }

    fn broken(tool_id: &str) -> Result<String, GenerationError> {
        Err(GenerationError::MissingPlaceholder {
            tool_id: tool_id.to_string(),
        })
    }

    #[test]
    fn test_open_all_in_order_skipping_failures() {
        let outcomes = vec![
            Ok("https://a.test/example.com".to_string()),
            broken("b"),
            Ok("https://c.test/example.com".to_string()),
        ];
        let mut opener = RecordingOpener::default();

        let report = open_all(&mut opener, &outcomes);

        assert_eq!(
            opener.opened,
            vec!["https://a.test/example.com", "https://c.test/example.com"]
        );
        assert_eq!(
            report,
            OpenReport {
                opened: 2,
                skipped: 1,
                failed: 0
            }
        );
    }

    #[test]
    fn test_open_all_continues_after_host_failure() {
        let outcomes = vec![
            Ok("https://a.test/".to_string()),
            Ok("https://b.test/".to_string()),
            Ok("https://c.test/".to_string()),
        ];
        let mut opener = RecordingOpener {
            fail_on: Some("https://b.test/".to_string()),
            ..Default::default()
        };

        let report = open_all(&mut opener, &outcomes);

        assert_eq!(opener.opened, vec!["https://a.test/", "https://c.test/"]);
        assert_eq!(report.opened, 2);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_open_all_empty() {
        let mut opener = RecordingOpener::default();
        let report = open_all(&mut opener, &[]);

        assert_eq!(report, OpenReport::default());
        assert!(opener.opened.is_empty());
    }
}
