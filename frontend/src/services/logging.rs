use log::Level;

/// Console logging for the dashboard, tagged by component.
pub struct Logger;

impl Logger {
    /// Routes `log` records to the browser console and panics to
    /// `console.error`. Safe to call more than once.
    pub fn init() {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
        if console_log::init_with_level(level).is_err() {
            log::debug!("console logger already installed");
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!("[{}] {}", component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!("[{}] {}", component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!("[{}] {}", component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!("[{}] {}", component, message);
    }
}
