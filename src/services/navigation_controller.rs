// ============================================================================
// NAVIGATION CONTROLLER - Botón atrás del hardware
// ============================================================================
// Cada página guarda su fallback en sessionStorage; un único listener global
// decide entre volver al fallback o cerrar la app en las páginas raíz.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::error::ClientError;
use crate::platform::{BackButtonSource, KeyValueStore, Navigator};
use crate::utils::{FALLBACK_PAGE_KEY, HOME_ROUTE};

#[derive(Debug, Clone, PartialEq)]
pub enum BackAction {
    Navigated(String),
    Exited,
}

pub struct NavigationController {
    session: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
    root_urls: Vec<String>,
    // Flag para prevenir múltiples registros del listener
    installed: Cell<bool>,
}

impl NavigationController {
    pub fn new(
        session: Rc<dyn KeyValueStore>,
        navigator: Rc<dyn Navigator>,
        root_urls: Vec<String>,
    ) -> Self {
        Self {
            session,
            navigator,
            root_urls,
            installed: Cell::new(false),
        }
    }

    /// Registra el listener del botón atrás; solo la primera llamada tiene efecto
    pub fn install(self: &Rc<Self>, source: &dyn BackButtonSource) -> Result<(), ClientError> {
        if self.installed.get() {
            log::warn!("⚠️ NavigationController: install ya fue llamado, ignorando llamada duplicada");
            return Ok(());
        }

        let controller = Rc::clone(self);
        source.subscribe(Rc::new(move || {
            controller.handle_back();
        }))?;
        self.installed.set(true);

        log::info!("✅ NavigationController: listener registrado (solo una vez)");
        Ok(())
    }

    pub fn is_installed(&self) -> bool {
        self.installed.get()
    }

    /// Guarda la página a la que vuelve el botón atrás
    pub fn visit(&self, fallback_url: &str) {
        if let Err(e) = self.session.set_item(FALLBACK_PAGE_KEY, fallback_url) {
            log::error!("❌ No se pudo guardar la página de fallback: {}", e);
        }
    }

    pub fn fallback_page(&self) -> Option<String> {
        self.session.get_item(FALLBACK_PAGE_KEY).ok().flatten()
    }

    pub fn handle_back(&self) -> BackAction {
        let current = self.navigator.current_url();
        if self.root_urls.iter().any(|root| *root == current) {
            log::info!("👋 Botón atrás en página raíz, cerrando app");
            self.navigator.exit_app();
            return BackAction::Exited;
        }

        // Sin fallback guardado se vuelve a /home
        let target = self
            .fallback_page()
            .unwrap_or_else(|| HOME_ROUTE.to_string());
        self.navigator.goto(&target, true);
        BackAction::Navigated(target)
    }
}
