// Dobles de test para los colaboradores de plataforma

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::ClientError;
use crate::models::Coordinates;
use crate::platform::{
    BackButtonSource, Camera, Geolocation, HttpRequest, HttpResponse, HttpTransport,
    KeyValueStore, MemoryStore, Navigator,
};

/// Store en memoria que puede fallar a demanda
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub fail_removes: Cell<bool>,
}

impl FlakyStore {
    fn check(flag: &Cell<bool>, op: &str) -> Result<(), ClientError> {
        if flag.get() {
            Err(ClientError::Storage(format!("{} failed", op)))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FlakyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError> {
        Self::check(&self.fail_reads, "read")?;
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        Self::check(&self.fail_writes, "write")?;
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), ClientError> {
        Self::check(&self.fail_removes, "remove")?;
        self.inner.remove_item(key)
    }
}

/// Transporte con respuestas programadas; registra cada request
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, String>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses.borrow_mut().push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.requests.borrow_mut().push(request);
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ClientError::Network(message)),
            None => Err(ClientError::Network("no scripted response".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    Goto { path: String, replace_state: bool },
    Alert(String),
    Exit,
}

#[derive(Default)]
pub struct MockNavigator {
    pub url: RefCell<String>,
    events: RefCell<Vec<NavEvent>>,
}

impl MockNavigator {
    pub fn at(url: &str) -> Self {
        Self {
            url: RefCell::new(url.to_string()),
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<NavEvent> {
        self.events.borrow().clone()
    }

    pub fn gotos(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                NavEvent::Goto { path, .. } => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                NavEvent::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Navigator for MockNavigator {
    fn current_url(&self) -> String {
        self.url.borrow().clone()
    }

    fn goto(&self, path: &str, replace_state: bool) {
        self.events.borrow_mut().push(NavEvent::Goto {
            path: path.to_string(),
            replace_state,
        });
    }

    fn alert(&self, message: &str) {
        self.events.borrow_mut().push(NavEvent::Alert(message.to_string()));
    }

    fn exit_app(&self) {
        self.events.borrow_mut().push(NavEvent::Exit);
    }
}

#[derive(Default)]
pub struct MockBackButton {
    handlers: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl MockBackButton {
    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn press(&self) {
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }
}

impl BackButtonSource for MockBackButton {
    fn subscribe(&self, handler: Rc<dyn Fn()>) -> Result<(), ClientError> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}

pub struct FixedCamera {
    pub image: Option<String>,
    pub captures: Cell<usize>,
}

impl FixedCamera {
    pub fn with_image(image: &str) -> Self {
        Self {
            image: Some(image.to_string()),
            captures: Cell::new(0),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            image: None,
            captures: Cell::new(0),
        }
    }
}

impl Camera for FixedCamera {
    async fn capture_base64(&self) -> Result<String, ClientError> {
        self.captures.set(self.captures.get() + 1);
        self.image
            .clone()
            .ok_or_else(|| ClientError::Platform("User cancelled photos app".to_string()))
    }
}

pub struct FixedGeolocation(pub Option<Coordinates>);

impl Geolocation for FixedGeolocation {
    async fn current_position(&self) -> Result<Coordinates, ClientError> {
        self.0
            .ok_or_else(|| ClientError::Platform("Location permission denied".to_string()))
    }
}
