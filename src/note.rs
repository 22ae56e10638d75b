// ABOUTME: Local handle for one remote note with pull (refresh) and push (publish)
// ABOUTME: Fields change only after a complete successful round trip

use crate::config::ClientConfig;
use crate::model::{ReadRequest, ReadResponse, WriteRequest, WriteResponse};
use crate::transport::Method;
use crate::{Error, Result};
use std::fmt;
use std::sync::Arc;

pub const READ_ROUTE: &str = "/read";
pub const CREATE_ROUTE: &str = "/create";
pub const UPDATE_ROUTE: &str = "/update/note";

/// Whether a handle has ever been matched with a record on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpstreamState {
    #[default]
    New,
    Upstream,
}

#[derive(Clone)]
pub struct Note {
    config: Arc<ClientConfig>,
    id: String,
    password: String,
    data: String,
    state: UpstreamState,
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("endpoint", &self.config.endpoint())
            .field("id", &self.id)
            .field("password", &"<redacted>")
            .field("data_len", &self.data.len())
            .field("state", &self.state)
            .finish()
    }
}

impl TryFrom<Option<Arc<ClientConfig>>> for Note {
    type Error = Error;

    fn try_from(config: Option<Arc<ClientConfig>>) -> Result<Self> {
        config
            .map(Note::new)
            .ok_or_else(|| Error::Validation("client config is required".into()))
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

impl Note {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Note {
            config,
            id: String::new(),
            password: String::new(),
            data: String::new(),
            state: UpstreamState::New,
        }
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        require("id", &id)?;
        self.id = id;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_data(&mut self, data: impl Into<String>) -> Result<()> {
        let data = data.into();
        require("data", &data)?;
        self.data = data;
        Ok(())
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> Result<()> {
        let password = password.into();
        require("password", &password)?;
        self.password = password;
        Ok(())
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn state(&self) -> UpstreamState {
        self.state
    }

    pub fn is_upstream(&self) -> bool {
        self.state == UpstreamState::Upstream
    }

    /// Pulls the current note from `GET /read` into `data`.
    ///
    /// The server's echoed id is ignored; only [`Note::publish`] adopts it.
    pub fn refresh(&mut self) -> Result<()> {
        if self.id.is_empty() || self.password.is_empty() {
            return Err(Error::Validation("id or password is empty".into()));
        }

        let request = ReadRequest {
            id: self.id.clone(),
            pass: self.password.clone(),
        };
        let response: ReadResponse = self.config.exchange(Method::Get, READ_ROUTE, &request)?;

        self.data = response.note;
        self.state = UpstreamState::Upstream;
        log::info!("refreshed note {}", self.id);
        Ok(())
    }

    /// Pushes `data` upstream, creating the record on first publish and
    /// updating it afterwards. The server-returned id always replaces `id`.
    pub fn publish(&mut self) -> Result<()> {
        if self.password.is_empty() || self.data.is_empty() {
            return Err(Error::Validation("password or data is empty".into()));
        }

        let (method, route) = match self.state {
            UpstreamState::New => (Method::Post, CREATE_ROUTE),
            UpstreamState::Upstream => (Method::Put, UPDATE_ROUTE),
        };

        let request = WriteRequest {
            id: self.id.clone(),
            pass: self.password.clone(),
            note: self.data.clone(),
        };
        let response: WriteResponse = self.config.exchange(method, route, &request)?;

        if response.id != self.id {
            log::debug!("server assigned id {:?} (was {:?})", response.id, self.id);
        }
        self.id = response.id;
        self.state = UpstreamState::Upstream;
        log::info!("published note {} via {}", self.id, route);
        Ok(())
    }
}
