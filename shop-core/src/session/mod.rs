//! Session Lifecycle
//!
//! One `ShopSession` per signed-in shopper. Signing in installs the bearer
//! token and activates every registered synchronizer; signing out tears them
//! down synchronously without any network traffic.

mod auth;
mod token;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::watch;

use crate::api::ApiClient;
use crate::error::TokenError;

pub use auth::AuthSignal;
pub use token::{decode_claims, Claims};

#[cfg(test)]
pub(crate) use token::encode_test_token;

/// Session-scoped state that follows authentication transitions
#[async_trait(?Send)]
pub trait AuthAware {
    /// Became authenticated: load from the server
    async fn activate(&self);

    /// Session ended: forget local state, no network
    fn teardown(&self);
}

pub struct ShopSession {
    client: Rc<ApiClient>,
    signal: AuthSignal,
    claims: RefCell<Option<Claims>>,
    members: RefCell<Vec<Rc<dyn AuthAware>>>,
    /// Bumped by every sign-out
    generation: Cell<u64>,
}

impl ShopSession {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self {
            client,
            signal: AuthSignal::new(),
            claims: RefCell::new(None),
            members: RefCell::new(Vec::new()),
            generation: Cell::new(0),
        }
    }

    /// Register state that should follow sign-in and sign-out.
    /// Register before the first `sign_in`.
    pub fn register(&self, member: Rc<dyn AuthAware>) {
        self.members.borrow_mut().push(member);
    }

    pub fn is_authenticated(&self) -> bool {
        self.signal.get()
    }

    pub fn claims(&self) -> Option<Claims> {
        self.claims.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.signal.subscribe()
    }

    /// Start a session from a bearer token issued by the API.
    ///
    /// Members are activated one after another. A sign-out that lands while
    /// an activation is suspended stops the remaining ones and the call
    /// reports `TokenError::Interrupted`.
    pub async fn sign_in(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = decode_claims(token)?;
        if claims.is_expired(Utc::now()) {
            log::warn!("Refusing expired token for {}", claims.sub);
            return Err(TokenError::Expired);
        }

        self.client.set_token(token.trim());
        *self.claims.borrow_mut() = Some(claims.clone());
        if self.signal.set(true) {
            log::info!("Signed in as {}", claims.sub);
        }

        let generation = self.generation.get();
        let members = self.members.borrow().clone();
        for member in members {
            if self.generation.get() != generation {
                break;
            }
            member.activate().await;
        }
        if self.generation.get() != generation {
            log::debug!("Sign-in of {} cut short by sign-out", claims.sub);
            return Err(TokenError::Interrupted);
        }
        Ok(claims)
    }

    pub fn sign_out(&self) {
        self.generation.set(self.generation.get() + 1);
        self.client.clear_token();
        self.claims.borrow_mut().take();
        if self.signal.set(false) {
            log::info!("Signed out");
        }
        for member in self.members.borrow().iter() {
            member.teardown();
        }
    }
}
