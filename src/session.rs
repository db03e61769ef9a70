/*
This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use crate::Error;
#[cfg(feature = "tls")]
use rustls::ClientConfig;
use std::collections::HashMap;
#[cfg(feature = "tls")]
use std::sync::Arc;
use ureq::{Agent, AgentBuilder, Request, Response};

/// `CouchSession` wraps a ureq `Agent`. It applies a fixed set of headers to
/// every outgoing request and turns any 4xx/5xx response into
/// [`Error::Remote`] carrying the response body text. Each call is a single
/// attempt; there are no retries. The session holds no mutable state and may
/// be shared across threads.
pub struct CouchSession {
    agent: Agent,
    headers: HashMap<String, String>,
}

impl CouchSession {
    /// Construct a session that sends `headers` with every request. No
    /// request timeout is configured beyond ureq's defaults.
    pub fn new(
        headers: HashMap<String, String>,
        #[cfg(feature = "tls")] tls_config: Option<Arc<ClientConfig>>,
    ) -> CouchSession {
        #[allow(unused_mut)]
        let mut agent_builder = AgentBuilder::new();

        #[cfg(feature = "tls")]
        if let Some(tls_config) = tls_config {
            agent_builder = agent_builder.tls_config(tls_config);
        }

        CouchSession {
            agent: agent_builder.build(),
            headers,
        }
    }

    pub fn get(&self, url: &str) -> Result<Response, Error> {
        finish(self.with_fixed(self.agent.get(url)).call())
    }

    /// PUT with an empty body, as used for database creation.
    pub fn put(&self, url: &str) -> Result<Response, Error> {
        finish(self.with_fixed(self.agent.put(url)).call())
    }

    /// POST a form-encoded body, as expected by CouchDB's `_session`.
    pub fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Response, Error> {
        finish(self.with_fixed(self.agent.post(url)).send_form(form))
    }

    /// POST a JSON document with `Content-Type: application/json`.
    pub fn post_json(&self, url: &str, body: &str) -> Result<Response, Error> {
        let request = self.agent.post(url).set("Content-Type", "application/json");
        finish(self.with_fixed(request).send_string(body))
    }

    // Fixed headers are merged after the per-call ones, so on key collision
    // the fixed value wins.
    fn with_fixed(&self, mut request: Request) -> Request {
        for (k, v) in &self.headers {
            request = request.set(k, v);
        }
        request
    }
}

// ureq reports any status >= 400 as Error::Status; fold that into Remote so
// callers can match on it, and keep transport failures a distinct kind.
fn finish(result: Result<Response, ureq::Error>) -> Result<Response, Error> {
    match result {
        Ok(response) => Ok(response),
        Err(ureq::Error::Status(status, response)) => Err(Error::Remote {
            status,
            body: response.into_string().unwrap_or_default(),
        }),
        Err(ureq::Error::Transport(t)) => Err(Error::Transport(Box::new(t))),
    }
}
