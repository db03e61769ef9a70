/*
This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use thiserror::Error;

/// Errors that may arise while talking to CouchDB.
#[derive(Debug, Error)]
pub enum Error {
    /// CouchDB answered with a 4xx or 5xx status. Carries the raw body text
    /// of the error response.
    #[error("couchdb returned HTTP {status}: {body}")]
    Remote { status: u16, body: String },
    /// The request never produced a response (DNS, connect, or IO failure).
    #[error("couchdb transport failure: {0}")]
    Transport(Box<ureq::Transport>),
    /// The configured host, port, and database do not form a valid URL.
    #[error("invalid couchdb endpoint: {0}")]
    Url(#[from] url::ParseError),
}
