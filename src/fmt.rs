/*
This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use log::Record;

/// `CouchFormatter` implementations marshal a log record to the document
/// string stored in CouchDB. This trait can be implemented to customize the
/// shape of the stored documents; implementations must produce one JSON
/// document per record. By default, this crate's `JsonFormatter` is used.
///
/// `created` is the moment the record was handled, in seconds since the Unix
/// epoch.
pub trait CouchFormatter: Send + Sync {
    fn write_record(&self, dst: &mut String, rec: &Record, created: f64) -> std::fmt::Result;
}
