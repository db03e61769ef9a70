/*
This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use crate::CouchFormatter;
use log::Record;
use serde::Serialize;

// The four fields stored for every record. `message` is the rendered message
// text, `level` the uppercase level name, `created` the handling time in
// float seconds, `logger` the record's target.
#[derive(Serialize)]
struct LogDocument<'a> {
    message: String,
    level: &'a str,
    created: f64,
    logger: &'a str,
}

/// `JsonFormatter` provides a `CouchFormatter` that marshals records into the
/// crate's default four-field JSON document (`message`, `level`, `created`,
/// `logger`). This is the formatter used unless another one is supplied to
/// the `CouchDbBuilder`.
#[derive(Default, Debug)]
pub struct JsonFormatter;

impl CouchFormatter for JsonFormatter {
    fn write_record(&self, dst: &mut String, rec: &Record, created: f64) -> std::fmt::Result {
        let doc = LogDocument {
            message: rec.args().to_string(),
            level: rec.level().as_str(),
            created,
            logger: rec.target(),
        };

        let serialized = serde_json::to_string(&doc).map_err(|_| std::fmt::Error)?;
        dst.push_str(&serialized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use serde_json::{json, Value};

    fn format_record(message: &str, level: Level, target: &str, created: f64) -> String {
        let mut out = String::new();
        JsonFormatter
            .write_record(
                &mut out,
                &Record::builder()
                    .args(format_args!("{}", message))
                    .level(level)
                    .target(target)
                    .build(),
                created,
            )
            .expect("formatting into a String cannot fail");
        out
    }

    #[test]
    fn produces_the_four_field_document() {
        let out = format_record("log to couchdb", Level::Info, "process_name", 1396988156.0);
        let parsed: Value = serde_json::from_str(&out).expect("output is valid JSON");

        assert_eq!(
            parsed,
            json!({
                "message": "log to couchdb",
                "level": "INFO",
                "created": 1396988156.0,
                "logger": "process_name",
            })
        );
    }

    #[test]
    fn message_text_is_preserved_verbatim() {
        let out = format_record("100% of \"quoted\" text\nand newlines", Level::Warn, "t", 1.5);
        let parsed: Value = serde_json::from_str(&out).expect("output is valid JSON");

        assert_eq!(parsed["message"], "100% of \"quoted\" text\nand newlines");
        assert_eq!(parsed["level"], "WARN");
    }

    #[test]
    fn timestamp_is_carried_unmodified() {
        let out = format_record("m", Level::Error, "t", 1396988156.25);
        let parsed: Value = serde_json::from_str(&out).expect("output is valid JSON");

        assert_eq!(parsed["created"].as_f64(), Some(1396988156.25));
    }
}
