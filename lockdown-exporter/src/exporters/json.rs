use json::{from, object, JsonValue};
use tracing::info;

use lockdown_archive::{items::entry::Entry, util::dates::to_rfc3339};

use crate::{
    app::{error::RuntimeError, runtime::Config},
    exporters::exporter::{Exporter, Writer},
};

/// Spaces per indentation level in the exported document
const INDENT: u16 = 4;

pub struct JSON<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
}

impl<'a> Exporter<'a> for JSON<'a> {
    fn new(config: &'a Config) -> Self {
        JSON { config }
    }

    fn export(&mut self, entries: &[Entry]) -> Result<(), RuntimeError> {
        info!(
            entries = entries.len(),
            destination = %self.config.destination(),
            "exporting as json"
        );

        let document = self.render(entries)?;
        JSON::write_document(self.config, &document)
    }
}

impl<'a> Writer<JsonValue> for JSON<'a> {
    fn format_entry(&self, entry: &Entry) -> Result<JsonValue, RuntimeError> {
        let mut json_entry = object! {};
        json_entry["Service"] = from(entry.service.as_str());
        json_entry["Login"] = from(entry.login.as_str());
        json_entry["Created"] = from(to_rfc3339(&entry.created));
        json_entry["Modified"] = from(to_rfc3339(&entry.modified));
        json_entry["URL"] = from(entry.url.as_str());
        json_entry["Favorite"] = from(entry.favorite);
        json_entry["Archived"] = from(entry.archived);
        Ok(json_entry)
    }
}

impl<'a> JSON<'a> {
    /// Build the whole document: a pretty-printed array with one object per entry
    fn render(&self, entries: &[Entry]) -> Result<String, RuntimeError> {
        let json_entries = entries
            .iter()
            .map(|entry| self.format_entry(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let mut document = JsonValue::Array(json_entries).pretty(INDENT);
        document.push('\n');
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use json::JsonValue;

    use lockdown_archive::{items::entry::Entry, util::dates::from_rfc3339};

    use crate::{
        app::runtime::tests::{fake_config, fake_options},
        exporters::{
            exporter::{Exporter, Writer},
            json::JSON,
        },
    };

    fn blank() -> Entry {
        Entry {
            service: "GitHub".to_string(),
            login: "octocat".to_string(),
            created: Utc.timestamp_opt(1_623_000_000, 0).unwrap(),
            modified: Utc.timestamp_opt(1_623_000_100, 500_000_000).unwrap(),
            url: "otpauth://totp/GitHub:octocat?secret=ABC&issuer=GitHub".to_string(),
            favorite: true,
            archived: false,
        }
    }

    /// Read one exported object back into an [`Entry`]
    fn entry_from_json(value: &JsonValue) -> Option<Entry> {
        Some(Entry {
            service: value["Service"].as_str()?.to_string(),
            login: value["Login"].as_str()?.to_string(),
            created: from_rfc3339(value["Created"].as_str()?)?,
            modified: from_rfc3339(value["Modified"].as_str()?)?,
            url: value["URL"].as_str()?.to_string(),
            favorite: value["Favorite"].as_bool()?,
            archived: value["Archived"].as_bool()?,
        })
    }

    fn parse_document(document: &str) -> Vec<Entry> {
        json::parse(document)
            .unwrap()
            .members()
            .map(|member| entry_from_json(member).unwrap())
            .collect()
    }

    #[test]
    fn can_format_entry() {
        let config = fake_config(fake_options());
        let exporter = JSON::new(&config);

        let formatted = exporter.format_entry(&blank()).unwrap();
        assert_eq!(formatted["Service"], "GitHub");
        assert_eq!(formatted["Login"], "octocat");
        assert_eq!(formatted["Created"], "2021-06-06T17:20:00Z");
        assert_eq!(formatted["Modified"], "2021-06-06T17:21:40.500Z");
        assert_eq!(
            formatted["URL"],
            "otpauth://totp/GitHub:octocat?secret=ABC&issuer=GitHub"
        );
        assert_eq!(formatted["Favorite"], true);
        assert_eq!(formatted["Archived"], false);
    }

    #[test]
    fn can_format_entry_keys_in_order() {
        let config = fake_config(fake_options());
        let exporter = JSON::new(&config);

        let formatted = exporter.format_entry(&blank()).unwrap();
        let keys: Vec<&str> = formatted.entries().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                "Service", "Login", "Created", "Modified", "URL", "Favorite", "Archived"
            ]
        );
    }

    #[test]
    fn can_render_pretty_document() {
        let config = fake_config(fake_options());
        let exporter = JSON::new(&config);

        let document = exporter.render(&[blank()]).unwrap();
        assert!(document.starts_with("[\n    {\n        \"Service\": \"GitHub\",\n"));
        assert!(document.ends_with("]\n"));
    }

    #[test]
    fn can_render_empty_document() {
        let config = fake_config(fake_options());
        let exporter = JSON::new(&config);

        assert_eq!(exporter.render(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn can_render_unicode_and_quotes() {
        let config = fake_config(fake_options());
        let exporter = JSON::new(&config);

        let mut entry = blank();
        entry.service = "Bäckerei \"Süß\"".to_string();
        entry.login = String::new();

        let document = exporter.render(&[entry.clone()]).unwrap();
        assert_eq!(parse_document(&document), vec![entry]);
    }

    #[test]
    fn can_read_back_fixture_export() {
        let mut options = fake_options();
        options.include_archived = true;
        let config = fake_config(options);
        let exporter = JSON::new(&config);

        let entries = config.entries().unwrap();
        let document = exporter.render(&entries).unwrap();
        assert_eq!(parse_document(&document), entries);
    }
}
