use chrono::Local;
use tracing::info;

use lockdown_archive::{
    items::entry::Entry,
    util::dates::{format, get_local_time},
};

use crate::{
    app::{error::RuntimeError, qr_code::data_uri, runtime::Config, sanitizers::sanitize_html},
    exporters::exporter::{Exporter, Writer},
};

const TITLE: &str = "Lockdown TOTP secrets export";
const HEADER: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">";
const FOOTER: &str = "</body>\n</html>\n";
const STYLE: &str = include_str!("resources/style.css");

/// Rendered in place of `true`
const YES: &str = "&#x2705;";
/// Rendered in place of `false`
const NO: &str = "&#x274C;";

pub struct HTML<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
}

impl<'a> Exporter<'a> for HTML<'a> {
    fn new(config: &'a Config) -> Self {
        HTML { config }
    }

    fn export(&mut self, entries: &[Entry]) -> Result<(), RuntimeError> {
        info!(
            entries = entries.len(),
            destination = %self.config.destination(),
            "exporting as html"
        );

        // Every QR code is built before the destination is opened
        let document = self.render(entries)?;
        HTML::write_document(self.config, &document)
    }
}

impl<'a> Writer<String> for HTML<'a> {
    fn format_entry(&self, entry: &Entry) -> Result<String, RuntimeError> {
        let mut formatted = String::from("<div class=\"entry\">\n");

        formatted.push_str("<h2>");
        formatted.push_str(&sanitize_html(&entry.service));
        if !entry.login.is_empty() {
            formatted.push_str(" (");
            formatted.push_str(&sanitize_html(&entry.login));
            formatted.push(')');
        }
        formatted.push_str("</h2>\n");

        formatted.push_str("<table>\n");
        self.add_row(&mut formatted, "Service", &sanitize_html(&entry.service));
        self.add_row(&mut formatted, "Login", &sanitize_html(&entry.login));
        self.add_row(
            &mut formatted,
            "Created",
            &format(&get_local_time(&entry.created)),
        );
        self.add_row(
            &mut formatted,
            "Modified",
            &format(&get_local_time(&entry.modified)),
        );
        self.add_row(
            &mut formatted,
            "URL",
            &format!("<code>{}</code>", sanitize_html(&entry.url)),
        );
        self.add_row(&mut formatted, "Favorite", self.checkmark(entry.favorite));
        self.add_row(&mut formatted, "Archived", self.checkmark(entry.archived));
        formatted.push_str("</table>\n");

        formatted.push_str(&format!(
            "<img class=\"qr\" src=\"{}\" alt=\"{}\">\n",
            data_uri(&entry.url)?,
            sanitize_html(&entry.url)
        ));

        formatted.push_str("</div>\n");
        Ok(formatted)
    }
}

impl<'a> HTML<'a> {
    fn add_row(&self, string: &mut String, label: &str, value: &str) {
        string.push_str("<tr><th>");
        string.push_str(label);
        string.push_str("</th><td>");
        string.push_str(value);
        string.push_str("</td></tr>\n");
    }

    fn checkmark(&self, value: bool) -> &'static str {
        if value {
            YES
        } else {
            NO
        }
    }

    fn write_headers(&self, document: &mut String) {
        document.push_str(HEADER);
        document.push_str(&format!("\n<title>{TITLE}</title>\n"));

        document.push_str("<style>\n");
        document.push_str(STYLE);
        document.push_str("\n</style>");
        document.push_str("\n</head>\n<body>\n");

        document.push_str(&format!("<h1>{TITLE}</h1>\n"));
        document.push_str(&format!(
            "<p class=\"generated\">Generated on {}</p>\n",
            format(&Local::now())
        ));
    }

    /// Build the whole document
    fn render(&self, entries: &[Entry]) -> Result<String, RuntimeError> {
        let mut document = String::new();
        self.write_headers(&mut document);
        for entry in entries {
            document.push_str(&self.format_entry(entry)?);
        }
        document.push_str(FOOTER);
        Ok(document)
    }
}
