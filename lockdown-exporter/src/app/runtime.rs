use std::{
    fs::{create_dir_all, File},
    io::{stdout, Write},
};

use tracing::info;

use lockdown_archive::{
    archive::{container::Container, KeyedArchive},
    items::entry::Entry,
};

use crate::{
    app::{error::RuntimeError, export_type::ExportType, options::Options},
    exporters::{exporter::Exporter, html::HTML, json::JSON},
};

/// Stores the application state and handles application lifecycle
pub struct Config {
    /// App configuration options
    pub options: Options,
    /// The decoded keyed archive, owned for the whole run
    pub archive: KeyedArchive,
}

impl Config {
    /// Read the preferences file and decode its nested archive
    pub fn new(options: Options) -> Result<Config, RuntimeError> {
        info!(
            path = %options.container_path.display(),
            "reading Lockdown preferences"
        );
        let archive = Container::from_path(&options.container_path)
            .and_then(|container| container.archive())
            .map_err(RuntimeError::ArchiveError)?;
        Ok(Config { options, archive })
    }

    /// Decode the items to export, honoring `--include-archived`
    pub fn entries(&self) -> Result<Vec<Entry>, RuntimeError> {
        Ok(self.archive.entries(self.options.include_archived)?)
    }

    /// Open the export destination: the export path if one was given, otherwise stdout
    pub fn output(&self) -> Result<Box<dyn Write>, RuntimeError> {
        match &self.options.export_path {
            Some(path) => {
                if let Some(folder) = path.parent() {
                    if !folder.as_os_str().is_empty() && !folder.exists() {
                        create_dir_all(folder)
                            .map_err(|why| RuntimeError::CreateError(why, folder.to_path_buf()))?;
                    }
                }
                let file = File::create(path)
                    .map_err(|why| RuntimeError::CreateError(why, path.clone()))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(stdout())),
        }
    }

    /// Describe where the export goes, for log messages
    pub fn destination(&self) -> String {
        match &self.options.export_path {
            Some(path) => path.display().to_string(),
            None => "stdout".to_string(),
        }
    }

    /// Build the text printed by `--diagnostics`
    pub fn diagnostic_report(&self) -> Result<String, RuntimeError> {
        let summary = self.archive.summarize()?;
        let archiver = self.archive.archiver().unwrap_or("unknown");
        let version = self
            .archive
            .version()
            .map(|version| version.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        Ok(format!(
            "Lockdown Archive Diagnostics\n\
             \n\
             Container: {}\n\
             Archiver: {archiver} (version {version})\n\
             Objects: {}\n\
             Items: {}\n\
             \x20   Archived: {}\n\
             \x20   Favorites: {}\n\
             \x20   Stored URIs: {}\n\
             \x20   Rebuilt from secrets: {}\n",
            self.options.container_path.display(),
            summary.objects,
            summary.items,
            summary.archived,
            summary.favorites,
            summary.passthrough,
            summary.synthesized,
        ))
    }

    /// Print diagnostic data about the archive
    pub fn run_diagnostic(&self) -> Result<(), RuntimeError> {
        let report = self.diagnostic_report()?;
        let mut out = stdout();
        out.write_all(report.as_bytes())
            .and_then(|()| out.flush())
            .map_err(RuntimeError::DiskError)
    }

    /// Handles diagnostic or export functionality based on the user's options
    pub fn start(&self) -> Result<(), RuntimeError> {
        if self.options.diagnostic {
            return self.run_diagnostic();
        }

        // Decode everything before opening the output so a bad item never leaves a partial export behind
        let entries = self.entries()?;
        match self.options.export_type {
            ExportType::Json => JSON::new(self).export(&entries),
            ExportType::Html => HTML::new(self).export(&entries),
        }
    }
}
