//! Generate Use Case
//!
//! Orchestrates one run:
//! 1. Resolve directories and create the output directory
//! 2. Discover matching files, sorted by relative path
//! 3. Derive symbols and reject collisions
//! 4. Load each file and write its header
//! 5. Write the manifest
//!
//! Every failure aborts the run. Headers written before the failure are left
//! in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codegen::{write_header, write_manifest};
use crate::domain::{
    find_collision, Asset, AssetEntry, DiscoveredFile, GenerateEvent, GenerateEventSink,
    NoopEventSink,
};
use crate::error::{EmbedError, EmbedResult};
use crate::infrastructure::discovery::{discover, AssetPattern};
use crate::infrastructure::writer::OutputWriter;

use super::options::GenerateOptions;

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub manifest_path: PathBuf,
    /// Assets in manifest order
    pub entries: Vec<AssetEntry>,
}

impl GenerateReport {
    pub fn asset_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.size).sum()
    }
}

/// Run the generator silently.
pub fn generate(options: &GenerateOptions) -> EmbedResult<GenerateReport> {
    generate_with_events(options, &NoopEventSink)
}

/// Run the generator, reporting progress to `events`.
pub fn generate_with_events(
    options: &GenerateOptions,
    events: &dyn GenerateEventSink,
) -> EmbedResult<GenerateReport> {
    let output_dir = absolute(&options.output_dir)?;
    fs::create_dir_all(&output_dir)
        .map_err(|e| EmbedError::path_io("failed to create output dir", &output_dir, e))?;

    let input_dir = absolute(&options.input_dir)?;
    if !input_dir.is_dir() {
        return Err(EmbedError::InputDirNotFound { path: input_dir });
    }

    let pattern = AssetPattern::new(&input_dir, &options.pattern, options.recursive)?;
    events.on_event(GenerateEvent::Started {
        input_dir: input_dir.clone(),
        output_dir: output_dir.clone(),
        pattern: pattern.as_str().to_string(),
        recursive: options.recursive,
    });

    let files = discover(&input_dir, &pattern)?;
    if files.is_empty() {
        return Err(EmbedError::NoMatches {
            pattern: pattern.as_str().to_string(),
            dir: input_dir,
        });
    }
    events.on_event(GenerateEvent::Discovered { count: files.len() });

    check_symbols(&files)?;

    let writer = OutputWriter::new(options.write_mode);
    let mut entries = Vec::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        let asset = load_asset(file)?;
        let header_path = write_header(&writer, &output_dir, &asset)?;
        let entry = asset.into_entry(&header_path);
        if events.wants_detailed_events() {
            events.on_event(GenerateEvent::AssetWritten {
                index,
                entry: entry.clone(),
            });
        }
        entries.push(entry);
    }

    let manifest_path = write_manifest(&writer, &output_dir, &entries)?;
    events.on_event(GenerateEvent::ManifestWritten {
        path: manifest_path.clone(),
        count: entries.len(),
    });

    let report = GenerateReport {
        input_dir,
        output_dir,
        manifest_path,
        entries,
    };
    events.on_event(GenerateEvent::Completed {
        count: report.asset_count(),
        bytes: report.total_bytes(),
        output_dir: report.output_dir.clone(),
    });
    Ok(report)
}

fn absolute(path: &Path) -> EmbedResult<PathBuf> {
    std::path::absolute(path).map_err(|e| EmbedError::path_io("failed to resolve", path, e))
}

/// Reject paths whose headers would overwrite each other or declare the same identifier.
fn check_symbols(files: &[DiscoveredFile]) -> EmbedResult<()> {
    let symbols: Vec<String> = files.iter().map(DiscoveredFile::symbol).collect();
    let pairs = files
        .iter()
        .zip(&symbols)
        .map(|(file, symbol)| (file.relative_path.as_str(), symbol.as_str()));

    match find_collision(pairs) {
        Some(collision) => Err(EmbedError::SymbolCollision {
            symbol: collision.symbol,
            first: collision.first,
            second: collision.second,
        }),
        None => Ok(()),
    }
}

fn load_asset(file: &DiscoveredFile) -> EmbedResult<Asset> {
    let bytes = fs::read(&file.source_path)
        .map_err(|e| EmbedError::path_io("failed to read", &file.source_path, e))?;
    Asset::new(file.relative_path.clone(), bytes).ok_or_else(|| EmbedError::EmptyAsset {
        path: file.source_path.clone(),
    })
}
