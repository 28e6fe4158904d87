//! In-memory UCTE document.
//!
//! A document is built from one read of the source file. The lines are kept
//! in a single buffer and the section reader runs over that buffer once per
//! record block.
//!
//! ```no_run
//! use ucte_loader::UcteDocument;
//!
//! let doc = UcteDocument::from_path("20200418_0930_FO6_HR1.uct")?;
//! println!("{} nodes, {} branches", doc.nodes().len(), doc.branch_count());
//! if let Some(node) = doc.node("HSENJ 2") {
//!     println!("{:?}", node.voltage);
//! }
//! # Ok::<(), ucte_loader::UcteError>(())
//! ```

use std::path::Path;
use std::time::Instant;

use ucte_types::{
    Country, FileType, Line, Node, Transformer, TransformerRegulation, TransformerSpecParam,
    UnknownCode, Weekday,
};

use crate::metadata::FileMetadata;
use crate::section::{markers, read_section};
use crate::types::{LoadStats, UcteConfig, UcteError, UcteResult};

/// A parsed UCTE-DEF file.
///
/// Holds the six record blocks of the file together with the metadata
/// decoded from its name.
#[derive(Debug, Clone)]
pub struct UcteDocument {
    metadata: FileMetadata,
    nodes: Vec<Node>,
    x_nodes: Vec<Node>,
    lines: Vec<Line>,
    transformers: Vec<Transformer>,
    regulations: Vec<TransformerRegulation>,
    spec_params: Vec<TransformerSpecParam>,
    stats: LoadStats,
}

impl UcteDocument {
    /// Loads a UCTE file with the default configuration.
    pub fn from_path<P: AsRef<Path>>(path: P) -> UcteResult<Self> {
        Self::from_path_with_config(path, &UcteConfig::default())
    }

    /// Loads a UCTE file.
    ///
    /// # Errors
    /// Fails if the file does not exist or cannot be read, if its name does
    /// not carry UCTE metadata, or if a section is unterminated while
    /// [`UcteConfig::require_end_marker`] is set.
    pub fn from_path_with_config<P: AsRef<Path>>(path: P, config: &UcteConfig) -> UcteResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(UcteError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let metadata = FileMetadata::from_path(path)?;
        let text = read_source(path)?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "read UCTE source");

        Self::from_text(metadata, &text, config)
    }

    /// Builds a document from already-read file contents.
    pub fn from_text(metadata: FileMetadata, text: &str, config: &UcteConfig) -> UcteResult<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self::from_lines(metadata, &lines, config)
    }

    /// Builds a document from a line buffer.
    ///
    /// Lines must not carry their terminators.
    pub fn from_lines<S>(metadata: FileMetadata, lines: &[S], config: &UcteConfig) -> UcteResult<Self>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();

        let country_code = config
            .country_code
            .as_deref()
            .unwrap_or(&metadata.country_code);
        let country_marker = markers::country_nodes(country_code);

        let nodes: Vec<Node> =
            read_section(lines, &country_marker, markers::BORDER_NODES, config)?;
        let x_nodes: Vec<Node> =
            read_section(lines, markers::BORDER_NODES, markers::LINES, config)?;
        let branches: Vec<Line> =
            read_section(lines, markers::LINES, markers::TRANSFORMERS, config)?;
        let transformers: Vec<Transformer> =
            read_section(lines, markers::TRANSFORMERS, markers::REGULATION, config)?;
        let regulations: Vec<TransformerRegulation> =
            read_section(lines, markers::REGULATION, markers::SPEC_PARAMS, config)?;
        let spec_params: Vec<TransformerSpecParam> =
            read_section(lines, markers::SPEC_PARAMS, markers::END, config)?;

        let stats = LoadStats {
            source_lines: lines.len(),
            nodes: nodes.len(),
            x_nodes: x_nodes.len(),
            lines: branches.len(),
            transformers: transformers.len(),
            regulations: regulations.len(),
            spec_params: spec_params.len(),
            parse_time_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            file = %metadata.file_name,
            nodes = stats.nodes,
            x_nodes = stats.x_nodes,
            lines = stats.lines,
            transformers = stats.transformers,
            regulations = stats.regulations,
            spec_params = stats.spec_params,
            elapsed_ms = stats.parse_time_ms,
            "loaded UCTE document"
        );

        Ok(Self {
            metadata,
            nodes,
            x_nodes,
            lines: branches,
            transformers,
            regulations,
            spec_params,
            stats,
        })
    }

    /// Country nodes, from the `##Z<cc>` block.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Cross-border X-nodes, from the `##ZXX` block.
    pub fn x_nodes(&self) -> &[Node] {
        &self.x_nodes
    }

    /// AC lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Two-winding transformers.
    pub fn transformers(&self) -> &[Transformer] {
        &self.transformers
    }

    /// Phase and angle regulation of transformers.
    pub fn transformer_regulations(&self) -> &[TransformerRegulation] {
        &self.regulations
    }

    /// Special tap-step tables of transformers.
    pub fn transformer_spec_params(&self) -> &[TransformerSpecParam] {
        &self.spec_params
    }

    /// Metadata decoded from the file name.
    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    /// Load statistics.
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Finds a country or X-node by code. Trailing blanks are ignored on both sides.
    pub fn node(&self, code: &str) -> Option<&Node> {
        let code = code.trim_end();
        self.nodes
            .iter()
            .chain(&self.x_nodes)
            .find(|node| node.code.as_deref().map(str::trim_end) == Some(code))
    }

    /// Number of lines and transformers.
    pub fn branch_count(&self) -> usize {
        self.lines.len() + self.transformers.len()
    }

    /// Returns true if no section yielded a record.
    pub fn is_empty(&self) -> bool {
        self.stats.total_records() == 0
    }

    /// File date as `YYYY-MM-DD`.
    pub fn date_iso(&self) -> String {
        self.metadata.date_iso()
    }

    /// File date as `DD.MM.YYYY.`
    pub fn date_hr(&self) -> String {
        self.metadata.date_hr()
    }

    /// File type.
    pub fn file_type(&self) -> Result<FileType, UnknownCode> {
        self.metadata.file_type()
    }

    /// File type name.
    pub fn file_type_name(&self) -> Result<&'static str, UnknownCode> {
        self.metadata.file_type_name()
    }

    /// Weekday.
    pub fn weekday(&self) -> Result<Weekday, UnknownCode> {
        self.metadata.weekday()
    }

    /// Weekday name.
    pub fn weekday_name(&self) -> Result<&'static str, UnknownCode> {
        self.metadata.weekday_name()
    }

    /// Country of the file.
    pub fn country(&self) -> Result<&'static Country, UnknownCode> {
        self.metadata.country()
    }

    /// Bilingual country name.
    pub fn country_name_full(&self) -> Result<&'static str, UnknownCode> {
        self.metadata.country_name_full()
    }

    /// English country name.
    pub fn country_name(&self) -> Result<&'static str, UnknownCode> {
        self.metadata.country_name()
    }

    /// Native country name.
    pub fn country_name_native(&self) -> Result<&'static str, UnknownCode> {
        self.metadata.country_name_native()
    }
}

/// Reads the whole file in one go.
///
/// Falls back to Latin-1 when the content is not UTF-8, so one byte stays
/// one column.
fn read_source(path: &Path) -> UcteResult<String> {
    let bytes = std::fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(path = %path.display(), "source is not UTF-8, decoding as Latin-1");
            err.as_bytes().iter().map(|&b| char::from(b)).collect()
        }
    };
    Ok(text)
}
