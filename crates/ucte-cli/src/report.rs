//! Per-file summary printed by the inspector.

use std::io::{self, Write};

use serde::Serialize;
use ucte_loader::UcteDocument;
use ucte_types::{
    Line, Node, Transformer, TransformerRegulation, TransformerSpecParam, UnknownCode,
};

/// Summary of one loaded file.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    file: &'a str,
    date: String,
    time: String,
    file_type: Lookup<'a>,
    weekday: Lookup<'a>,
    country: Lookup<'a>,
    version: &'a str,
    counts: Counts,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<Records<'a>>,
}

/// A code together with its resolved name, if the code is known.
#[derive(Debug, Serialize)]
struct Lookup<'a> {
    code: &'a str,
    name: Option<&'static str>,
}

impl<'a> Lookup<'a> {
    fn new(code: &'a str, name: Result<&'static str, UnknownCode>) -> Self {
        Self {
            code,
            name: name.ok(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Counts {
    source_lines: usize,
    nodes: usize,
    x_nodes: usize,
    lines: usize,
    transformers: usize,
    regulations: usize,
    spec_params: usize,
    parse_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct Records<'a> {
    nodes: &'a [Node],
    x_nodes: &'a [Node],
    lines: &'a [Line],
    transformers: &'a [Transformer],
    regulations: &'a [TransformerRegulation],
    spec_params: &'a [TransformerSpecParam],
}

impl<'a> Report<'a> {
    /// Builds the summary; `with_records` includes the decoded records.
    pub fn new(doc: &'a UcteDocument, with_records: bool) -> Self {
        let meta = doc.metadata();
        let stats = doc.stats();

        Self {
            file: &meta.file_name,
            date: meta.date_iso(),
            time: meta.time_hm(),
            file_type: Lookup::new(&meta.file_type_code, meta.file_type_name()),
            weekday: Lookup::new(&meta.weekday_code, meta.weekday_name()),
            country: Lookup::new(&meta.country_code, meta.country_name_full()),
            version: &meta.version,
            counts: Counts {
                source_lines: stats.source_lines,
                nodes: stats.nodes,
                x_nodes: stats.x_nodes,
                lines: stats.lines,
                transformers: stats.transformers,
                regulations: stats.regulations,
                spec_params: stats.spec_params,
                parse_time_ms: stats.parse_time_ms,
            },
            records: with_records.then(|| Records {
                nodes: doc.nodes(),
                x_nodes: doc.x_nodes(),
                lines: doc.lines(),
                transformers: doc.transformers(),
                regulations: doc.transformer_regulations(),
                spec_params: doc.transformer_spec_params(),
            }),
        }
    }

    /// Writes the summary as plain text.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.file)?;
        writeln!(out, "  date:         {} {}", self.date, self.time)?;
        writeln!(out, "  file type:    {}", self.file_type)?;
        writeln!(out, "  weekday:      {}", self.weekday)?;
        writeln!(out, "  country:      {}", self.country)?;
        writeln!(out, "  version:      {}", self.version)?;

        let c = &self.counts;
        writeln!(out, "  nodes:        {} (+{} X-nodes)", c.nodes, c.x_nodes)?;
        writeln!(out, "  lines:        {}", c.lines)?;
        writeln!(out, "  transformers: {}", c.transformers)?;
        writeln!(out, "  regulations:  {}", c.regulations)?;
        writeln!(out, "  tap steps:    {}", c.spec_params)?;
        writeln!(out, "  parsed {} lines in {} ms", c.source_lines, c.parse_time_ms)?;

        if let Some(records) = &self.records {
            write_records(out, records)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name {
            Some(name) => write!(f, "{} ({})", name, self.code),
            None => write!(f, "unknown ({})", self.code),
        }
    }
}

fn write_records<W: Write>(out: &mut W, records: &Records<'_>) -> io::Result<()> {
    writeln!(out, "  node codes:")?;
    for node in records.nodes.iter().chain(records.x_nodes) {
        writeln!(
            out,
            "    {:<8} {}",
            node.code.as_deref().unwrap_or(""),
            node.geographical_name.as_deref().unwrap_or("").trim_end()
        )?;
    }

    writeln!(out, "  element names:")?;
    let lines = records
        .lines
        .iter()
        .map(|l| (&l.node1, &l.node2, &l.element_name));
    let transformers = records
        .transformers
        .iter()
        .map(|t| (&t.node1, &t.node2, &t.element_name));
    for (node1, node2, name) in lines.chain(transformers) {
        writeln!(
            out,
            "    {:<8} {:<8} {}",
            node1.as_deref().unwrap_or(""),
            node2.as_deref().unwrap_or(""),
            name.as_deref().unwrap_or("").trim_end()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use ucte_loader::UcteConfig;
    use ucte_types::{CodeKind, FileType};

    const SOURCE: &str = "\
##ZHR
HSENJ 2  HE Senj      0 2  246.7
##ZXX
##L
LBERIC2  LKLECE2  2 1  4.000 53.500  120.000    640 BER-KLE220EQ
##T
##R
##TT
##E
";

    fn load(name: &str) -> UcteDocument {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, SOURCE).unwrap();
        UcteDocument::from_path_with_config(&path, &UcteConfig::default()).unwrap()
    }

    #[test]
    fn test_text_report() {
        let doc = load("20200418_0930_FO6_HR1.uct");
        let mut out = Vec::new();
        Report::new(&doc, true).write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("20200418_0930_FO6_HR1.uct\n"));
        assert!(text.contains("  date:         2020-04-18 09:30\n"));
        assert!(text.contains("  file type:    Forecast (FO)\n"));
        assert!(text.contains("  weekday:      Saturday (6)\n"));
        assert!(text.contains("  country:      Hrvatska (Croatia) (HR)\n"));
        assert!(text.contains("  nodes:        1 (+0 X-nodes)\n"));
        assert!(text.contains("    HSENJ 2  HE Senj\n"));
        assert!(text.contains("    LBERIC2  LKLECE2  BER-KLE220EQ\n"));
    }

    #[test]
    fn test_lookup_display() {
        let known = Lookup::new("SN", Ok(FileType::Snapshot.name()));
        assert_eq!(known.to_string(), "Snapshot (SN)");

        let unknown = Lookup::new("QQ", Err(UnknownCode::new(CodeKind::Country, "QQ")));
        assert_eq!(unknown.name, None);
        assert_eq!(unknown.to_string(), "unknown (QQ)");
    }

    #[test]
    fn test_unknown_codes_are_reported() {
        let doc = load("20200418_0930_ZZ9_HR1.uct");
        let mut out = Vec::new();
        Report::new(&doc, false).write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  file type:    unknown (ZZ)\n"));
        assert!(text.contains("  weekday:      unknown (9)\n"));
        assert!(!text.contains("node codes"));
    }

    #[test]
    fn test_json_report() {
        let doc = load("20200418_0930_FO6_HR1.uct");

        let summary = serde_json::to_value(Report::new(&doc, false)).unwrap();
        assert_eq!(summary["file_type"]["name"], "Forecast");
        assert_eq!(summary["counts"]["lines"], 1);
        assert!(summary.get("records").is_none());

        let full = serde_json::to_value(Report::new(&doc, true)).unwrap();
        assert_eq!(full["records"]["lines"][0]["current_limit"], 640);
        assert_eq!(full["records"]["nodes"][0]["voltage"], 246.7);
    }
}
