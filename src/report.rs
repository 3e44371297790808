//! Text reports for a finished scan: one channel per n-gram order.

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::alphabet::{letter_byte, letter_char, ALPHABET_LEN};
use crate::config::{Encoding, LineEnding};
use crate::error::{Error, Result};
use crate::scanner::ScanSummary;
use crate::{entropy_order0, entropy_order1, entropy_order2};

const UNDEFINED: &str = "N/A";

/// Number of decimal digits needed to print `n`.
pub fn digits(mut n: u64) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

fn fmt_value(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.6}", v),
        None => UNDEFINED.to_string(),
    }
}

fn fmt_probability(count: u64, total: u64) -> String {
    if total == 0 { return UNDEFINED.to_string() }
    format!("{:.6}", count as f64 / total as f64)
}

/// Renders the mono/dual/triple reports. Read-only over the summary, so
/// rendering twice gives identical bytes.
pub struct ReportRenderer<'a> {
    summary: &'a ScanSummary,
    encoding: Encoding,
    eol: &'static str,
    // count column width for the mono report; dual and triple use one and two
    // less since their letter column is that much wider
    width: usize,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(summary: &'a ScanSummary, encoding: Encoding, line_ending: LineEnding) -> Self {
        let width = digits(summary.table.total_letters()) + 2;
        ReportRenderer { summary, encoding, eol: line_ending.as_str(), width }
    }

    fn push_letter(&self, line: &mut Vec<u8>, i: usize) {
        match self.encoding {
            Encoding::Latin5 => line.push(letter_byte(i)),
            Encoding::Utf8 => {
                let mut buf = [0u8; 4];
                line.extend_from_slice(letter_char(i).encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    fn row(&self, letters: &[usize], count: u64, total: u64, width: usize) -> Vec<u8> {
        let mut line = Vec::with_capacity(64);
        for &i in letters { self.push_letter(&mut line, i) }
        let prob = fmt_probability(count, total);
        line.extend_from_slice(
            format!(" : Occurence: {:<width$} Probability: {}{}", count, prob, self.eol, width = width).as_bytes(),
        );
        line
    }

    pub fn render_mono<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let eol = self.eol;
        let table = &self.summary.table;
        write!(w, "Statistics for file '{}':{eol}{eol}", self.summary.source)?;
        write!(w, "File size (bytes): {}{eol}", self.summary.bytes_read)?;
        write!(w, "Number of letters: {}{eol}", table.total_letters())?;
        write!(w, "{eol}")?;
        write!(w, "Entropy        = {}{eol}{eol}", fmt_value(entropy_order0(table)))?;
        write!(w, "Character probability table:{eol}")?;
        for i in 0..ALPHABET_LEN {
            w.write_all(&self.row(&[i], table.letter_count(i), table.total_letters(), self.width))?;
        }
        Ok(())
    }

    pub fn render_dual<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let eol = self.eol;
        let table = &self.summary.table;
        write!(w, "Joint Entropy   = {}{eol}{eol}", fmt_value(entropy_order1(table)))?;
        write!(w, "Joint Probabilities:{eol}")?;
        let width = self.width - 1;
        for i in 0..ALPHABET_LEN {
            for j in 0..ALPHABET_LEN {
                w.write_all(&self.row(&[i, j], table.pair_count(i, j), table.total_pairs(), width))?;
            }
            w.write_all(eol.as_bytes())?;
        }
        Ok(())
    }

    pub fn render_triple<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let eol = self.eol;
        let table = &self.summary.table;
        write!(w, "Triple Entropy  = {}{eol}{eol}", fmt_value(entropy_order2(table)))?;
        write!(w, "Triple Probabilities:{eol}")?;
        let width = self.width - 2;
        for i in 0..ALPHABET_LEN {
            for j in 0..ALPHABET_LEN {
                for k in 0..ALPHABET_LEN {
                    let count = table.triplet_count(i, j, k);
                    w.write_all(&self.row(&[i, j, k], count, table.total_triplets(), width))?;
                }
                w.write_all(eol.as_bytes())?;
            }
        }
        Ok(())
    }
}

/// The three report files, all opened before any scanning happens.
pub struct ReportSinks {
    paths: [PathBuf; 3],
    files: [BufWriter<File>; 3],
}

impl ReportSinks {
    pub fn create(paths: [PathBuf; 3]) -> Result<Self> {
        let open = |p: &PathBuf| {
            File::create(p)
                .map(BufWriter::new)
                .map_err(|source| Error::OutputUnavailable { path: p.clone(), source })
        };
        let files = [open(&paths[0])?, open(&paths[1])?, open(&paths[2])?];
        Ok(ReportSinks { paths, files })
    }

    /// Renders every channel into its file and flushes.
    pub fn write(self, renderer: &ReportRenderer<'_>) -> Result<[PathBuf; 3]> {
        let ReportSinks { paths, files: [mut mono, mut dual, mut triple] } = self;
        renderer.render_mono(&mut mono)?;
        renderer.render_dual(&mut dual)?;
        renderer.render_triple(&mut triple)?;
        for f in [&mut mono, &mut dual, &mut triple] { f.flush()? }
        for p in &paths { log::info!("wrote {}", p.display()) }
        Ok(paths)
    }
}

#[derive(Debug, Serialize)]
pub struct EntropyView {
    pub order0: Option<f64>,
    pub order1: Option<f64>,
    pub order2: Option<f64>,
}

/// Machine-readable digest of a scan, for `--format json`.
#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub source: String,
    pub bytes_read: u64,
    pub letters: u64,
    pub pairs: u64,
    pub triplets: u64,
    pub entropy: EntropyView,
}

impl From<&ScanSummary> for SummaryView {
    fn from(s: &ScanSummary) -> Self {
        let t = &s.table;
        SummaryView {
            source: s.source.clone(),
            bytes_read: s.bytes_read,
            letters: t.total_letters(),
            pairs: t.total_pairs(),
            triplets: t.total_triplets(),
            entropy: EntropyView { order0: entropy_order0(t), order1: entropy_order1(t), order2: entropy_order2(t) },
        }
    }
}
