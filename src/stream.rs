//! Streaming decode of a drug corpus, one record at a time.
//!
//! The document can be multi-gigabyte, so the reader never materializes
//! more than one `<drug>` subtree: it walks the token stream, buffers one
//! record element, decodes it into [`Drug`], drops the buffer and resumes.
//! A count limit for partial runs is layered by callers with
//! `Iterator::take` — it is not a decoder concern.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{DecodeError, PipelineError};
use crate::model::Drug;

const DRUG_TAG: &[u8] = b"drug";

/// Opening-tag prefix of a top-level drug record. Only top-level records
/// carry the type attribute; nested `<drug>` elements (pathway members,
/// interaction partners) do not, which is what makes a line scan for this
/// marker an exact record count.
pub const DRUG_OPEN_MARKER: &str = "<drug type=";

/// Counting pre-pass: a cheap line-oriented scan that sizes the progress
/// display. For any well-formed input its result equals the number of
/// records [`DrugStream`] yields.
pub fn count_drug_records<R: BufRead>(input: R) -> Result<usize, PipelineError> {
    let mut count = 0;
    for line in input.lines() {
        let line = line.map_err(PipelineError::Input)?;
        if line.contains(DRUG_OPEN_MARKER) {
            count += 1;
        }
    }
    Ok(count)
}

/// Lazy, forward-only sequence of decoded drug records.
///
/// Yields `Err` once on the first malformed record and then fuses: partial
/// relational output is unsafe to load, so the caller aborts the pass.
pub struct DrugStream<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    done: bool,
}

impl DrugStream<BufReader<File>> {
    /// Open a document file and position the stream at its start.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let file = File::open(path).map_err(PipelineError::Input)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> DrugStream<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);
        DrugStream {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }

    /// Scan forward to the next top-level `<drug>` start tag and decode
    /// that subtree. `Ok(None)` means end of document.
    fn next_record(&mut self) -> Result<Option<Drug>, PipelineError> {
        loop {
            self.buf.clear();
            let start = match self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(classify_scan_error)?
            {
                Event::Eof => return Ok(None),
                Event::Start(e) if e.local_name().as_ref() == DRUG_TAG => Some(e.into_owned()),
                _ => None,
            };
            if let Some(start) = start {
                let xml = self.capture_record(start)?;
                let drug = quick_xml::de::from_str(&xml)
                    .map_err(|e| PipelineError::Decode(DecodeError::Schema(e)))?;
                return Ok(Some(drug));
            }
        }
    }

    /// Re-serialize one record subtree into a private buffer, tracking
    /// nested `<drug>` elements so a pathway member never closes the
    /// record early. The buffer lives only until the record is decoded.
    fn capture_record(&mut self, start: BytesStart<'static>) -> Result<String, PipelineError> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Start(start))
            .map_err(|e| PipelineError::Decode(DecodeError::Buffer(e.to_string())))?;

        let mut depth = 1usize;
        let mut buf = Vec::new();
        loop {
            let ev = self
                .reader
                .read_event_into(&mut buf)
                .map_err(classify_scan_error)?;
            match &ev {
                Event::Eof => return Err(PipelineError::Decode(DecodeError::Truncated)),
                Event::Start(e) if e.local_name().as_ref() == DRUG_TAG => depth += 1,
                Event::End(e) if e.local_name().as_ref() == DRUG_TAG => depth -= 1,
                _ => {}
            }
            writer
                .write_event(ev)
                .map_err(|e| PipelineError::Decode(DecodeError::Buffer(e.to_string())))?;
            if depth == 0 {
                break;
            }
            buf.clear();
        }

        String::from_utf8(writer.into_inner())
            .map_err(|e| PipelineError::Decode(DecodeError::Utf8(e)))
    }
}

impl<R: BufRead> Iterator for DrugStream<R> {
    type Item = Result<Drug, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(drug)) => Some(Ok(drug)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// An I/O failure while scanning is an input error; anything else is a
/// malformed document.
fn classify_scan_error(e: quick_xml::Error) -> PipelineError {
    match e {
        quick_xml::Error::Io(io_err) => {
            PipelineError::Input(io::Error::new(io_err.kind(), io_err.to_string()))
        }
        other => PipelineError::Decode(DecodeError::Xml(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_drug_document() -> String {
        r#"<?xml version="1.0" encoding="UTF-8"?>
<drugbank version="5.1">
  <drug type="biotech" created="2005-06-13" updated="2024-01-03">
    <drugbank-id primary="true">DB00001</drugbank-id>
    <name>Lepirudin</name>
    <description>A recombinant hirudin.</description>
    <pathways>
      <pathway>
        <smpdb-id>SMP00278</smpdb-id>
        <name>Lepirudin Action Pathway</name>
        <drugs>
          <drug>
            <drugbank-id>DB00001</drugbank-id>
            <name>Lepirudin</name>
          </drug>
        </drugs>
      </pathway>
    </pathways>
  </drug>
  <drug type="small molecule" created="2005-06-13" updated="2024-01-03">
    <drugbank-id primary="true">DB00002</drugbank-id>
    <name>Cetuximab</name>
    <groups>
      <group>approved</group>
    </groups>
  </drug>
</drugbank>
"#
        .to_string()
    }

    #[test]
    fn yields_each_top_level_record() {
        let doc = two_drug_document();
        let drugs: Vec<Drug> = DrugStream::new(doc.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(drugs.len(), 2);
        assert_eq!(drugs[0].primary_id(), "DB00001");
        assert_eq!(drugs[0].name, "Lepirudin");
        assert_eq!(drugs[1].primary_id(), "DB00002");
        assert_eq!(drugs[1].groups.group, vec!["approved"]);
    }

    #[test]
    fn nested_drug_elements_are_not_records() {
        let doc = two_drug_document();
        let drugs: Vec<Drug> = DrugStream::new(doc.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        // The pathway member stays inside its record instead of becoming
        // a third one.
        assert_eq!(drugs.len(), 2);
        assert_eq!(
            drugs[0].pathways.pathway[0].drugs.drug[0].drugbank_id,
            "DB00001"
        );
    }

    #[test]
    fn pre_pass_count_matches_decoder_yield() {
        let doc = two_drug_document();
        let counted = count_drug_records(doc.as_bytes()).unwrap();
        let yielded = DrugStream::new(doc.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
            .len();
        assert_eq!(counted, yielded);
        assert_eq!(counted, 2);
    }

    #[test]
    fn take_never_reads_past_the_requested_record() {
        // Garbage after the first record: a lazy take(1) must succeed
        // because it stops at the first closing boundary.
        let doc = r#"<drugbank>
  <drug type="biotech">
    <drugbank-id>DB00001</drugbank-id>
    <name>Lepirudin</name>
  </drug>
  <drug type="broken"><drugbank-id>DB99999</drugbank-id><oops>
</drugbank>
"#;
        let first: Vec<_> = DrugStream::new(doc.as_bytes())
            .take(1)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].primary_id(), "DB00001");
    }

    #[test]
    fn truncated_record_is_a_decode_error() {
        let doc = r#"<drugbank>
  <drug type="biotech">
    <drugbank-id>DB00001</drugbank-id>
"#;
        let results: Vec<_> = DrugStream::new(doc.as_bytes()).collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            Err(PipelineError::Decode(DecodeError::Truncated))
        ));
    }

    #[test]
    fn stream_fuses_after_an_error() {
        let doc = r#"<drugbank>
  <drug type="biotech">
    <drugbank-id>DB00001
"#;
        let mut stream = DrugStream::new(doc.as_bytes());
        assert!(stream.next().unwrap().is_err());
        assert!(stream.next().is_none());
    }

    #[test]
    fn empty_document_yields_nothing() {
        let doc = "<drugbank></drugbank>";
        assert_eq!(count_drug_records(doc.as_bytes()).unwrap(), 0);
        assert!(DrugStream::new(doc.as_bytes()).next().is_none());
    }
}
