//! Per-file-type call counting around a document function

use std::collections::HashMap;

/// Wraps a `(document, file_type)` function and counts calls per file type
///
/// Each wrapper keeps its own counts; two wrappers around the same
/// function never share them.
pub struct FileTypeAggregator<F> {
    func: F,
    counts: HashMap<String, usize>,
}

impl<F, R> FileTypeAggregator<F>
where
    F: Fn(&str, &str) -> R,
{
    /// Wrap `func` with empty counters
    pub fn new(func: F) -> Self {
        Self {
            func,
            counts: HashMap::new(),
        }
    }

    /// Run the wrapped function and return its result with a snapshot of
    /// the counts, including this call
    pub fn call(&mut self, document: &str, file_type: &str) -> (R, HashMap<String, usize>) {
        let result = (self.func)(document, file_type);
        *self.counts.entry(file_type.to_string()).or_insert(0) += 1;
        tracing::debug!(
            "File type {} seen {} times",
            file_type,
            self.counts[file_type]
        );
        (result, self.counts.clone())
    }

    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }
}

/// Wrap `func` with a fresh set of file type counters
pub fn file_type_aggregator<F, R>(func: F) -> FileTypeAggregator<F>
where
    F: Fn(&str, &str) -> R,
{
    FileTypeAggregator::new(func)
}

/// Describe the document being processed and its file type
pub fn process_doc(document: &str, file_type: &str) -> String {
    format!("Processing doc: '{document}'. File Type: {file_type}")
}

/// `process_doc` with its own file type counters
pub fn document_processor() -> FileTypeAggregator<fn(&str, &str) -> String> {
    file_type_aggregator(process_doc as fn(&str, &str) -> String)
}
