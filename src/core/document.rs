//! Document stores and collections
//!
//! Every store operation here returns an updated copy and leaves its input
//! untouched. `DocumentCollection` is the one place that keeps documents
//! between calls, and it owns its own copy.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

/// A named command callable with string arguments
pub type Command = Arc<dyn Fn(&[&str]) -> String + Send + Sync>;

/// Return a copy of `documents` with `filename` set to `content`
pub fn save_document(
    documents: &HashMap<String, String>,
    filename: &str,
    content: &str,
) -> HashMap<String, String> {
    let mut saved = documents.clone();
    saved.insert(filename.to_string(), content.to_string());
    saved
}

/// Return a copy of `commands` with `name` bound to `command`
pub fn add_custom_command(
    commands: &HashMap<String, Command>,
    name: &str,
    command: Command,
) -> HashMap<String, Command> {
    let mut updated = commands.clone();
    updated.insert(name.to_string(), command);
    updated
}

/// Non-empty and made of ASCII digits only; fractions and numerals like
/// `½` or `Ⅻ` do not count
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Merge originals and backups into an uppercased set, dropping entries
/// that are only digits
pub fn restore_documents(originals: &[&str], backups: &[&str]) -> HashSet<String> {
    originals
        .iter()
        .chain(backups)
        .filter(|doc| !is_digits(doc))
        .map(|doc| doc.to_uppercase())
        .collect()
}

/// Wrap the rendered file in a fenced code block
pub fn file_to_prompt<T, F>(file: &T, to_string: F) -> String
where
    T: ?Sized,
    F: Fn(&T) -> String,
{
    format!("```\n{}\n```", to_string(file))
}

/// Pair keys with values, stopping at the shorter sequence
pub fn zipmap<K, V, KI, VI>(keys: KI, values: VI) -> HashMap<K, V>
where
    K: Eq + Hash,
    KI: IntoIterator<Item = K>,
    VI: IntoIterator<Item = V>,
{
    keys.into_iter().zip(values).collect()
}

/// A growing list of documents owned by one collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCollection {
    documents: Vec<String>,
}

impl DocumentCollection {
    /// Append a document and return a snapshot of the collection
    pub fn add(&mut self, document: &str) -> Vec<String> {
        self.documents.push(document.to_string());
        tracing::debug!("Collection now holds {} documents", self.documents.len());
        self.documents.clone()
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }
}

/// Start a collection seeded with a copy of `initial`
pub fn new_collection<S: AsRef<str>>(initial: &[S]) -> DocumentCollection {
    DocumentCollection {
        documents: initial.iter().map(|s| s.as_ref().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_save_document() {
        let docs = HashMap::from([("existing.txt".to_string(), "old content".to_string())]);
        let result = save_document(&docs, "new.txt", "new content");
        assert_eq!(result.len(), 2);
        assert_eq!(result["new.txt"], "new content");
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_save_document_overwrites() {
        let docs = HashMap::from([("file.txt".to_string(), "old content".to_string())]);
        let result = save_document(&docs, "file.txt", "new content");
        assert_eq!(
            result,
            HashMap::from([("file.txt".to_string(), "new content".to_string())])
        );
        assert_eq!(docs["file.txt"], "old content");
    }

    #[test]
    fn test_add_custom_command() {
        let existing: Command = Arc::new(|_: &[&str]| String::new());
        let hello: Command = Arc::new(|_: &[&str]| "hello".to_string());
        let commands = HashMap::from([("existing".to_string(), existing)]);

        let result = add_custom_command(&commands, "new_cmd", hello.clone());
        assert!(Arc::ptr_eq(&result["new_cmd"], &hello));
        assert_eq!(result["new_cmd"](&[]), "hello");
        assert_eq!(result.len(), 2);
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn test_add_custom_command_overwrites() {
        let first: Command = Arc::new(|_: &[&str]| "first".to_string());
        let second: Command = Arc::new(|args: &[&str]| args.join(","));
        let commands = HashMap::from([("cmd".to_string(), first)]);

        let result = add_custom_command(&commands, "cmd", second.clone());
        assert!(Arc::ptr_eq(&result["cmd"], &second));
        assert_eq!(result["cmd"](&["a", "b"]), "a,b");
    }

    #[test]
    fn test_restore_documents() {
        let result = restore_documents(&["doc1", "doc2"], &["doc3"]);
        assert_eq!(result, HashSet::from(["DOC1".into(), "DOC2".into(), "DOC3".into()]));
    }

    #[test]
    fn test_restore_documents_filters_digits() {
        let result = restore_documents(&["doc1", "123", "456"], &["doc2", "789"]);
        assert_eq!(result, HashSet::from(["DOC1".into(), "DOC2".into()]));

        let result = restore_documents(&["file1", "2file", "f1l3"], &["123"]);
        assert_eq!(
            result,
            HashSet::from(["FILE1".into(), "2FILE".into(), "F1L3".into()])
        );
    }

    #[test]
    fn test_restore_documents_keeps_numeric_symbols() {
        let result = restore_documents(&["½", "Ⅻ", "42"], &["²"]);
        assert_eq!(
            result,
            HashSet::from(["½".to_string(), "Ⅻ".to_string(), "²".to_string()])
        );
    }

    #[test]
    fn test_restore_documents_deduplicates() {
        assert!(restore_documents(&[], &[]).is_empty());
        let result = restore_documents(&["doc", "DOC"], &["Doc"]);
        assert_eq!(result, HashSet::from(["DOC".to_string()]));
    }

    #[test]
    fn test_file_to_prompt() {
        let file = HashMap::from([("key", "value")]);
        let result = file_to_prompt(&file, |f| format!("Key is {}", f["key"]));
        assert_eq!(result, "```\nKey is value\n```");
    }

    #[test]
    fn test_file_to_prompt_with_str() {
        let result = file_to_prompt("hello", |s: &str| s.to_uppercase());
        assert!(result.starts_with("```\n"));
        assert!(result.ends_with("\n```"));
        assert!(result.contains("HELLO"));
    }

    #[test]
    fn test_zipmap() {
        let result = zipmap(["a", "b", "c"], [1, 2, 3]);
        assert_eq!(result, HashMap::from([("a", 1), ("b", 2), ("c", 3)]));

        assert!(zipmap(Vec::<&str>::new(), [1, 2, 3]).is_empty());
        assert!(zipmap(["a", "b"], Vec::<i32>::new()).is_empty());
        assert_eq!(zipmap(["key"], ["value"]), HashMap::from([("key", "value")]));
    }

    #[test]
    fn test_zipmap_truncates() {
        assert_eq!(zipmap(["a", "b", "c", "d"], [1, 2, 3]).len(), 3);
        assert_eq!(
            zipmap(["a", "b"], [1, 2, 3, 4]),
            HashMap::from([("a", 1), ("b", 2)])
        );
    }

    #[test]
    fn test_zipmap_mixed_values() {
        let result: HashMap<&str, Value> =
            zipmap(["name", "age", "active"], [json!("Alice"), json!(30), json!(true)]);
        assert_eq!(result["name"], json!("Alice"));
        assert_eq!(result["age"], json!(30));
        assert_eq!(result["active"], json!(true));
    }

    #[test]
    fn test_collection_accumulates() {
        let mut collection = new_collection(&["doc1"]);
        collection.add("doc2");
        assert_eq!(collection.add("doc3"), vec!["doc1", "doc2", "doc3"]);
        assert_eq!(collection.documents().len(), 3);
    }

    #[test]
    fn test_collection_does_not_touch_initial() {
        let initial = vec!["doc1".to_string(), "doc2".to_string()];
        let mut collection = new_collection(&initial);
        collection.add("doc3");
        assert_eq!(initial, vec!["doc1", "doc2"]);
    }

    #[test]
    fn test_collections_are_independent() {
        let mut first = new_collection(&["shared"]);
        let mut second = new_collection(&["shared"]);
        first.add("only in 1");
        assert_eq!(second.add("only in 2"), vec!["shared", "only in 2"]);
    }

    #[test]
    fn test_empty_collection() {
        let mut collection = new_collection::<&str>(&[]);
        assert_eq!(collection.add("new doc"), vec!["new doc"]);
    }
}
