//! DAWG file codec
//!
//! The file is a big-endian `u32` edge count followed by that many
//! big-endian `u32` edges. Each edge packs:
//!
//! | bits  | meaning                                   |
//! |-------|-------------------------------------------|
//! | 24-31 | letter (ASCII)                            |
//! | 23    | a word ends on this edge                  |
//! | 22    | last edge of its node                     |
//! | 0-21  | first edge of the child node, 0 = none    |
//!
//! Edge 0 is a null sentinel and the root node starts at edge 1. A node is a
//! contiguous run of edges closed by the last-edge flag. Writing shares
//! identical sub-graphs, so the output is a minimal automaton.

use super::trie::{EdgeId, NONE, Trie};
use super::MAX_WORD_LEN;
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use std::path::Path;

const LETTER_SHIFT: u32 = 24;
const END_OF_WORD: u32 = 1 << 23;
const END_OF_NODE: u32 = 1 << 22;
const CHILD_MASK: u32 = END_OF_NODE - 1;

/// Most edges a file can address through the child field
pub const MAX_EDGES: usize = CHILD_MASK as usize + 1;

/// Upper bound on words decoded from one file
pub const MAX_DECODED_WORDS: usize = 20_000_000;

/// Decode every word stored in a DAWG image
///
/// Words come back exactly as spelled in the file (upper-cased); reversed
/// files yield reversed words. `path` only labels errors.
///
/// # Errors
/// Returns [`Error::MalformedDawg`] describing the first problem found.
pub fn decode(bytes: &[u8], path: &Path) -> Result<Vec<String>> {
    let malformed = |reason: String| Error::malformed(path, reason);

    let header: [u8; 4] = bytes
        .get(..4)
        .and_then(|h| h.try_into().ok())
        .ok_or_else(|| malformed(format!("file is {} bytes, too short for a header", bytes.len())))?;
    let count = u32::from_be_bytes(header) as usize;
    if count == 0 {
        return Err(malformed("edge count is zero".into()));
    }

    let expected = count
        .checked_mul(4)
        .and_then(|n| n.checked_add(4))
        .ok_or_else(|| malformed(format!("edge count {count} overflows")))?;
    if bytes.len() != expected {
        return Err(malformed(format!(
            "expected {expected} bytes for {count} edges, found {}",
            bytes.len()
        )));
    }

    let edges: Vec<u32> = bytes[4..]
        .chunks_exact(4)
        .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    for (index, &edge) in edges.iter().enumerate().skip(1) {
        let letter = (edge >> LETTER_SHIFT) as u8;
        if !letter.is_ascii_alphabetic() {
            return Err(malformed(format!(
                "edge {index} has non-letter byte 0x{letter:02x}"
            )));
        }
        let child = (edge & CHILD_MASK) as usize;
        if child >= count {
            return Err(malformed(format!(
                "edge {index} points to edge {child}, past the end"
            )));
        }
    }

    let mut decoder = Decoder {
        edges: &edges,
        visits: vec![Visit::Fresh; count],
        prefix: Vec::with_capacity(MAX_WORD_LEN),
        words: Vec::new(),
    };
    if count > 1 {
        let (total, _) = decoder.survey(1, 0).map_err(malformed)?;
        if total > MAX_DECODED_WORDS as u64 {
            return Err(malformed(format!("more than {MAX_DECODED_WORDS} words")));
        }
        decoder.words.reserve(total as usize);
        decoder.walk(1).map_err(malformed)?;
    }
    Ok(decoder.words)
}

#[derive(Debug, Clone, Copy)]
enum Visit {
    Fresh,
    Open,
    /// Words below the node and the most letters on any path from it
    Done { words: u64, height: usize },
}

struct Decoder<'a> {
    edges: &'a [u32],
    visits: Vec<Visit>,
    prefix: Vec<u8>,
    words: Vec<String>,
}

impl Decoder<'_> {
    /// Count the words reachable from `node`, `depth` letters below the root
    ///
    /// Each node is expanded once. Cycles, unterminated nodes, nodes that
    /// lead to no word and paths longer than [`MAX_WORD_LEN`] are rejected.
    fn survey(&mut self, node: usize, depth: usize) -> std::result::Result<(u64, usize), String> {
        match self.visits[node] {
            Visit::Open => return Err(format!("cycle through edge {node}")),
            Visit::Done { words, height } => {
                if depth + height > MAX_WORD_LEN {
                    return Err(format!("words longer than {MAX_WORD_LEN} letters"));
                }
                return Ok((words, height));
            }
            Visit::Fresh => {}
        }
        if depth >= MAX_WORD_LEN {
            return Err(format!("words longer than {MAX_WORD_LEN} letters"));
        }
        self.visits[node] = Visit::Open;

        let mut words = 0u64;
        let mut height = 1;
        let mut index = node;
        loop {
            let Some(&edge) = self.edges.get(index) else {
                return Err(format!("node at edge {node} is never terminated"));
            };
            if edge & END_OF_WORD != 0 {
                words = words.saturating_add(1);
            }
            let child = (edge & CHILD_MASK) as usize;
            if child != 0 {
                let (below, below_height) = self.survey(child, depth + 1)?;
                words = words.saturating_add(below);
                height = height.max(below_height + 1);
            }
            if edge & END_OF_NODE != 0 {
                break;
            }
            index += 1;
        }

        if words == 0 {
            return Err(format!("node at edge {node} leads to no word"));
        }
        self.visits[node] = Visit::Done { words, height };
        Ok((words, height))
    }

    /// Emit every word below `node`; only called after a clean survey
    fn walk(&mut self, node: usize) -> std::result::Result<(), String> {
        let mut index = node;
        loop {
            let Some(&edge) = self.edges.get(index) else {
                return Err(format!("node at edge {node} is never terminated"));
            };

            self.prefix
                .push(((edge >> LETTER_SHIFT) as u8).to_ascii_uppercase());
            if edge & END_OF_WORD != 0 {
                self.words
                    .push(String::from_utf8_lossy(&self.prefix).into_owned());
            }
            let child = (edge & CHILD_MASK) as usize;
            if child != 0 {
                self.walk(child)?;
            }
            self.prefix.pop();

            if edge & END_OF_NODE != 0 {
                return Ok(());
            }
            index += 1;
        }
    }
}

/// One edge of a minimized node: letter, end of word, canonical child node
type Signature = Vec<(u8, bool, Option<usize>)>;

/// Encode a trie as a minimized DAWG image
///
/// # Errors
/// Returns [`Error::DawgTooLarge`] when the minimized graph needs more edges
/// than the child field can address.
pub fn encode(trie: &Trie) -> Result<Vec<u8>> {
    let mut minimizer = Minimizer::default();
    let root = (trie.root() != NONE).then(|| minimizer.canonical(trie, trie.root()));

    // Root node first, at edge 1, then every other node
    let mut order: Vec<usize> = Vec::with_capacity(minimizer.nodes.len());
    order.extend(root);
    order.extend((0..minimizer.nodes.len()).filter(|&id| Some(id) != root));

    let mut offsets = vec![0usize; minimizer.nodes.len()];
    let mut next = 1usize;
    for &id in &order {
        offsets[id] = next;
        next += minimizer.nodes[id].len();
    }
    let count = next;
    if count > MAX_EDGES {
        return Err(Error::DawgTooLarge(count));
    }

    let mut bytes = Vec::with_capacity(4 + count * 4);
    bytes.extend_from_slice(&(count as u32).to_be_bytes());
    bytes.extend_from_slice(&0u32.to_be_bytes());
    for &id in &order {
        let node = &minimizer.nodes[id];
        for (i, &(letter, end_of_word, child)) in node.iter().enumerate() {
            let mut edge = u32::from(letter) << LETTER_SHIFT;
            if end_of_word {
                edge |= END_OF_WORD;
            }
            if i + 1 == node.len() {
                edge |= END_OF_NODE;
            }
            if let Some(child) = child {
                edge |= offsets[child] as u32;
            }
            bytes.extend_from_slice(&edge.to_be_bytes());
        }
    }
    Ok(bytes)
}

#[derive(Default)]
struct Minimizer {
    nodes: Vec<Signature>,
    index: FxHashMap<Signature, usize>,
}

impl Minimizer {
    /// Canonical id of the node whose first edge is `head`
    fn canonical(&mut self, trie: &Trie, head: EdgeId) -> usize {
        let signature: Signature = trie
            .siblings(head)
            .map(|(_, edge)| (edge.letter, edge.end_of_word, edge.child))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|(letter, end_of_word, child)| {
                let child = (child != NONE).then(|| self.canonical(trie, child));
                (letter, end_of_word, child)
            })
            .collect();

        if let Some(&id) = self.index.get(&signature) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(signature.clone());
        self.index.insert(signature, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie(words: &[&str]) -> Trie {
        let mut trie = Trie::default();
        for word in words {
            trie.insert(word.as_bytes());
        }
        trie
    }

    fn edge(letter: u8, end_of_word: bool, end_of_node: bool, child: u32) -> u32 {
        let mut edge = u32::from(letter) << LETTER_SHIFT | child;
        if end_of_word {
            edge |= END_OF_WORD;
        }
        if end_of_node {
            edge |= END_OF_NODE;
        }
        edge
    }

    fn image(edges: &[u32]) -> Vec<u8> {
        let mut bytes = (edges.len() as u32).to_be_bytes().to_vec();
        for e in edges {
            bytes.extend_from_slice(&e.to_be_bytes());
        }
        bytes
    }

    fn decode_ok(bytes: &[u8]) -> Vec<String> {
        decode(bytes, Path::new("test.dawg")).unwrap()
    }

    fn decode_err(bytes: &[u8]) -> String {
        decode(bytes, Path::new("test.dawg")).unwrap_err().to_string()
    }

    #[test]
    fn decode_hand_built_image() {
        // root: A -> {T*}, B -> {E*}
        let bytes = image(&[
            0,
            edge(b'A', false, false, 3),
            edge(b'B', false, true, 4),
            edge(b'T', true, true, 0),
            edge(b'E', true, true, 0),
        ]);
        assert_eq!(decode_ok(&bytes), vec!["AT", "BE"]);
    }

    #[test]
    fn decode_lowercase_letters() {
        let bytes = image(&[0, edge(b'a', true, true, 0)]);
        assert_eq!(decode_ok(&bytes), vec!["A"]);
    }

    #[test]
    fn decode_empty_lexicon() {
        assert!(decode_ok(&image(&[0])).is_empty());
    }

    #[test]
    fn encode_then_decode_preserves_words() {
        let words = ["CAT", "CATS", "BAT", "BATS", "DOG", "DOGS", "A"];
        let trie = trie(&words);
        let bytes = encode(&trie).unwrap();
        let mut expected: Vec<String> = words.iter().map(ToString::to_string).collect();
        expected.sort();
        assert_eq!(decode_ok(&bytes), expected);
    }

    #[test]
    fn encode_shares_suffixes() {
        let trie = trie(&["BATS", "CATS", "HATS", "RATS"]);
        let bytes = encode(&trie).unwrap();
        // sentinel + root (4) + A + T + S
        assert_eq!(bytes.len(), 4 + 8 * 4);
        assert!(trie.edge_count() > 7);
    }

    #[test]
    fn encode_empty_trie() {
        let bytes = encode(&Trie::default()).unwrap();
        assert_eq!(bytes, image(&[0]));
    }

    #[test]
    fn rejects_short_file() {
        assert!(decode_err(&[0, 0]).contains("too short"));
    }

    #[test]
    fn rejects_zero_count() {
        assert!(decode_err(&[0, 0, 0, 0]).contains("edge count is zero"));
    }

    #[test]
    fn rejects_length_mismatch() {
        let mut bytes = image(&[0, edge(b'A', true, true, 0)]);
        bytes.pop();
        assert!(decode_err(&bytes).contains("expected 12 bytes"));
    }

    #[test]
    fn rejects_pointer_past_end() {
        let bytes = image(&[0, edge(b'A', true, true, 9)]);
        assert!(decode_err(&bytes).contains("past the end"));
    }

    #[test]
    fn rejects_non_letters() {
        let bytes = image(&[0, edge(b'1', true, true, 0)]);
        assert!(decode_err(&bytes).contains("non-letter"));
    }

    #[test]
    fn rejects_unterminated_node() {
        let bytes = image(&[0, edge(b'A', true, false, 0)]);
        assert!(decode_err(&bytes).contains("never terminated"));
    }

    #[test]
    fn rejects_cycles() {
        let bytes = image(&[0, edge(b'A', true, true, 1)]);
        assert!(decode_err(&bytes).contains("cycle"));
    }

    /// `levels` nodes, each with two edges to the next node
    fn doubling_chain(levels: u32, last_ends_word: bool) -> Vec<u8> {
        let mut edges = vec![0];
        for level in 0..levels {
            let head = 1 + 2 * level;
            let child = if level + 1 == levels { 0 } else { head + 2 };
            let ends = last_ends_word && level + 1 == levels;
            edges.push(edge(b'A', ends, false, child));
            edges.push(edge(b'B', ends, true, child));
        }
        image(&edges)
    }

    #[test]
    fn rejects_dead_end_chain() {
        // 2^60 paths and no word anywhere
        let bytes = doubling_chain(60, false);
        assert!(decode_err(&bytes).contains("leads to no word"));
    }

    #[test]
    fn rejects_dead_end_branch() {
        // root: A* -> {B (no word, no child)}
        let bytes = image(&[
            0,
            edge(b'A', true, true, 2),
            edge(b'B', false, true, 0),
        ]);
        assert!(decode_err(&bytes).contains("leads to no word"));
    }

    #[test]
    fn rejects_word_explosion_before_decoding() {
        // 2^40 words from 80 edges
        let bytes = doubling_chain(40, true);
        assert!(decode_err(&bytes).contains("more than"));
    }

    #[test]
    fn shared_nodes_decode_once_per_path() {
        let words = decode_ok(&doubling_chain(3, true));
        assert_eq!(words.len(), 8);
        assert_eq!(words.first().map(String::as_str), Some("AAA"));
        assert_eq!(words.last().map(String::as_str), Some("BBB"));
    }

    #[test]
    fn rejects_overlong_words() {
        let levels = MAX_WORD_LEN as u32 + 1;
        let mut edges = vec![0];
        for level in 0..levels {
            let last = level + 1 == levels;
            edges.push(edge(b'A', last, true, if last { 0 } else { level + 2 }));
        }
        assert!(decode_err(&image(&edges)).contains("longer than"));
    }
}
