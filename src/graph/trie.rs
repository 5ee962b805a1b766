//! Edge-arena trie
//!
//! Words are stored as a single vector of edges. Each edge carries one
//! letter, an end-of-word flag, the index of its first child edge and the
//! index of its next sibling. Sibling lists are kept sorted by letter, so a
//! depth-first walk yields words in ascending order. Index 0 is a sentinel
//! meaning "no edge".

/// Index of an edge in the arena; 0 means none
pub type EdgeId = u32;

/// Sentinel edge index
pub const NONE: EdgeId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub letter: u8,
    pub end_of_word: bool,
    pub child: EdgeId,
    pub next: EdgeId,
}

const SENTINEL: Edge = Edge {
    letter: 0,
    end_of_word: false,
    child: NONE,
    next: NONE,
};

/// A walk over a trie, driven one letter at a time
///
/// `step` returns `None` to prune the branch below the current prefix.
pub trait Traversal {
    type State: Clone;

    fn start(&self) -> Self::State;

    fn step(&self, state: &Self::State, letter: u8) -> Option<Self::State>;

    fn accepts(&self, state: &Self::State) -> bool;

    /// Run the traversal over a single word
    fn matches_word(&self, word: &[u8]) -> bool {
        let mut state = self.start();
        for &letter in word {
            match self.step(&state, letter) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.accepts(&state)
    }
}

/// Traversal that accepts every word
pub struct Everything;

impl Traversal for Everything {
    type State = ();

    fn start(&self) -> Self::State {}

    fn step(&self, _state: &Self::State, _letter: u8) -> Option<Self::State> {
        Some(())
    }

    fn accepts(&self, _state: &Self::State) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct Trie {
    edges: Vec<Edge>,
    root: EdgeId,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            edges: vec![SENTINEL],
            root: NONE,
            len: 0,
        }
    }
}

enum Slot {
    Root,
    Child(EdgeId),
}

impl Trie {
    /// Number of words stored
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of edges in the arena, sentinel excluded
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len() - 1
    }

    /// First edge of the top-level sibling list
    #[must_use]
    pub const fn root(&self) -> EdgeId {
        self.root
    }

    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id as usize]
    }

    /// Iterate a sibling list starting at `head`
    pub fn siblings(&self, head: EdgeId) -> Siblings<'_> {
        Siblings {
            trie: self,
            current: head,
        }
    }

    /// Insert a word, returning `true` if it was not already present
    ///
    /// The word must be non-empty; callers validate the alphabet.
    pub fn insert(&mut self, word: &[u8]) -> bool {
        debug_assert!(!word.is_empty());

        let mut slot = Slot::Root;
        let mut last = NONE;
        for &letter in word {
            let head = match slot {
                Slot::Root => self.root,
                Slot::Child(id) => self.edges[id as usize].child,
            };

            let mut prev = NONE;
            let mut current = head;
            while current != NONE && self.edges[current as usize].letter < letter {
                prev = current;
                current = self.edges[current as usize].next;
            }

            let id = if current != NONE && self.edges[current as usize].letter == letter {
                current
            } else {
                let id = self.edges.len() as EdgeId;
                self.edges.push(Edge {
                    letter,
                    end_of_word: false,
                    child: NONE,
                    next: current,
                });
                if prev != NONE {
                    self.edges[prev as usize].next = id;
                } else {
                    match slot {
                        Slot::Root => self.root = id,
                        Slot::Child(parent) => self.edges[parent as usize].child = id,
                    }
                }
                id
            };

            last = id;
            slot = Slot::Child(id);
        }

        let edge = &mut self.edges[last as usize];
        if edge.end_of_word {
            false
        } else {
            edge.end_of_word = true;
            self.len += 1;
            true
        }
    }

    /// Find the edge reached by spelling `prefix` from the root
    #[must_use]
    pub fn find(&self, prefix: &[u8]) -> Option<EdgeId> {
        let mut head = self.root;
        let mut found = None;
        for &letter in prefix {
            let id = self
                .siblings(head)
                .find(|&(_, edge)| edge.letter == letter)
                .map(|(id, _)| id)?;
            found = Some(id);
            head = self.edges[id as usize].child;
        }
        found
    }

    #[must_use]
    pub fn contains(&self, word: &[u8]) -> bool {
        !word.is_empty()
            && self
                .find(word)
                .is_some_and(|id| self.edges[id as usize].end_of_word)
    }

    /// Collect every word accepted by `traversal`, in ascending order
    ///
    /// Words longer than `max_len` are never visited.
    pub fn collect<T: Traversal>(&self, traversal: &T, max_len: usize) -> Vec<String> {
        let mut out = Vec::new();
        let mut prefix = Vec::with_capacity(max_len.min(64));
        self.walk(
            self.root,
            traversal,
            &traversal.start(),
            max_len,
            &mut prefix,
            &mut out,
        );
        out
    }

    fn walk<T: Traversal>(
        &self,
        head: EdgeId,
        traversal: &T,
        state: &T::State,
        max_len: usize,
        prefix: &mut Vec<u8>,
        out: &mut Vec<String>,
    ) {
        if prefix.len() >= max_len {
            return;
        }
        for (_, edge) in self.siblings(head) {
            let Some(next) = traversal.step(state, edge.letter) else {
                continue;
            };
            prefix.push(edge.letter);
            if edge.end_of_word && traversal.accepts(&next) {
                out.push(String::from_utf8_lossy(prefix).into_owned());
            }
            if edge.child != NONE {
                self.walk(edge.child, traversal, &next, max_len, prefix, out);
            }
            prefix.pop();
        }
    }
}

/// Iterator over a sibling list
pub struct Siblings<'a> {
    trie: &'a Trie,
    current: EdgeId,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = (EdgeId, &'a Edge);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NONE {
            return None;
        }
        let id = self.current;
        let edge = &self.trie.edges[id as usize];
        self.current = edge.next;
        Some((id, edge))
    }
}
