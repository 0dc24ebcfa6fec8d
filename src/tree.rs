//! Compressing dynamic route trie based on [httprouter].
//!
//! A [Tree] maps path patterns to handler values. Patterns are made of static text, named
//! parameters (`:name`, exactly one non-empty segment) and a trailing catch-all (`*name`, the
//! rest of the path). Within a tree, patterns must be uniquely determinable: for any request
//! path exactly one or zero patterns match, *always*. Ambiguous patterns are rejected when they
//! are inserted.
//!
//! ```
//! use waymark::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert("/user/:id/:action", "act").unwrap();
//! tree.insert("/files/*path", "files").unwrap();
//!
//! let route = tree.find("/user/42/edit").unwrap();
//! assert_eq!(route.handler, Some(&"act"));
//! assert_eq!(route.params.get("id"), Some("42"));
//! assert_eq!(route.params.get("action"), Some("edit"));
//!
//! let route = tree.find("/files/a/b/c.txt").unwrap();
//! assert_eq!(route.params.get("path"), Some("a/b/c.txt"));
//! ```
//!
//! [httprouter]: https://github.com/julienschmidt/httprouter
use super::params::{Param, Params};
use std::{cmp, convert::TryFrom, mem};
use thiserror::Error;

/// An error encountered while inserting a pattern into a [Tree].
///
/// Insertion errors are configuration mistakes; a failed insert leaves the tree untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The new pattern cannot coexist unambiguously with an existing one.
    #[error("{segment:?} in new path {path:?} conflicts with existing {existing:?}")]
    RouteConflict {
        path: String,
        segment: String,
        existing: String,
    },

    /// More than one wildcard marker in a single segment.
    #[error("only one wildcard per path segment is permitted, but {wildcard:?} was in {path:?}")]
    InvalidWildcardSyntax { path: String, wildcard: String },

    /// A `:` or `*` that isn't followed by a name.
    #[error("wildcard {wildcard:?} must be named with a non-empty name in path {path:?}")]
    EmptyWildcardName { path: String, wildcard: String },

    /// Something follows a catch-all segment.
    #[error("catch-all route is not the last segment in path {path:?}")]
    CatchAllNotAtEnd { path: String },

    /// A catch-all that doesn't start a segment.
    #[error("no '/' before catch-all in path {path:?}")]
    MissingSlashBeforeCatchAll { path: String },

    /// A catch-all added below a segment root that already has static children or a handler.
    #[error("catch-all {wildcard:?} conflicts with existing entries for the segment root in path {path:?}")]
    CatchAllConflictsWithStaticChild { path: String, wildcard: String },

    /// The exact pattern already has a handler.
    #[error("a handler is already registered for path {path:?}")]
    DuplicateRoute { path: String },

    /// The pattern has more wildcards than a [u8] can count.
    #[error("path {path:?} has {count} wildcards, but at most 255 are supported")]
    ParamCountOverflow { path: String, count: usize },

    /// Patterns are absolute.
    #[error("path {path:?} must begin with '/'")]
    MissingLeadingSlash { path: String },
}

/// A fault encountered while walking a [Tree].
///
/// This never happens for trees built through [Tree::insert]; it indicates corrupted
/// internal state and should be treated as a bug, not as a missing route.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid node type: expected a wildcard child below {parent:?}, found {found:?}")]
    InvalidNodeType {
        parent: String,
        found: Option<NodeKind>,
    },
}

/// The role of a node within a [Tree].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Static,
    Root,
    Param,
    CatchAll,
}

#[derive(Clone, Debug)]
struct Node<H> {
    prefix: String,
    indices: Vec<char>,
    wild_child: bool,
    kind: NodeKind,
    priority: u32,
    max_params: u8,
    children: Vec<Self>,
    entry: Option<H>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            indices: vec![],
            wild_child: false,
            kind: NodeKind::Static,
            priority: 0,
            max_params: 0,
            children: vec![],
            entry: None,
        }
    }
}

/// The outcome of [Tree::find].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<'n, 'p, H> {
    /// The matched handler, if any.
    pub handler: Option<&'n H>,

    /// Captured parameters in pattern order. Empty unless `handler` is set.
    pub params: Params<'n, 'p>,

    /// Whether the path would match with one trailing slash added or removed.
    pub tsr: bool,
}

/// A radix tree of path patterns.
///
/// See the [module docs](self) for the pattern syntax.
#[derive(Clone, Debug)]
pub struct Tree<H> {
    root: Node<H>,
    len: usize,
}

impl<H> Default for Tree<H> {
    fn default() -> Self {
        Self {
            root: Node::default(),
            len: 0,
        }
    }
}

impl<H> Tree<H> {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of registered patterns.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no pattern has been registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Register `handler` under `pattern`.
    ///
    /// ```
    /// use waymark::{InsertError, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("/cmd/:tool/:sub", 1).unwrap();
    ///
    /// let err = tree.insert("/cmd/vet", 2).unwrap_err();
    /// assert!(matches!(err, InsertError::RouteConflict { .. }));
    /// ```
    pub fn insert(&mut self, pattern: &str, handler: H) -> Result<(), InsertError> {
        validate(pattern)?;
        self.root.check(pattern)?;
        self.root.insert(pattern, handler);
        self.len += 1;
        Ok(())
    }

    /// Look up the handler registered for `path`.
    ///
    /// A missing route is not an error: the returned [Route] simply has no handler, and
    /// `tsr` tells whether a redirect to the path with(out) a trailing slash would match.
    pub fn find<'n, 'p>(&'n self, path: &'p str) -> Result<Route<'n, 'p, H>, MatchError> {
        self.root.find(path)
    }

    /// Make a case-insensitive lookup of `path`, returning the path with the casing of the
    /// registered pattern.
    ///
    /// With `fix_trailing_slash`, a single missing or superfluous trailing slash is also
    /// corrected.
    ///
    /// ```
    /// use waymark::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("/User_:name/about", ()).unwrap();
    ///
    /// let fixed = tree.find_case_insensitive("/user_gopher/ABOUT", false);
    /// assert_eq!(fixed.as_deref(), Some("/User_gopher/about"));
    /// ```
    pub fn find_case_insensitive(&self, path: &str, fix_trailing_slash: bool) -> Option<String> {
        let mut out = String::with_capacity(path.len() + 1);

        if self.root.find_fold(path, &mut out, fix_trailing_slash) {
            Some(out)
        } else {
            None
        }
    }
}

impl<H> Node<H> {
    /// Read-only dry run of [Node::insert]: reports every conflict the insertion would hit.
    fn check(&self, full_path: &str) -> Result<(), InsertError> {
        if self.prefix.is_empty() && self.children.is_empty() {
            return match self.entry {
                Some(_) => Err(duplicate(full_path)),
                None => Ok(()),
            };
        }

        let mut path = full_path;
        let mut n = self;
        loop {
            let i = longest_common_prefix(path, &n.prefix);

            // the edge would be split; the split-off part becomes a static child of n
            if i < n.prefix.len() {
                return match path[i..].chars().next() {
                    Some(c @ ':') | Some(c @ '*') => {
                        Err(wildcard_conflict(full_path, &path[i..], c, &n.prefix[i..]))
                    }
                    _ => Ok(()),
                };
            }

            if i < path.len() {
                path = &path[i..];

                if n.wild_child {
                    n = match n.children.first() {
                        Some(child) => child,
                        None => return Ok(()),
                    };

                    if n.wild_child_doesnt_conflict(path) {
                        continue;
                    }

                    if n.kind == NodeKind::CatchAll && path == n.prefix && n.entry.is_some() {
                        return Err(duplicate(full_path));
                    }

                    let segment = match n.kind {
                        NodeKind::CatchAll => path.split('/').next().unwrap_or(path),
                        _ => path,
                    };

                    return Err(InsertError::RouteConflict {
                        path: full_path.into(),
                        segment: segment.into(),
                        existing: n.prefix.clone(),
                    });
                }

                let c = first_char(path);

                if n.kind == NodeKind::Param && c == '/' && n.children.len() == 1 {
                    n = &n.children[0];
                    continue;
                }

                if let Some(pos) = n.child_position(c) {
                    n = &n.children[pos];
                    continue;
                }

                if c == ':' || c == '*' {
                    if let Some(child) = n.children.first() {
                        return Err(wildcard_conflict(full_path, path, c, &child.prefix));
                    }
                    if c == '*' && n.prefix.ends_with('/') {
                        return Err(wildcard_conflict(full_path, path, c, &n.prefix));
                    }
                }

                return Ok(());
            }

            return match n.entry {
                Some(_) => Err(duplicate(full_path)),
                None => Ok(()),
            };
        }
    }

    /// Insert a pattern that passed [validate] and [Node::check].
    fn insert(&mut self, full_path: &str, entry: H) {
        self.priority += 1;
        if self.prefix.is_empty() && self.children.is_empty() {
            self.insert_child(full_path, entry);
            self.kind = NodeKind::Root;
            return;
        }

        let mut path = full_path;
        let mut n = self;
        loop {
            let i = longest_common_prefix(path, &n.prefix);

            // split edge
            if i < n.prefix.len() {
                let index = first_char(&n.prefix[i..]);

                let child = Self {
                    prefix: n.prefix.split_off(i),
                    indices: mem::take(&mut n.indices),
                    wild_child: n.wild_child,
                    kind: NodeKind::Static,
                    priority: n.priority - 1,
                    max_params: n.max_params,
                    children: mem::take(&mut n.children),
                    entry: n.entry.take(),
                };

                n.children.push(child);
                n.indices.push(index);
                n.wild_child = false;
            }

            n.max_params = cmp::max(n.max_params, wildcard_count(path));

            // make new node a child of this node
            if i < path.len() {
                path = &path[i..];

                if n.wild_child {
                    n = &mut n.children[0];
                    n.priority += 1;
                    debug_assert!(n.wild_child_doesnt_conflict(path));
                    continue;
                }

                let c = first_char(path);

                // '/' after param
                if n.kind == NodeKind::Param && c == '/' && n.children.len() == 1 {
                    n = &mut n.children[0];
                    n.priority += 1;
                    continue;
                }

                // check if a child with the next path char exists
                if let Some(pos) = n.child_position(c) {
                    n = n.increment_child_prio(pos);
                    continue;
                }

                // otherwise, insert it
                if c != ':' && c != '*' {
                    n.indices.push(c);
                    n.children.push(Self::default());
                    n = n.increment_child_prio(n.indices.len() - 1);
                }
                n.insert_child(path, entry);
                return;
            }

            // otherwise add entry to current node
            debug_assert!(n.entry.is_none());
            n.entry = Some(entry);
            return;
        }
    }

    fn child_position(&self, c: char) -> Option<usize> {
        self.indices.iter().position(|&i| i == c)
    }

    fn wild_child_doesnt_conflict(&self, child: &str) -> bool {
        child.starts_with(self.prefix.as_str())
            && self.kind != NodeKind::CatchAll
            && (self.prefix.len() >= child.len() || child.as_bytes()[self.prefix.len()] == b'/')
    }

    /// Bump the priority of the child at `pos` and move it forward until the children are
    /// ordered by descending priority, then ascending edge label.
    fn increment_child_prio(&mut self, pos: usize) -> &mut Self {
        let cs = &mut self.children;
        let idc = &mut self.indices;

        cs[pos].priority += 1;
        let prio = cs[pos].priority;
        let label = idc[pos];

        let mut new_pos = pos;
        while new_pos > 0
            && (cs[new_pos - 1].priority < prio
                || (cs[new_pos - 1].priority == prio && idc[new_pos - 1] > label))
        {
            cs.swap(new_pos, new_pos - 1);
            idc.swap(new_pos, new_pos - 1);
            new_pos -= 1;
        }

        &mut cs[new_pos]
    }

    fn insert_child(&mut self, mut path: &str, entry: H) {
        let mut n = self;

        n.max_params = cmp::max(n.max_params, wildcard_count(path));

        while let Some((i, wc, _)) = find_wildcard(path) {
            if wc.starts_with(':') {
                // insert prefix before the current wildcard
                if i > 0 {
                    n.prefix = path[..i].into();
                    path = &path[i..];
                }

                let count = wildcard_count(path);
                n.wild_child = true;
                n.children = vec![Self {
                    prefix: wc.into(),
                    kind: NodeKind::Param,
                    priority: 1,
                    max_params: count,
                    ..Self::default()
                }];
                n = &mut n.children[0];

                // if the path doesn't end with the wildcard, there will be another non-wildcard
                // subpath starting with '/'
                if wc.len() < path.len() {
                    path = &path[wc.len()..];
                    n.children = vec![Self {
                        priority: 1,
                        max_params: count - 1,
                        ..Self::default()
                    }];
                    n = &mut n.children[0];
                    continue;
                }

                // otherwise we're done; insert the entry into the new leaf
                n.entry = Some(entry);
                return;
            }

            // wc is a *catch-all, preceded by '/'
            let i = i.saturating_sub(1);
            n.prefix = path[..i].into();
            n.indices = vec!['/'];
            n.children = vec![Self {
                wild_child: true,
                kind: NodeKind::CatchAll,
                priority: 1,
                max_params: 1,
                children: vec![Self {
                    prefix: path[i..].into(),
                    kind: NodeKind::CatchAll,
                    priority: 1,
                    max_params: 1,
                    entry: Some(entry),
                    ..Self::default()
                }],
                ..Self::default()
            }];

            return;
        }

        // if no wildcard was found, just insert entry at path
        n.prefix = path.into();
        n.entry = Some(entry);
    }

    fn wildcard_name(&self) -> &str {
        match self.kind {
            NodeKind::CatchAll => self.prefix.get(2..).unwrap_or_default(),
            _ => self.prefix.get(1..).unwrap_or_default(),
        }
    }

    fn find<'n, 'p>(&'n self, mut path: &'p str) -> Result<Route<'n, 'p, H>, MatchError> {
        let mut r = Route {
            handler: None,
            params: Params::with_capacity(self.max_params.into()),
            tsr: false,
        };
        let mut n = self;

        // the node the walk stepped down from; a leftover "/" is only worth a redirect if
        // this node holds an entry
        let mut from: Option<&Self> = None;

        loop {
            let prefix = n.prefix.as_str();

            if path.len() > prefix.len() && path.starts_with(prefix) {
                path = &path[prefix.len()..];

                // if this node does not have a wildcard (:param or *catch-all) child, we
                // can just look up the next child node and continue walking the tree
                if !n.wild_child {
                    if let Some(pos) = n.child_position(first_char(path)) {
                        from = Some(n);
                        n = &n.children[pos];
                        continue;
                    }

                    // nothing found. we can recommend to redirect to the same URL without
                    // a trailing slash if a leaf exists for that path
                    r.tsr = path == "/" && n.entry.is_some();
                    break;
                }

                let parent = n;
                n = match parent.children.first() {
                    Some(child) => child,
                    None => return Err(invalid_node(parent, None)),
                };

                match n.kind {
                    NodeKind::Param => {
                        let end = path.find('/').unwrap_or_else(|| path.len());

                        // a parameter never matches an empty segment
                        if end == 0 {
                            break;
                        }

                        r.params.push(Param {
                            key: n.wildcard_name(),
                            value: &path[..end],
                        });

                        // we must go deeper
                        if end < path.len() {
                            if let Some(child) = n.children.first() {
                                path = &path[end..];
                                from = Some(n);
                                n = child;
                                continue;
                            }

                            // ... but we can't
                            r.tsr = path.len() == end + 1;
                            break;
                        }

                        if n.entry.is_some() {
                            r.handler = n.entry.as_ref();
                        } else if let [child] = &n.children[..] {
                            r.tsr = child.prefix == "/" && child.entry.is_some();
                        }

                        break;
                    }

                    NodeKind::CatchAll => {
                        r.params.push(Param {
                            key: n.wildcard_name(),
                            value: path.strip_prefix('/').unwrap_or(path),
                        });
                        r.handler = n.entry.as_ref();
                        break;
                    }

                    kind => return Err(invalid_node(parent, Some(kind))),
                }
            } else if path == prefix {
                // we should have reached the node containing the entry, so we check if this
                // node has one registered
                if n.entry.is_some() {
                    r.handler = n.entry.as_ref();
                    break;
                }

                // a lone "/" in front of a wildcard: redirect only if the path without it
                // ends at an entry
                if path == "/" && n.wild_child && n.kind != NodeKind::Root {
                    r.tsr = has_entry(from);
                    break;
                }

                // no entry found, so check if an entry for the tsr route exists
                if let Some(pos) = n.child_position('/') {
                    let child = &n.children[pos];
                    r.tsr = (child.prefix == "/" && child.entry.is_some())
                        || (child.kind == NodeKind::CatchAll && child.catch_all_has_entry());
                }

                break;
            } else {
                // nothing found. we can recommend redirecting to the tsr route if it exists
                r.tsr = (path == "/" && has_entry(from))
                    || (prefix.len() == path.len() + 1
                        && prefix.ends_with('/')
                        && prefix.starts_with(path)
                        && n.entry.is_some());
                break;
            }
        }

        if r.handler.is_none() {
            r.params.clear();
        }

        Ok(r)
    }

    fn catch_all_has_entry(&self) -> bool {
        matches!(self.children.first(), Some(c) if c.entry.is_some())
    }

    /// Case-insensitive walk; appends the registered spelling of the matched path to `out`.
    ///
    /// On failure `out` is restored to its length on entry.
    fn find_fold(&self, path: &str, out: &mut String, fix_tsr: bool) -> bool {
        let mark = out.len();

        let rest = match strip_prefix_fold(path, &self.prefix) {
            Some(rest) => rest,
            None => {
                // the registered path may only differ by a trailing slash
                let fixed = fix_tsr
                    && self.entry.is_some()
                    && matches!(
                        self.prefix.strip_suffix('/').map(|p| strip_prefix_fold(path, p)),
                        Some(Some(""))
                    );
                if fixed {
                    out.push_str(&self.prefix);
                }
                return fixed;
            }
        };
        out.push_str(&self.prefix);

        if rest.is_empty() {
            if self.entry.is_some() {
                return true;
            }

            // try to fix the path by adding a trailing slash
            if fix_tsr {
                if let Some(pos) = self.child_position('/') {
                    let child = &self.children[pos];
                    if (child.prefix == "/" && child.entry.is_some())
                        || (child.kind == NodeKind::CatchAll && child.catch_all_has_entry())
                    {
                        out.push('/');
                        return true;
                    }
                }
            }

            out.truncate(mark);
            return false;
        }

        if self.wild_child {
            if let Some(child) = self.children.first() {
                if child.find_fold_wildcard(rest, out, fix_tsr) {
                    return true;
                }
            }
            out.truncate(mark);
            return false;
        }

        // upper and lower case spellings may live under different edges
        if self.children.iter().any(|c| c.find_fold(rest, out, fix_tsr)) {
            return true;
        }

        // redirect to the same path without the trailing slash if a leaf exists
        if fix_tsr && rest == "/" && self.entry.is_some() {
            return true;
        }

        out.truncate(mark);
        false
    }

    fn find_fold_wildcard(&self, path: &str, out: &mut String, fix_tsr: bool) -> bool {
        let mark = out.len();

        match self.kind {
            NodeKind::Param => {
                let end = path.find('/').unwrap_or_else(|| path.len());
                if end == 0 {
                    return false;
                }
                out.push_str(&path[..end]);

                if end < path.len() {
                    let found = match self.children.first() {
                        Some(child) => child.find_fold(&path[end..], out, fix_tsr),
                        None => fix_tsr && path.len() == end + 1,
                    };
                    if !found {
                        out.truncate(mark);
                    }
                    return found;
                }

                if self.entry.is_some() {
                    return true;
                }

                if let [child] = &self.children[..] {
                    if fix_tsr && child.prefix == "/" && child.entry.is_some() {
                        out.push('/');
                        return true;
                    }
                }

                out.truncate(mark);
                false
            }

            NodeKind::CatchAll if self.entry.is_some() => {
                out.push_str(path);
                true
            }

            _ => false,
        }
    }
}

/// Count the wildcard markers in `path`.
///
/// ```
/// use waymark::count_params;
///
/// assert_eq!(count_params("/user/:id/files/*path").unwrap(), 2);
/// assert!(count_params(&"/:p".repeat(256)).is_err());
/// ```
pub fn count_params(path: &str) -> Result<u8, InsertError> {
    let count = count_markers(path);

    u8::try_from(count).map_err(|_| InsertError::ParamCountOverflow {
        path: path.into(),
        count,
    })
}

fn count_markers(path: &str) -> usize {
    path.bytes().filter(|&c| c == b':' || c == b'*').count()
}

/// Wildcard count of a suffix of a validated pattern.
fn wildcard_count(path: &str) -> u8 {
    u8::try_from(count_markers(path)).unwrap_or(u8::MAX)
}

/// Check the syntax of a pattern, independent of any tree.
fn validate(path: &str) -> Result<(), InsertError> {
    if !path.starts_with('/') {
        return Err(InsertError::MissingLeadingSlash { path: path.into() });
    }
    count_params(path)?;

    let mut offset = 0;
    while let Some((i, wc, valid)) = find_wildcard(&path[offset..]) {
        if !valid {
            return Err(InsertError::InvalidWildcardSyntax {
                path: path.into(),
                wildcard: wc.into(),
            });
        }
        if wc.len() < 2 {
            return Err(InsertError::EmptyWildcardName {
                path: path.into(),
                wildcard: wc.into(),
            });
        }

        let start = offset + i;
        offset = start + wc.len();

        if wc.starts_with('*') {
            if offset != path.len() {
                return Err(InsertError::CatchAllNotAtEnd { path: path.into() });
            }
            if !path[..start].ends_with('/') {
                return Err(InsertError::MissingSlashBeforeCatchAll { path: path.into() });
            }
        }
    }

    Ok(())
}

fn duplicate(path: &str) -> InsertError {
    InsertError::DuplicateRoute { path: path.into() }
}

fn wildcard_conflict(full_path: &str, path: &str, c: char, existing: &str) -> InsertError {
    let wildcard = path.split('/').next().unwrap_or(path);

    if c == '*' {
        InsertError::CatchAllConflictsWithStaticChild {
            path: full_path.into(),
            wildcard: wildcard.into(),
        }
    } else {
        InsertError::RouteConflict {
            path: full_path.into(),
            segment: wildcard.into(),
            existing: existing.into(),
        }
    }
}

fn invalid_node<H>(parent: &Node<H>, found: Option<NodeKind>) -> MatchError {
    MatchError::InvalidNodeType {
        parent: parent.prefix.clone(),
        found,
    }
}

fn has_entry<H>(node: Option<&Node<H>>) -> bool {
    node.map_or(false, |n| n.entry.is_some())
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or_default()
}

/// Length in bytes of the longest common prefix of `a` and `b`, on a char boundary.
fn longest_common_prefix(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| cmp::min(a.len(), b.len()))
}

fn find_wildcard(path: &str) -> Option<(usize, &str, bool)> {
    // find start index
    for (start, c) in path.bytes().enumerate() {
        // wildcards start with ':' (param) or '*' (catch-all)
        if c != b':' && c != b'*' {
            continue;
        }

        // find end index or invalid chars
        let mut valid = true;
        for (end, c) in path[start + 1..].bytes().enumerate() {
            if c == b'/' {
                return Some((start, &path[start..start + 1 + end], valid));
            }

            if c == b':' || c == b'*' {
                valid = false;
            }
        }

        return Some((start, &path[start..], valid));
    }

    None
}

fn chars_eq_fold(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

/// Strip `prefix` off `path`, comparing characters case-insensitively.
fn strip_prefix_fold<'p>(path: &'p str, prefix: &str) -> Option<&'p str> {
    let mut rest = path.chars();

    for expected in prefix.chars() {
        match rest.next() {
            Some(c) if chars_eq_fold(c, expected) => {}
            _ => return None,
        }
    }

    Some(rest.as_str())
}
