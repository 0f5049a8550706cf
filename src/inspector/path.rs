//! Structural node paths.
//!
//! A [`NodePath`] is the sequence of keys walked from the root to a node and
//! is the only identity the expansion store knows about. Its string form is
//! what hosts and the CLI pass back in to toggle nodes:
//!
//! ```text
//! $                 root
//! $.user.name       identifier-like property names
//! $["content-type"] any other property name (JSON string literal)
//! $.items[3]        list index
//! $.headers[#0]     n-th entry of a map or set
//! $[@7]             property keyed by the symbol at heap slot 7
//! ```

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::{Serialize, Serializer};

use super::error::PathParseError;
use super::value::ObjectId;

fn re_identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex"))
}

/// One step from a node to a child.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathKey {
    /// Position in an ordered list.
    Index(usize),
    /// Named own property.
    Name(String),
    /// Position in a map's or set's insertion order.
    Entry(usize),
    /// Symbol-keyed own property.
    Symbol(ObjectId),
}

/// Root-relative position of a node.
///
/// Paths share their prefixes: [`NodePath::child`] links to the parent
/// instead of copying it, so extending, cloning and hashing a path cost the
/// same at any depth.
#[derive(Clone, Default)]
pub struct NodePath(Option<Arc<Step>>);

struct Step {
    parent: NodePath,
    key: PathKey,
    depth: usize,
    /// Hash of every key from the root down to this one.
    hash: u64,
}

impl NodePath {
    /// The root path `$`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the child reached through `key`.
    pub fn child(&self, key: PathKey) -> Self {
        let mut hasher = DefaultHasher::new();
        self.chain_hash().hash(&mut hasher);
        key.hash(&mut hasher);
        Self(Some(Arc::new(Step {
            parent: self.clone(),
            key,
            depth: self.depth() + 1,
            hash: hasher.finish(),
        })))
    }

    /// Number of keys; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.0.as_ref().map_or(0, |step| step.depth)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }

    /// Path one level up; `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.0.as_ref().map(|step| step.parent.clone())
    }

    /// Keys from the root down.
    pub fn keys(&self) -> Vec<&PathKey> {
        let mut keys = Vec::with_capacity(self.depth());
        let mut cursor = self;
        while let Some(step) = &cursor.0 {
            keys.push(&step.key);
            cursor = &step.parent;
        }
        keys.reverse();
        keys
    }

    /// Whether `self` is `other` or one of its ancestors.
    pub fn is_prefix_of(&self, other: &NodePath) -> bool {
        let mut cursor = other;
        while cursor.depth() > self.depth() {
            match &cursor.0 {
                Some(step) => cursor = &step.parent,
                None => return false,
            }
        }
        cursor == self
    }

    fn chain_hash(&self) -> u64 {
        self.0.as_ref().map_or(0, |step| step.hash)
    }

    fn from_keys(keys: impl IntoIterator<Item = PathKey>) -> Self {
        keys.into_iter()
            .fold(Self::root(), |path, key| path.child(key))
    }
}

impl PartialEq for NodePath {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (&a.0, &b.0) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    if Arc::ptr_eq(x, y) {
                        return true;
                    }
                    if x.depth != y.depth || x.hash != y.hash || x.key != y.key {
                        return false;
                    }
                    a = &x.parent;
                    b = &y.parent;
                }
                _ => return false,
            }
        }
    }
}

impl Eq for NodePath {}

impl Hash for NodePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.depth());
        state.write_u64(self.chain_hash());
    }
}

impl Drop for NodePath {
    // Unlink iteratively so dropping a very deep path cannot overflow.
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(step) = next {
            next = match Arc::try_unwrap(step) {
                Ok(mut step) => step.parent.0.take(),
                Err(_) => None,
            };
        }
    }
}

impl fmt::Debug for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodePath({self})")
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for key in self.keys() {
            match key {
                PathKey::Index(i) => write!(f, "[{i}]")?,
                PathKey::Entry(i) => write!(f, "[#{i}]")?,
                PathKey::Symbol(id) => write!(f, "[@{}]", id.index())?,
                PathKey::Name(name) if re_identifier().is_match(name) => write!(f, ".{name}")?,
                PathKey::Name(name) => {
                    let quoted = serde_json::to_string(name).map_err(|_| fmt::Error)?;
                    write!(f, "[{quoted}]")?;
                }
            }
        }
        Ok(())
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for NodePath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with('$') {
            return Err(PathParseError::MissingRoot(s.to_string()));
        }
        let invalid = |offset: usize, reason: &'static str| PathParseError::Invalid {
            path: s.to_string(),
            offset,
            reason,
        };

        let mut keys = Vec::new();
        let mut pos = 1;
        while pos < s.len() {
            let tail = &s[pos..];
            if let Some(after_dot) = tail.strip_prefix('.') {
                let len = after_dot
                    .find(['.', '['])
                    .unwrap_or(after_dot.len());
                let name = &after_dot[..len];
                if name.is_empty() {
                    return Err(invalid(pos + 1, "empty property name"));
                }
                if !re_identifier().is_match(name) {
                    return Err(invalid(pos + 1, "property name must be quoted"));
                }
                keys.push(PathKey::Name(name.to_string()));
                pos += 1 + len;
            } else if let Some(inner) = tail.strip_prefix('[') {
                let (key, consumed) = parse_bracket(inner)
                    .map_err(|reason| invalid(pos + 1, reason))?;
                keys.push(key);
                pos += 1 + consumed;
            } else {
                return Err(invalid(pos, "expected '.' or '['"));
            }
        }
        Ok(Self::from_keys(keys))
    }
}

/// Parse the text after `[`, returning the key and bytes consumed including
/// the closing `]`.
fn parse_bracket(inner: &str) -> Result<(PathKey, usize), &'static str> {
    if inner.starts_with('"') {
        let mut stream =
            serde_json::Deserializer::from_str(inner).into_iter::<String>();
        let name = match stream.next() {
            Some(Ok(name)) => name,
            _ => return Err("malformed quoted name"),
        };
        let end = stream.byte_offset();
        return match inner[end..].strip_prefix(']') {
            Some(_) => Ok((PathKey::Name(name), end + 1)),
            None => Err("missing ']'"),
        };
    }

    let close = inner.find(']').ok_or("missing ']'")?;
    let body = &inner[..close];
    let parse_num = |digits: &str| {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err("expected a decimal number");
        }
        digits.parse::<usize>().map_err(|_| "number out of range")
    };
    let key = if let Some(digits) = body.strip_prefix('#') {
        PathKey::Entry(parse_num(digits)?)
    } else if let Some(digits) = body.strip_prefix('@') {
        PathKey::Symbol(ObjectId::from_index(parse_num(digits)?))
    } else {
        PathKey::Index(parse_num(body)?)
    };
    Ok((key, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(keys: Vec<PathKey>) -> NodePath {
        NodePath::from_keys(keys)
    }

    #[test]
    fn test_display() {
        assert_eq!(NodePath::root().to_string(), "$");
        let p = path(vec![
            PathKey::Name("user".into()),
            PathKey::Name("content-type".into()),
            PathKey::Index(3),
            PathKey::Entry(0),
            PathKey::Symbol(ObjectId::from_index(7)),
        ]);
        assert_eq!(p.to_string(), r#"$.user["content-type"][3][#0][@7]"#);
    }

    #[test]
    fn test_parse_roundtrip_awkward_names() {
        for name in ["", "a.b", "x]y", "quo\"te", "0lead", "ünï", "[#1]"] {
            let p = path(vec![PathKey::Name(name.into()), PathKey::Index(1)]);
            let parsed: NodePath = p.to_string().parse().unwrap();
            assert_eq!(parsed, p, "name {name:?}");
        }
    }

    #[test]
    fn test_parse_simple() {
        let parsed: NodePath = "$.b.c".parse().unwrap();
        assert_eq!(
            parsed,
            path(vec![PathKey::Name("b".into()), PathKey::Name("c".into())])
        );
        assert!("$".parse::<NodePath>().unwrap().is_root());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "a.b".parse::<NodePath>(),
            Err(PathParseError::MissingRoot(_))
        ));
        for bad in ["$.", "$[", "$[x]", "$[#]", "$[1", "$x", "$[\"a\"", "$.a-b"] {
            assert!(
                matches!(bad.parse::<NodePath>(), Err(PathParseError::Invalid { .. })),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn test_depth_and_parent() {
        let p = path(vec![PathKey::Name("a".into()), PathKey::Index(2)]);
        assert_eq!(p.depth(), 2);
        let parent = p.parent().unwrap();
        assert_eq!(parent.to_string(), "$.a");
        assert!(parent.is_prefix_of(&p));
        assert!(!p.is_prefix_of(&parent));
        assert_eq!(NodePath::root().parent(), None);
    }

    #[test]
    fn test_equal_paths_built_separately() {
        let a = path(vec![PathKey::Name("x".into()), PathKey::Index(4)]);
        let b: NodePath = "$.x[4]".parse().unwrap();
        let c = path(vec![PathKey::Name("x".into()), PathKey::Index(5)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a.parent().unwrap(), a);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
        assert_eq!(b.keys(), vec![&PathKey::Name("x".into()), &PathKey::Index(4)]);
    }

    #[test]
    fn test_deep_path_is_cheap_to_build_and_drop() {
        let deep = (0..200_000).fold(NodePath::root(), |p, i| p.child(PathKey::Index(i % 3)));
        assert_eq!(deep.depth(), 200_000);
        let sibling = deep.parent().unwrap().child(PathKey::Index(1));
        assert!(deep.parent().unwrap().is_prefix_of(&sibling));
        drop(sibling);
        drop(deep);
    }

    #[test]
    fn test_serialize_as_string() {
        let p = path(vec![PathKey::Index(0)]);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"$[0]\"");
    }
}
