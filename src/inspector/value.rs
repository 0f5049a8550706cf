//! Runtime value model.
//!
//! Values come in two shapes: immediates (`undefined`, `null`, booleans,
//! numbers, strings, bigints) that carry no identity, and references into a
//! [`Heap`] arena for everything that does (objects, arrays, maps, sets,
//! callables, symbols, exceptions, dates, patterns). Two references are the
//! same value exactly when their [`ObjectId`]s are equal, which is what the
//! walker's cycle guard relies on. Cycles are ordinary in this model: an
//! object can hold a `Ref` to itself without any ownership trickery.
//!
//! The inspector only ever borrows a `&Heap`; building and mutating values
//! is the host's business.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::error::{AccessError, ValueError};

/// Index of an identity-bearing value in a [`Heap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    /// Raw slot index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Rebuild an id from a raw slot index (e.g. from a serialized path).
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Arbitrary-precision integer literal, kept as normalized decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigIntLiteral(String);

impl BigIntLiteral {
    /// Parse an optionally signed run of decimal digits.
    ///
    /// Leading zeros are dropped and `-0` normalizes to `0`.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let trimmed = text.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValueError::InvalidBigInt(text.to_string()));
        }
        let digits = digits.trim_start_matches('0');
        let normalized = match (negative, digits.is_empty()) {
            (_, true) => "0".to_string(),
            (true, false) => format!("-{digits}"),
            (false, false) => digits.to_string(),
        };
        Ok(Self(normalized))
    }

    /// Decimal digits, with a leading `-` for negative values.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl From<i64> for BigIntLiteral {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<u64> for BigIntLiteral {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<i128> for BigIntLiteral {
    fn from(n: i128) -> Self {
        Self(n.to_string())
    }
}

/// A runtime value as supplied by the host.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    BigInt(BigIntLiteral),
    Ref(ObjectId),
}

impl Value {
    /// Heap identity, if this value has one.
    pub fn identity(&self) -> Option<ObjectId> {
        match self {
            Value::Ref(id) => Some(*id),
            _ => None,
        }
    }

    /// Strict sameness: references by identity, `NaN` equals itself and
    /// `+0` differs from `-0`.
    pub fn is_same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                (a.is_nan() && b.is_nan()) || (a == b && a.is_sign_negative() == b.is_sign_negative())
            }
            _ => self.is_same_zero(other),
        }
    }

    /// Sameness used for map keys and set members: like [`Value::is_same`]
    /// except that `+0` and `-0` collapse.
    pub fn is_same_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<BigIntLiteral> for Value {
    fn from(n: BigIntLiteral) -> Self {
        Value::BigInt(n)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::Ref(id)
    }
}

/// Key of an own property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Name(String),
    /// Symbol-keyed property; the id points at a `HeapObject::Symbol`.
    Symbol(ObjectId),
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Name(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Name(name)
    }
}

/// Computed property accessor. Returning `Err` models an accessor that
/// raises when read.
pub type Getter = Rc<dyn Fn(&Heap) -> Result<Value, AccessError>>;

/// Storage behind an own property.
#[derive(Clone)]
pub enum Slot {
    Data(Value),
    Accessor(Getter),
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Slot::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}

/// An own property of an object, callable or exception.
#[derive(Debug, Clone)]
pub struct Property {
    pub slot: Slot,
    pub enumerable: bool,
}

impl Property {
    /// Enumerable data property.
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            slot: Slot::Data(value.into()),
            enumerable: true,
        }
    }

    /// Non-enumerable data property.
    pub fn hidden(value: impl Into<Value>) -> Self {
        Self {
            slot: Slot::Data(value.into()),
            enumerable: false,
        }
    }

    /// Enumerable accessor property.
    pub fn getter(getter: impl Fn(&Heap) -> Result<Value, AccessError> + 'static) -> Self {
        Self {
            slot: Slot::Accessor(Rc::new(getter)),
            enumerable: true,
        }
    }
}

/// Own properties in declaration order.
pub type Properties = IndexMap<PropertyKey, Property>;

/// An identity-bearing value stored in the heap.
#[derive(Debug, Clone)]
pub enum HeapObject {
    Object {
        class_name: Option<String>,
        properties: Properties,
    },
    Array {
        elements: Vec<Value>,
    },
    Map {
        entries: Vec<(Value, Value)>,
    },
    Set {
        values: Vec<Value>,
    },
    Function {
        name: Option<String>,
        properties: Properties,
    },
    Symbol {
        description: Option<String>,
    },
    /// The message lives only in the own `message` property.
    Error {
        kind: String,
        properties: Properties,
    },
    Date(DateTime<Utc>),
    Pattern {
        source: String,
        flags: String,
    },
}

impl HeapObject {
    fn properties(&self) -> Option<&Properties> {
        match self {
            HeapObject::Object { properties, .. }
            | HeapObject::Function { properties, .. }
            | HeapObject::Error { properties, .. } => Some(properties),
            _ => None,
        }
    }

    fn properties_mut(&mut self) -> Option<&mut Properties> {
        match self {
            HeapObject::Object { properties, .. }
            | HeapObject::Function { properties, .. }
            | HeapObject::Error { properties, .. } => Some(properties),
            _ => None,
        }
    }
}

/// Arena owning every identity-bearing value.
#[derive(Debug, Default)]
pub struct Heap {
    objects: Vec<HeapObject>,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated slots.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Look up a slot; `None` for ids that were never allocated here.
    pub fn get(&self, id: ObjectId) -> Option<&HeapObject> {
        self.objects.get(id.0)
    }

    /// Store an object and return its identity.
    pub fn alloc(&mut self, object: HeapObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn new_object(&mut self) -> ObjectId {
        self.alloc(HeapObject::Object {
            class_name: None,
            properties: Properties::new(),
        })
    }

    /// Object created by a named constructor (`new Point()`).
    pub fn new_instance(&mut self, class_name: &str) -> ObjectId {
        self.alloc(HeapObject::Object {
            class_name: Some(class_name.to_string()),
            properties: Properties::new(),
        })
    }

    pub fn new_array(&mut self, elements: Vec<Value>) -> ObjectId {
        self.alloc(HeapObject::Array { elements })
    }

    pub fn new_map(&mut self) -> ObjectId {
        self.alloc(HeapObject::Map {
            entries: Vec::new(),
        })
    }

    pub fn new_set(&mut self) -> ObjectId {
        self.alloc(HeapObject::Set { values: Vec::new() })
    }

    pub fn new_function(&mut self, name: Option<&str>) -> ObjectId {
        self.alloc(HeapObject::Function {
            name: name.map(ToString::to_string),
            properties: Properties::new(),
        })
    }

    pub fn new_symbol(&mut self, description: Option<&str>) -> ObjectId {
        self.alloc(HeapObject::Symbol {
            description: description.map(ToString::to_string),
        })
    }

    /// Exception with a non-enumerable own `message` property.
    pub fn new_error(&mut self, kind: &str, message: &str) -> ObjectId {
        let mut properties = Properties::new();
        properties.insert(PropertyKey::from("message"), Property::hidden(message));
        self.alloc(HeapObject::Error {
            kind: kind.to_string(),
            properties,
        })
    }

    pub fn new_date(&mut self, at: DateTime<Utc>) -> ObjectId {
        self.alloc(HeapObject::Date(at))
    }

    pub fn new_pattern(&mut self, source: &str, flags: &str) -> ObjectId {
        self.alloc(HeapObject::Pattern {
            source: source.to_string(),
            flags: flags.to_string(),
        })
    }

    /// Define or replace an own property, keeping its original position
    /// when it already exists. Returns `false` if `id` cannot hold
    /// properties.
    pub fn define_property(
        &mut self,
        id: ObjectId,
        key: impl Into<PropertyKey>,
        property: Property,
    ) -> bool {
        match self
            .objects
            .get_mut(id.0)
            .and_then(HeapObject::properties_mut)
        {
            Some(properties) => {
                properties.insert(key.into(), property);
                true
            }
            None => false,
        }
    }

    /// Shorthand for an enumerable data property.
    pub fn set_property(
        &mut self,
        id: ObjectId,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> bool {
        self.define_property(id, key, Property::data(value))
    }

    /// Append to an array. Returns `false` if `id` is not an array.
    pub fn push(&mut self, id: ObjectId, value: impl Into<Value>) -> bool {
        match self.objects.get_mut(id.0) {
            Some(HeapObject::Array { elements }) => {
                elements.push(value.into());
                true
            }
            _ => false,
        }
    }

    /// Insert into a map; an existing key keeps its position and gets the
    /// new value. Returns `false` if `id` is not a map.
    pub fn map_insert(
        &mut self,
        id: ObjectId,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> bool {
        let (key, value) = (key.into(), value.into());
        match self.objects.get_mut(id.0) {
            Some(HeapObject::Map { entries }) => {
                match entries.iter_mut().find(|(k, _)| k.is_same_zero(&key)) {
                    Some(entry) => entry.1 = value,
                    None => entries.push((key, value)),
                }
                true
            }
            _ => false,
        }
    }

    /// Add a set member unless already present. Returns `false` if `id` is
    /// not a set.
    pub fn set_add(&mut self, id: ObjectId, value: impl Into<Value>) -> bool {
        let value = value.into();
        match self.objects.get_mut(id.0) {
            Some(HeapObject::Set { values }) => {
                if !values.iter().any(|v| v.is_same_zero(&value)) {
                    values.push(value);
                }
                true
            }
            _ => false,
        }
    }

    /// Own properties of an object, callable or exception.
    pub fn own_properties(&self, id: ObjectId) -> Option<&Properties> {
        self.get(id).and_then(HeapObject::properties)
    }

    /// Number of direct children without enumerating them.
    pub fn child_count(&self, id: ObjectId) -> usize {
        match self.get(id) {
            Some(HeapObject::Array { elements }) => elements.len(),
            Some(HeapObject::Map { entries }) => entries.len(),
            Some(HeapObject::Set { values }) => values.len(),
            Some(object) => object.properties().map_or(0, IndexMap::len),
            None => 0,
        }
    }

    /// Read one property slot, running its accessor if it has one.
    ///
    /// A panicking accessor is caught and reported as
    /// [`AccessError::Panicked`].
    pub fn read(&self, property: &Property) -> Result<Value, AccessError> {
        match &property.slot {
            Slot::Data(value) => Ok(value.clone()),
            Slot::Accessor(getter) => {
                match panic::catch_unwind(AssertUnwindSafe(|| getter(self))) {
                    Ok(result) => result,
                    Err(payload) => Err(AccessError::Panicked(panic_message(payload.as_ref()))),
                }
            }
        }
    }

    /// Description of a symbol, if `id` is one.
    pub fn symbol_description(&self, id: ObjectId) -> Option<Option<&str>> {
        match self.get(id) {
            Some(HeapObject::Symbol { description }) => Some(description.as_deref()),
            _ => None,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
