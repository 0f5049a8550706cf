//! Built-in sample value covering every tag, a cycle and a failing accessor.

use chrono::{TimeZone, Utc};

use super::error::AccessError;
use super::value::{BigIntLiteral, Heap, Property, PropertyKey, Value};

/// Title shown above the demo tree.
pub const DEMO_TITLE: &str = "tool result: fetch_user";

/// Allocate the demo value into `heap` and return its root.
pub fn build_demo(heap: &mut Heap) -> Value {
    let root = heap.new_object();

    heap.set_property(root, "id", 1042);
    heap.set_property(root, "name", "Ada Lovelace");
    heap.set_property(root, "active", true);
    heap.set_property(root, "manager", Value::Null);
    heap.set_property(root, "nickname", Value::Undefined);
    heap.set_property(root, "score", f64::NAN);
    heap.set_property(
        root,
        "balance",
        BigIntLiteral::from(123_456_789_012_345_678_901_i128),
    );

    let created = Utc
        .with_ymd_and_hms(2024, 3, 9, 14, 5, 30)
        .single()
        .unwrap_or_default();
    let created = heap.new_date(created);
    heap.set_property(root, "created", created);

    let email = heap.new_pattern(r"^[^@\s]+@[^@\s]+$", "i");
    heap.set_property(root, "emailPattern", email);

    let tags = heap.new_array(vec!["admin".into(), "math".into(), "poet".into()]);
    heap.set_property(root, "tags", tags);

    let prefs = heap.new_map();
    heap.map_insert(prefs, "theme", "dark");
    heap.map_insert(prefs, "fontSize", 14);
    heap.set_property(root, "preferences", prefs);

    let roles = heap.new_set();
    heap.set_add(roles, "read");
    heap.set_add(roles, "write");
    heap.set_property(root, "roles", roles);

    let format = heap.new_function(Some("formatName"));
    heap.set_property(root, "format", format);
    let utils = heap.new_function(Some("utils"));
    heap.set_property(utils, "version", "2.1.0");
    heap.set_property(root, "utils", utils);

    let token = heap.new_symbol(Some("session"));
    heap.define_property(root, PropertyKey::Symbol(token), Property::data(token));

    let error = heap.new_error("RangeError", "quota exceeded");
    heap.set_property(error, "code", 429);
    heap.set_property(root, "lastError", error);

    let profile = heap.new_instance("Profile");
    heap.set_property(profile, "owner", root);
    heap.set_property(root, "profile", profile);

    heap.define_property(
        root,
        "secret",
        Property::getter(|_| Err(AccessError::thrown("permission denied"))),
    );
    heap.define_property(root, "internal", Property::hidden("not enumerable"));

    Value::Ref(root)
}
