use rutils::container::{Container, DynamicContainer, Value};

fn container(slots: &[(&str, Option<i64>)]) -> Container<String, i64> {
    slots.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn key(k: &str) -> String {
    k.to_string()
}

#[test]
fn merge_overwrites_and_inserts() {
    let mut dst = container(&[("a", Some(1)), ("b", Some(2))]);
    let src = container(&[("b", Some(3)), ("c", Some(4))]);

    dst.merge(&src);

    assert_eq!(dst, container(&[("a", Some(1)), ("b", Some(3)), ("c", Some(4))]));
    assert_eq!(src, container(&[("b", Some(3)), ("c", Some(4))]), "source must be untouched");
}

#[test]
fn merge_copies_absent_slots() {
    let mut dst = container(&[("a", Some(1))]);
    dst.merge(&container(&[("a", None)]));

    assert!(dst.contains_key(&key("a")));
    assert_eq!(dst.get(&key("a")), None);
    assert_eq!(dst.slot(&key("a")), Some(None));
}

#[test]
fn compact_removes_absent_slots() {
    let mut map = container(&[("a", Some(1)), ("b", None)]);
    map.compact();
    assert_eq!(map, container(&[("a", Some(1))]));

    let mut empty: Container<String, i64> = Container::new();
    empty.compact();
    assert!(empty.is_empty());
}

#[test]
fn zero_is_not_absence() {
    let mut map = container(&[("zero", Some(0)), ("none", None)]);
    map.compact();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&key("zero")), Some(&0));
}

#[test]
fn keys_and_values_snapshot_every_slot() {
    let map = container(&[("a", Some(1)), ("b", None), ("c", Some(3))]);

    let mut keys = map.keys().into_vec();
    keys.sort();
    assert_eq!(keys, vec!["a", "b", "c"]);

    let mut values = map.values().into_vec();
    values.sort();
    assert_eq!(values, vec![None, Some(1), Some(3)]);

    let empty: Container<String, i64> = Container::default();
    assert!(empty.keys().is_empty());
    assert!(empty.values().is_empty());
}

#[test]
fn fetch_values_follows_requested_order() {
    let map = container(&[("a", Some(1)), ("b", None), ("c", Some(3))]);

    let requested = [key("c"), key("missing"), key("b"), key("a")];
    assert_eq!(map.fetch_values(&requested).as_slice(), &[3, 1]);

    let none: [String; 0] = [];
    assert!(map.fetch_values(&none).is_empty());
}

#[test]
fn equal_compares_every_slot() {
    let a = container(&[("a", Some(1)), ("b", Some(2))]);

    assert!(a.equal(&container(&[("b", Some(2)), ("a", Some(1))])));
    assert!(!a.equal(&container(&[("a", Some(1)), ("b", Some(3))])));
    assert!(!a.equal(&container(&[("a", Some(1))])));
    assert!(!a.equal(&container(&[("a", Some(1)), ("c", Some(2))])));

    let absent_b = container(&[("a", Some(1)), ("b", None)]);
    let absent_c = container(&[("a", Some(1)), ("c", None)]);
    assert!(!absent_b.equal(&absent_c), "an absent slot is not a missing key");
    assert!(absent_b.equal(&absent_b.clone()));

    let empty: Container<String, i64> = Container::new();
    assert!(empty.equal(&Container::new()));
}

#[test]
fn insert_remove_and_lookup() {
    let mut map: Container<String, i64> = Container::new();
    map.insert(key("a"), 1_i64);
    map.insert_absent(key("b"));
    map.set(key("c"), Some(3));

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&key("a")), Some(&1));
    assert_eq!(map.get(&key("b")), None);
    assert_eq!(map.slot(&key("missing")), None);

    assert_eq!(map.remove(&key("a")), Some(Some(1)));
    assert_eq!(map.remove(&key("b")), Some(None));
    assert_eq!(map.remove(&key("a")), None);
    assert_eq!(map.iter().count(), 1);
}

#[test]
fn dynamic_container_holds_mixed_values() {
    let mut map = DynamicContainer::new();
    map.insert(key("name"), "rutils");
    map.insert(key("stars"), 5_i64);
    map.insert(key("ratio"), 0.5_f64);
    map.insert(key("tags"), vec!["a", "b"]);
    map.insert_absent(key("owner"));

    let other = DynamicContainer::from([(key("stars"), Some(Value::Integer(6)))]);
    map.merge(&other);
    map.compact();

    assert_eq!(map.len(), 4);
    assert_eq!(map.get(&key("stars")), Some(&Value::Integer(6)));
    assert_eq!(
        map.get(&key("tags")),
        Some(&Value::List(vec![Value::Text("a".into()), Value::Text("b".into())]))
    );
    assert_eq!(
        map.fetch_values(&[key("name"), key("owner")]).into_vec(),
        vec![Value::Text("rutils".into())]
    );
}
