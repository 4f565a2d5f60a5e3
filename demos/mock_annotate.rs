//! Mock annotation example for tripmap-rs
//!
//! Runs the annotation pass in memory with mock URLs, the equivalent of
//! `MOCK=true tripmap-cli annotate` without touching any files.

use serde_json::{json, Value};
use tripmap_core::annotate::{annotate_records, AnnotateOptions, NoLookup};
use tripmap_core::loader::RawRecord;

fn record(name: &str, location: &str, image: Value) -> RawRecord {
    match json!({ "name": name, "location": location, "image": image }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn main() {
    let mut records = vec![
        record("Château de Beynac", "Beynac-et-Cazenac, France", Value::Null),
        record("Gouffre de Padirac", "Padirac, France", json!("https://img.example/padirac.jpg")),
        record("Jardins de Marqueyssac", "Vézac, France", Value::Null),
    ];

    let opts = AnnotateOptions { mock: true, no_limit: false };
    let stats = annotate_records(&mut records, &NoLookup, &opts);

    println!("total={} skipped={} annotated={}", stats.total, stats.skipped, stats.annotated);
    for r in &records {
        println!("{} -> {}", r["name"], r["image"]);
    }
}
