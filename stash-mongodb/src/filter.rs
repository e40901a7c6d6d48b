//! Rendering compiled predicates as MongoDB filter documents.
//!
//! Each [`Predicate`] becomes one document and the list is wrapped in a
//! single `$and`:
//!
//! ```rust
//! use stash_filter::{Bounds, FilterCompiler, FilterInput};
//! use stash_mongodb::filter::to_query;
//! use bson::doc;
//!
//! let input = FilterInput {
//!     league: Some("Standard".into()),
//!     item_level: Bounds::between(10, 60),
//!     ..Default::default()
//! };
//! let predicates = FilterCompiler::default().compile(&input).unwrap();
//!
//! assert_eq!(
//!     to_query(&predicates),
//!     doc! { "$and": [
//!         { "league": "Standard" },
//!         { "ilvl": { "$gte": 10_i64, "$lte": 60_i64 } },
//!     ] }
//! );
//! ```

use bson::{Bson, Document, doc};
use stash_filter::{Clause, FilterValue, Operator, Predicate};

/// Builder for MongoDB filter documents.
///
/// ```rust,ignore
/// use stash_mongodb::FilterBuilder;
///
/// let filter = FilterBuilder::new()
///     .eq("league", "Standard")
///     .range("ilvl", 10, 60)
///     .contains_ci("name", "tabula")
///     .build();
///
/// // { "league": "Standard", "ilvl": { "$gte": 10, "$lte": 60 },
/// //   "name": { "$regex": "tabula", "$options": "i" } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    doc: Document,
}

impl FilterBuilder {
    /// Create a new empty filter builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter builder from an existing document.
    pub fn from_doc(doc: Document) -> Self {
        Self { doc }
    }

    /// Add an equality condition.
    pub fn eq(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.doc.insert(field, value.into());
        self
    }

    /// Add a greater-than-or-equal condition.
    pub fn gte(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.doc.insert(field, doc! { "$gte": value.into() });
        self
    }

    /// Add a less-than-or-equal condition.
    pub fn lte(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.doc.insert(field, doc! { "$lte": value.into() });
        self
    }

    /// Add an inclusive range condition.
    pub fn range(mut self, field: &str, gte: impl Into<Bson>, lte: impl Into<Bson>) -> Self {
        self.doc
            .insert(field, doc! { "$gte": gte.into(), "$lte": lte.into() });
        self
    }

    /// Add an "in" condition (value in array).
    pub fn in_array(mut self, field: &str, values: Vec<impl Into<Bson>>) -> Self {
        let bson_values: Vec<Bson> = values.into_iter().map(Into::into).collect();
        self.doc.insert(field, doc! { "$in": bson_values });
        self
    }

    /// Add a regex condition with options.
    pub fn regex_with_options(mut self, field: &str, pattern: &str, options: &str) -> Self {
        self.doc
            .insert(field, doc! { "$regex": pattern, "$options": options });
        self
    }

    /// Add a case-insensitive literal substring condition.
    pub fn contains_ci(self, field: &str, text: &str) -> Self {
        let pattern = regex_lite::escape(text);
        self.regex_with_options(field, &pattern, "i")
    }

    /// Add an exists condition.
    pub fn exists(mut self, field: &str, exists: bool) -> Self {
        self.doc.insert(field, doc! { "$exists": exists });
        self
    }

    /// Combine with AND ($and).
    pub fn and(mut self, conditions: Vec<Document>) -> Self {
        self.doc.insert("$and", conditions);
        self
    }

    /// Add a compiled clause.
    pub fn clause(self, clause: &Clause) -> Self {
        let field = clause.path.as_str();
        match &clause.op {
            Operator::Equals(v) => self.eq(field, value_to_bson(v)),
            Operator::ContainsCi(text) => self.contains_ci(field, text),
            Operator::Gte(v) => self.gte(field, value_to_bson(v)),
            Operator::Lte(v) => self.lte(field, value_to_bson(v)),
            Operator::Range { gte, lte } => {
                self.range(field, value_to_bson(gte), value_to_bson(lte))
            }
            Operator::InSet(values) => self.in_array(field, values.to_vec()),
            Operator::Exists => self.exists(field, true),
        }
    }

    /// Build the filter document.
    pub fn build(self) -> Document {
        self.doc
    }

    /// Check if the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }
}

/// Convert a filter operand to BSON.
pub fn value_to_bson(value: &FilterValue) -> Bson {
    match value {
        FilterValue::Bool(v) => Bson::Boolean(*v),
        FilterValue::Int(v) => Bson::Int64(*v),
        FilterValue::Float(v) => Bson::Double(*v),
        FilterValue::String(v) => Bson::String(v.clone()),
    }
}

/// Render one predicate; the anchor clause and the primary clause share a document.
pub fn predicate_document(predicate: &Predicate) -> Document {
    predicate
        .clauses()
        .fold(FilterBuilder::new(), FilterBuilder::clause)
        .build()
}

/// Render a predicate list as `{"$and": [...]}`.
///
/// An empty list renders to `{}`, which matches every document; MongoDB
/// rejects an empty `$and` array.
pub fn to_query(predicates: &[Predicate]) -> Document {
    if predicates.is_empty() {
        return all();
    }
    FilterBuilder::new()
        .and(predicates.iter().map(predicate_document).collect())
        .build()
}

/// Create an empty filter (matches all documents).
pub fn all() -> Document {
    doc! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stash_filter::{AttributePath, MemberSet};

    fn predicate(path: &'static str, op: Operator) -> Predicate {
        Predicate::new(AttributePath::fixed(path), op)
    }

    #[test]
    fn test_filter_builder_eq() {
        let filter = FilterBuilder::new()
            .eq("league", "Standard")
            .eq("corrupted", true)
            .build();

        assert_eq!(filter.get_str("league").unwrap(), "Standard");
        assert!(filter.get_bool("corrupted").unwrap());
    }

    #[test]
    fn test_filter_builder_range() {
        let filter = FilterBuilder::new().range("ilvl", 10, 60).build();
        let ilvl = filter.get_document("ilvl").unwrap();
        assert_eq!(ilvl.get_i32("$gte").unwrap(), 10);
        assert_eq!(ilvl.get_i32("$lte").unwrap(), 60);
    }

    #[test]
    fn test_contains_ci_escapes_pattern() {
        let filter = FilterBuilder::new().contains_ci("name", "Kaom's (Heart)").build();
        let name = filter.get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), r"Kaom's \(Heart\)");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_render_operators() {
        let cases = [
            (
                predicate("league", Operator::Equals("Standard".into())),
                doc! { "league": "Standard" },
            ),
            (
                predicate("ilvl", Operator::Gte(10.into())),
                doc! { "ilvl": { "$gte": 10_i64 } },
            ),
            (
                predicate("properties.Armour", Operator::Lte(500.0.into())),
                doc! { "properties.Armour": { "$lte": 500.0 } },
            ),
            (
                predicate("sockets.link", Operator::InSet(MemberSet::from_slice(&[0, 1, 2, 3]))),
                doc! { "sockets.link": { "$in": [0_i64, 1_i64, 2_i64, 3_i64] } },
            ),
            (
                predicate("Mods.Increased Physical Damage", Operator::Exists),
                doc! { "Mods.Increased Physical Damage": { "$exists": true } },
            ),
        ];

        for (predicate, expected) in cases {
            assert_eq!(predicate_document(&predicate), expected);
        }
    }

    #[test]
    fn test_render_anchored_price() {
        let p = Predicate::anchored(
            Clause::new(AttributePath::fixed("Price.Currency"), Operator::Equals("chaos".into())),
            AttributePath::fixed("Price.Number"),
            Operator::Range {
                gte: 1.0.into(),
                lte: 5.0.into(),
            },
        );
        assert_eq!(
            predicate_document(&p),
            doc! { "Price.Currency": "chaos", "Price.Number": { "$gte": 1.0, "$lte": 5.0 } }
        );
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(to_query(&[]), doc! {});
        assert!(FilterBuilder::from_doc(all()).is_empty());
    }

    #[test]
    fn test_query_wraps_in_and() {
        let query = to_query(&[
            predicate("corrupted", Operator::Equals(true.into())),
            predicate("name", Operator::ContainsCi("belly".into())),
        ]);
        let and = query.get_array("$and").unwrap();
        assert_eq!(and.len(), 2);
        assert_eq!(and[0], Bson::Document(doc! { "corrupted": true }));
    }
}
