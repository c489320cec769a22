use std::collections::BTreeMap;

use crate::keyword;
use crate::ordered::OrderedMap;
use crate::schema::Schema;

impl Schema {
    /// Visit this schema and every sub-schema depth-first, pre-order.
    ///
    /// The callback receives the JSON pointer of each node relative to this
    /// one (`""` for the root).
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&str, &Schema),
    {
        walk_at(self, String::new(), visit);
    }

    /// Number of nodes in the tree, the root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0usize;
        self.walk(&mut |_, _| count += 1);
        count
    }

    /// Direct sub-schemas with their pointer segments, in encode order.
    pub fn children(&self) -> Vec<(String, &Schema)> {
        let Schema::Object(object) = self else {
            return Vec::new();
        };

        let mut out = Vec::new();
        push_map(&mut out, keyword::DEFS, object.defs.as_ref());
        push_list(&mut out, keyword::ALL_OF, object.all_of.as_deref());
        push_list(&mut out, keyword::ANY_OF, object.any_of.as_deref());
        push_list(&mut out, keyword::ONE_OF, object.one_of.as_deref());
        push_single(&mut out, keyword::NOT, object.not.as_deref());
        push_single(&mut out, keyword::IF, object.if_.as_deref());
        push_single(&mut out, keyword::THEN, object.then.as_deref());
        push_single(&mut out, keyword::ELSE, object.else_.as_deref());
        push_map(
            &mut out,
            keyword::DEPENDENT_SCHEMAS,
            object.dependent_schemas.as_ref(),
        );
        push_list(&mut out, keyword::PREFIX_ITEMS, object.prefix_items.as_deref());
        push_single(&mut out, keyword::ITEMS, object.items.as_deref());
        push_single(&mut out, keyword::CONTAINS, object.contains.as_deref());
        push_ordered(&mut out, keyword::PROPERTIES, object.properties.as_ref());
        push_map(
            &mut out,
            keyword::PATTERN_PROPERTIES,
            object.pattern_properties.as_ref(),
        );
        push_single(
            &mut out,
            keyword::ADDITIONAL_PROPERTIES,
            object.additional_properties.as_deref(),
        );
        push_single(
            &mut out,
            keyword::PROPERTY_NAMES,
            object.property_names.as_deref(),
        );
        push_single(
            &mut out,
            keyword::CONTENT_SCHEMA,
            object.content_schema.as_deref(),
        );
        out
    }

    /// Greatest nesting depth below this node (`0` for a leaf).
    pub fn depth(&self) -> usize {
        self.children()
            .into_iter()
            .map(|(_, child)| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

fn walk_at<F>(schema: &Schema, pointer: String, visit: &mut F)
where
    F: FnMut(&str, &Schema),
{
    visit(&pointer, schema);
    for (segment, child) in schema.children() {
        walk_at(child, format!("{pointer}/{segment}"), visit);
    }
}

/// Escape a key for use as a JSON pointer segment.
pub fn escape_pointer_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn push_single<'a>(out: &mut Vec<(String, &'a Schema)>, key: &str, schema: Option<&'a Schema>) {
    if let Some(schema) = schema {
        out.push((key.to_string(), schema));
    }
}

fn push_list<'a>(out: &mut Vec<(String, &'a Schema)>, key: &str, schemas: Option<&'a [Schema]>) {
    if let Some(schemas) = schemas {
        for (index, schema) in schemas.iter().enumerate() {
            out.push((format!("{key}/{index}"), schema));
        }
    }
}

fn push_map<'a>(
    out: &mut Vec<(String, &'a Schema)>,
    key: &str,
    schemas: Option<&'a BTreeMap<String, Schema>>,
) {
    if let Some(schemas) = schemas {
        for (name, schema) in schemas {
            out.push((format!("{key}/{}", escape_pointer_segment(name)), schema));
        }
    }
}

fn push_ordered<'a>(
    out: &mut Vec<(String, &'a Schema)>,
    key: &str,
    schemas: Option<&'a OrderedMap<Schema>>,
) {
    if let Some(schemas) = schemas {
        for (name, schema) in schemas {
            out.push((format!("{key}/{}", escape_pointer_segment(name)), schema));
        }
    }
}
