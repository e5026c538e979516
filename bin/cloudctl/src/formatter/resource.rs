//! Uniform access to the fields of API objects for rendering.
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// An API object that can be rendered by formatters.
pub trait Resource: Serialize {
    /// Ordered names of the fields rendered for the object.
    const FIELDS: &'static [&'static str];

    /// Rendered values, in the same order as [`Resource::FIELDS`].
    fn values(&self) -> Vec<String>;
}

/// A rendered API object, ready for formatting.
pub struct Record {
    /// Serialised form of the object, for structured formats.
    pub document: Value,

    /// Names of the rendered fields.
    pub fields: &'static [&'static str],

    /// Rendered values of the fields.
    pub values: Vec<String>,
}

impl Record {
    /// Render a [`Resource`] into a record.
    pub fn from_resource<R: Resource>(item: &R) -> Result<Record> {
        let document = serde_json::to_value(item)?;
        Ok(Record {
            document,
            fields: R::FIELDS,
            values: item.values(),
        })
    }

    /// Values of the requested fields, in the requested order.
    pub fn select(&self, columns: &[&str]) -> Vec<String> {
        columns
            .iter()
            .map(|column| {
                self.fields
                    .iter()
                    .position(|field| field == column)
                    .and_then(|index| self.values.get(index))
                    .cloned()
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Serialised object with only the requested properties.
    ///
    /// Like [`columns`], unknown properties are ignored and the whole object is returned
    /// when none of the requested properties are known.
    pub fn select_document(self, properties: &[String]) -> Value {
        let fields = self.fields;
        let known: Vec<&String> = properties
            .iter()
            .filter(|property| fields.contains(&property.as_str()))
            .collect();
        if known.is_empty() {
            return self.document;
        }
        match self.document {
            Value::Object(mut object) => {
                let mut selected = serde_json::Map::new();
                for property in known {
                    if let Some(value) = object.remove(property.as_str()) {
                        selected.insert(property.clone(), value);
                    }
                }
                Value::Object(selected)
            }
            document => document,
        }
    }
}

/// Fields to render given the user requested properties.
///
/// Unknown properties are ignored and all fields are rendered if none are requested
/// or none of the requested ones are known.
pub fn columns(fields: &'static [&'static str], properties: &[String]) -> Vec<&'static str> {
    let selected: Vec<&'static str> = properties
        .iter()
        .filter_map(|property| fields.iter().copied().find(|field| field == property))
        .collect();
    match selected.is_empty() {
        true => fields.to_vec(),
        false => selected,
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::columns;
    use super::Record;
    use super::Resource;

    #[derive(Serialize)]
    struct Widget {
        id: i32,
        name: String,
        colour: String,
    }

    impl Resource for Widget {
        const FIELDS: &'static [&'static str] = &["id", "name", "colour"];

        fn values(&self) -> Vec<String> {
            vec![self.id.to_string(), self.name.clone(), self.colour.clone()]
        }
    }

    fn widget() -> Widget {
        Widget {
            id: 4,
            name: "gear".into(),
            colour: "red".into(),
        }
    }

    #[test]
    fn columns_follow_requested_order() {
        let properties = vec!["colour".to_string(), "missing".into(), "id".into()];
        assert_eq!(columns(Widget::FIELDS, &properties), vec!["colour", "id"]);
    }

    #[test]
    fn columns_default_to_all_fields() {
        assert_eq!(columns(Widget::FIELDS, &[]), vec!["id", "name", "colour"]);
        let unknown = vec!["missing".to_string()];
        assert_eq!(columns(Widget::FIELDS, &unknown), vec!["id", "name", "colour"]);
    }

    #[test]
    fn record_selects_values() {
        let record = Record::from_resource(&widget()).unwrap();
        assert_eq!(record.select(&["name", "id"]), vec!["gear", "4"]);
    }

    #[test]
    fn record_selects_document_properties() {
        let record = Record::from_resource(&widget()).unwrap();
        let properties = vec!["name".to_string()];
        assert_eq!(record.select_document(&properties), json!({"name": "gear"}));
    }

    #[test]
    fn record_document_ignores_unknown_properties() {
        let record = Record::from_resource(&widget()).unwrap();
        let properties = vec!["missing".to_string(), "colour".into()];
        assert_eq!(record.select_document(&properties), json!({"colour": "red"}));

        let record = Record::from_resource(&widget()).unwrap();
        let properties = vec!["missing".to_string()];
        assert_eq!(
            record.select_document(&properties),
            json!({"id": 4, "name": "gear", "colour": "red"}),
        );
    }
}
