use mongodb::bson::Bson;
use serde::Deserialize;
use serde::de::{self, Deserializer};
use std::fmt;

/// Shown in place of a missing or null `name`.
pub const UNNAMED: &str = "(unnamed)";


/// A document from the menu items collection. Only the fields the audit
/// looks at are decoded; everything else in the document is ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItem {
    #[serde(default, deserialize_with = "deserialize_label")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_image_ref")]
    pub image: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, image: Option<&str>) -> Self {
        Self {
            name: Some(name.into()),
            image: image.map(String::from),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

// The name is only a label: strings pass through, null is dropped, and any
// other scalar is rendered as-is.
fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) | Some(Bson::Undefined) => None,
        Some(Bson::String(name)) => Some(name),
        Some(other) => Some(other.to_string()),
    })
}

// Falsy values (null, false, 0, NaN, "") all mean "no image". A string is
// kept verbatim; any other truthy value is rejected.
fn deserialize_image_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) | Some(Bson::Undefined) => Ok(None),
        Some(Bson::Boolean(false)) | Some(Bson::Int32(0)) | Some(Bson::Int64(0)) => Ok(None),
        Some(Bson::Double(value)) if value == 0.0 || value.is_nan() => Ok(None),
        Some(Bson::String(image)) if image.is_empty() => Ok(None),
        Some(Bson::String(image)) => Ok(Some(image)),
        Some(other) => Err(de::Error::custom(format!(
            "image must be a string, found {:?}",
            other.element_type()
        ))),
    }
}

/// Where an item's image is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// `/api/images/<id>`, streamed out of GridFS.
    GridFs,
    /// Any other root-relative path, served from the public folder.
    Public,
    /// No image set.
    None,
    /// Set, but not root-relative (absolute URLs, bare filenames). Excluded
    /// from the three report counters.
    Unclassified,
}

impl ImageSource {
    pub fn label(self) -> &'static str {
        match self {
            ImageSource::GridFs => "GridFS",
            ImageSource::Public => "Public",
            ImageSource::None => "None",
            ImageSource::Unclassified => "Unclassified",
        }
    }

    /// Only served images are worth showing as samples.
    pub fn is_sampled(self) -> bool {
        matches!(self, ImageSource::GridFs | ImageSource::Public)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub name: String,
    pub image: String,
    pub category: ImageSource,
}


// Built once per run by the classifier and handed to the formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub total: usize,
    pub gridfs_count: usize,
    pub public_count: usize,
    pub none_count: usize,
    pub unclassified_count: usize,
    pub samples: Vec<Sample>,
}

impl ClassificationResult {
    /// Sum of the three reported counters. Smaller than `total` whenever
    /// unclassified images are present.
    pub fn counted(&self) -> usize {
        self.gridfs_count + self.public_count + self.none_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn decodes_missing_and_null_image_as_none() {
        let missing: MenuItem = bson::from_document(doc! { "name": "Tagine" }).unwrap();
        assert_eq!(missing.image, None);

        let null: MenuItem =
            bson::from_document(doc! { "name": "Harira", "image": bson::Bson::Null }).unwrap();
        assert_eq!(null.image, None);
    }

    #[test]
    fn falsy_image_values_decode_as_none() {
        for image in [
            bson::Bson::Boolean(false),
            bson::Bson::Int32(0),
            bson::Bson::Int64(0),
            bson::Bson::Double(0.0),
            bson::Bson::Double(f64::NAN),
            bson::Bson::String(String::new()),
        ] {
            let item: MenuItem =
                bson::from_document(doc! { "name": "Msemen", "image": image.clone() }).unwrap();
            assert_eq!(item.image, None, "image {image:?} should count as missing");
        }
    }

    #[test]
    fn truthy_non_string_image_is_rejected() {
        let err = bson::from_document::<MenuItem>(doc! { "name": "Briouat", "image": true })
            .unwrap_err();
        assert!(err.to_string().contains("image must be a string"));

        assert!(bson::from_document::<MenuItem>(doc! { "name": "Briouat", "image": 7 }).is_err());
    }

    #[test]
    fn null_or_missing_name_uses_placeholder() {
        let null: MenuItem =
            bson::from_document(doc! { "name": bson::Bson::Null, "image": "/x.jpg" }).unwrap();
        assert_eq!(null.name, None);
        assert_eq!(null.display_name(), UNNAMED);
        assert_eq!(null.image.as_deref(), Some("/x.jpg"));

        let missing: MenuItem = bson::from_document(doc! { "image": "/x.jpg" }).unwrap();
        assert_eq!(missing.display_name(), UNNAMED);

        let numeric: MenuItem = bson::from_document(doc! { "name": 42 }).unwrap();
        assert_eq!(numeric.display_name(), "42");
    }

    #[test]
    fn ignores_unrelated_fields() {
        let item: MenuItem = bson::from_document(doc! {
            "_id": bson::oid::ObjectId::new(),
            "name": "Couscous",
            "price": 12.5,
            "image": "/api/images/abc123",
        })
        .unwrap();
        assert_eq!(item, MenuItem::new("Couscous", Some("/api/images/abc123")));
    }

    #[test]
    fn labels_match_report_wording() {
        assert_eq!(ImageSource::GridFs.to_string(), "GridFS");
        assert_eq!(ImageSource::Public.to_string(), "Public");
        assert!(!ImageSource::None.is_sampled());
        assert!(!ImageSource::Unclassified.is_sampled());
    }
}
