use crate::app::models::{ClassificationResult, ImageSource, MenuItem, Sample};
use tracing::{debug, warn};

pub const MAX_SAMPLES: usize = 5;

// Evaluated top to bottom; the first matching prefix wins, so the more
// specific prefix has to come first.
const PREFIX_RULES: &[(&str, ImageSource)] = &[
    ("/api/images/", ImageSource::GridFs),
    ("/", ImageSource::Public),
];

/// Classify a single image reference.
pub fn classify(image: Option<&str>) -> ImageSource {
    let image = match image {
        Some(image) if !image.is_empty() => image,
        _ => return ImageSource::None,
    };

    PREFIX_RULES
        .iter()
        .find(|(prefix, _)| image.starts_with(prefix))
        .map(|(_, source)| *source)
        .unwrap_or(ImageSource::Unclassified)
}

/// Classify every item in order, counting per source and keeping the first
/// `MAX_SAMPLES` served images (GridFS and public folder share the cap).
pub fn tally(items: &[MenuItem]) -> ClassificationResult {
    let mut result = ClassificationResult {
        total: items.len(),
        ..Default::default()
    };

    for item in items {
        let source = classify(item.image.as_deref());
        match source {
            ImageSource::GridFs => result.gridfs_count += 1,
            ImageSource::Public => result.public_count += 1,
            ImageSource::None => result.none_count += 1,
            ImageSource::Unclassified => {
                result.unclassified_count += 1;
                debug!(name = item.display_name(), image = ?item.image, "image is not root-relative");
            }
        }

        if source.is_sampled() && result.samples.len() < MAX_SAMPLES {
            if let Some(image) = &item.image {
                result.samples.push(Sample {
                    name: item.display_name().to_string(),
                    image: image.clone(),
                    category: source,
                });
            }
        }
    }

    if result.unclassified_count > 0 {
        warn!(
            "{} of {} menu items have an image that is neither GridFS nor public; they are left out of the breakdown",
            result.unclassified_count, result.total
        );
    }

    result
}
