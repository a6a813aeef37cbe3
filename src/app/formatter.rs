use crate::app::models::ClassificationResult;
use std::fmt::Write;


pub struct OutputGenerator;

impl OutputGenerator {
    pub fn generate_text(result: &ClassificationResult) -> Result<String, std::fmt::Error> {
        let mut output = String::new();

        writeln!(output, "🔍 Checking menu item image sources...\n")?;
        writeln!(output, "Total menu items: {}", result.total)?;

        writeln!(output, "📊 Image source breakdown:")?;
        writeln!(output, "   GridFS images: {}", result.gridfs_count)?;
        writeln!(output, "   Public folder images: {}", result.public_count)?;
        writeln!(output, "   No images: {}", result.none_count)?;
        if result.unclassified_count > 0 {
            writeln!(output, "   Unclassified images: {}", result.unclassified_count)?;
        }

        writeln!(output, "\n📁 Sample image sources:")?;
        for sample in &result.samples {
            writeln!(
                output,
                "   {}: {} ({})",
                sample.name, sample.image, sample.category
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{ImageSource, Sample};

    #[test]
    fn renders_counts_and_samples() {
        let result = ClassificationResult {
            total: 3,
            gridfs_count: 1,
            public_count: 1,
            none_count: 1,
            unclassified_count: 0,
            samples: vec![
                Sample {
                    name: "Tagine".into(),
                    image: "/api/images/abc123".into(),
                    category: ImageSource::GridFs,
                },
                Sample {
                    name: "Mint Tea".into(),
                    image: "/uploads/tea.jpg".into(),
                    category: ImageSource::Public,
                },
            ],
        };

        let output = OutputGenerator::generate_text(&result).unwrap();

        assert!(output.contains("Total menu items: 3\n"));
        assert!(output.contains("   GridFS images: 1\n"));
        assert!(output.contains("   Public folder images: 1\n"));
        assert!(output.contains("   No images: 1\n"));
        assert!(output.contains("   Tagine: /api/images/abc123 (GridFS)\n"));
        assert!(output.contains("   Mint Tea: /uploads/tea.jpg (Public)\n"));
        assert!(!output.contains("Unclassified"));
    }

    #[test]
    fn shows_unclassified_line_only_when_present() {
        let result = ClassificationResult {
            total: 2,
            none_count: 1,
            unclassified_count: 1,
            ..Default::default()
        };

        let output = OutputGenerator::generate_text(&result).unwrap();
        assert!(output.contains("   Unclassified images: 1\n"));
        assert!(output.ends_with("Sample image sources:\n"));
    }
}
