//! File-level conversion: decode a photo, run the e-paper pipeline and
//! write the result as a 24-bit BMP.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use epaper_dither::{ConversionConfig, EpaperConverter, PixelBuffer};
use image::codecs::bmp::BmpEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader};

use crate::error::ConvertError;

/// Convert one image file into a panel-ready BMP.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConversionConfig,
) -> Result<(), ConvertError> {
    let image = load_image(input)?;
    tracing::debug!(
        input = %input.display(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );

    let converted = EpaperConverter::new(*config).convert(image)?;
    save_bmp(&converted, output)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        "Converted"
    );
    Ok(())
}

/// Decode any supported image file into an RGBA pixel buffer. The format is
/// detected from the file content, not the extension.
pub fn load_image(path: &Path) -> Result<PixelBuffer, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    let read_error = |source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(read_error)?
        .decode()
        .map_err(|source| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    let buffer = PixelBuffer::from_rgba_bytes(width as usize, height as usize, decoded.as_raw())?;
    Ok(buffer)
}

/// Write `image` as an uncompressed 24-bit BMP, creating parent directories
/// as needed. Alpha is dropped.
pub fn save_bmp(image: &PixelBuffer, path: &Path) -> Result<(), ConvertError> {
    let write_error = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    BmpEncoder::new(&mut writer)
        .write_image(
            &image.to_rgb_bytes(),
            image.width() as u32,
            image.height() as u32,
            ExtendedColorType::Rgb8,
        )
        .map_err(|source| ConvertError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}

/// Output path for single-file mode: `<output_dir>/<input stem>.bmp`.
///
/// Without an explicit directory the file lands next to its input.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".bmp");
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use epaper_dither::Rgba;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_path_next_to_input() {
        assert_eq!(
            output_path_for(Path::new("photos/beach.jpg"), None),
            PathBuf::from("photos/beach.bmp")
        );
    }

    #[test]
    fn test_output_path_in_output_dir() {
        assert_eq!(
            output_path_for(Path::new("photos/beach.jpg"), Some(Path::new("/sd"))),
            PathBuf::from("/sd/beach.bmp")
        );
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        assert_eq!(
            output_path_for(Path::new("img.2024.01.png"), None),
            PathBuf::from("img.2024.01.bmp")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let err = load_image(&missing).unwrap_err();
        assert!(matches!(err, ConvertError::NotFound(p) if p == missing));
    }

    #[test]
    fn test_load_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.jpg");
        fs::write(&path, b"definitely not an image").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }), "{err:?}");
        assert!(err.to_string().contains("fake.jpg"));
    }

    #[test]
    fn test_unreadable_input_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path()).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }), "{err:?}");
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_unwritable_output_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file, not a directory").unwrap();
        let path = blocker.join("out.bmp");
        let image = PixelBuffer::from_pixel(2, 2, Rgba::default()).unwrap();

        let err = save_bmp(&image, &path).unwrap_err();

        assert!(matches!(err, ConvertError::Write { .. }), "{err:?}");
        assert!(err.to_string().contains("out.bmp"));
    }

    #[test]
    fn test_save_bmp_creates_parent_and_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.bmp");
        let image = PixelBuffer::from_pixel(3, 2, Rgba::new(255, 0, 0, 10)).unwrap();

        save_bmp(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        let rgb = decoded.to_rgb8();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert!(rgb.pixels().all(|p| p.0 == [255, 0, 0]));
    }
}
