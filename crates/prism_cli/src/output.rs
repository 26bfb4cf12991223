//! Image output.
//!
//! Writes a rendered `ImageBuffer` as 8-bit display colors, either as a
//! plain-text PPM or through the `image` crate's encoders.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use prism_math::to_display_color;
use prism_renderer::ImageBuffer;

/// Save the image, choosing the format from the file extension.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        save_ppm(image, path)
    } else {
        save_encoded(image, path)
    }?;

    info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

/// Encode with the `image` crate (PNG unless the extension says otherwise).
fn save_encoded(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", image.width, image.height))?;

    debug!("Encoding {} with the image crate", path.display());
    rgb.save(path)
        .with_context(|| format!("Failed to encode {}", path.display()))
}

/// Write an ASCII PPM (P3) file.
fn save_ppm(image: &ImageBuffer, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = to_display_color(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
