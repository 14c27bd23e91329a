//! Command-line calling context for the crop tool and catalog client.
//!
//! `list` prints the recorded sightings newest-first; `add` runs the full
//! submission flow: decode the photo, position the fixed-aspect crop,
//! commit it, validate the form, and post the sighting. The crop is
//! adjusted by driving the session state machine the same way a pointer
//! would.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use bodegacats_catalog::{CatalogService, HttpCatalog, SightingForm};
use bodegacats_core::constants::CARD_ASPECT_RATIO;
use bodegacats_cropper::{CropTool, Handle, SourceImage};

#[derive(Parser)]
#[command(name = "bodegacats", version, about = "Bodega cat sighting tracker")]
pub struct Cli {
    /// Origin of the cat-catalog service.
    #[arg(long, default_value = "http://127.0.0.1:5050", global = true)]
    pub catalog: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List recorded sightings, newest first.
    List,
    /// Check that the catalog service is up.
    Health,
    /// Submit a new sighting.
    Add {
        /// Photo of the cat (JPEG/PNG/GIF).
        image: PathBuf,
        /// The cat's name, if known.
        #[arg(long)]
        name: Option<String>,
        /// Name of the bodega or store.
        #[arg(long)]
        bodega: Option<String>,
        /// Free-text description of the sighting.
        #[arg(long)]
        description: Option<String>,
        /// Sighting latitude in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        latitude: String,
        /// Sighting longitude in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        longitude: String,
        /// Desired crop width in image pixels (resized from the
        /// bottom-right handle; height follows the card ratio).
        #[arg(long)]
        crop_width: Option<f64>,
        /// Recenter the crop on `X,Y` (image pixels) before committing.
        #[arg(long, value_parser = parse_point)]
        crop_center: Option<(f64, f64)>,
    },
}

fn parse_point(text: &str) -> Result<(f64, f64), String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{text}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = HttpCatalog::new(&cli.catalog);
    match cli.command {
        Command::List => list(&catalog).await,
        Command::Health => {
            catalog.health().await?;
            println!("catalog at {} is healthy", catalog.base());
            Ok(())
        }
        Command::Add {
            image,
            name,
            bodega,
            description,
            latitude,
            longitude,
            crop_width,
            crop_center,
        } => {
            add(
                &catalog,
                &image,
                name,
                bodega,
                description,
                latitude,
                longitude,
                crop_width,
                crop_center,
            )
            .await
        }
    }
}

async fn list(catalog: &HttpCatalog) -> anyhow::Result<()> {
    let cats = catalog.list_cats().await?;
    if cats.is_empty() {
        println!("No cats sighted yet.");
        return Ok(());
    }
    for cat in &cats {
        let bodega = cat.bodega_name.as_deref().unwrap_or("unknown bodega");
        println!(
            "#{:<4} {:<20} {:<24} ({:.4}, {:.4})  {}  {}",
            cat.id,
            cat.display_name(),
            bodega,
            cat.latitude,
            cat.longitude,
            cat.created_at.format("%Y-%m-%d %H:%M"),
            catalog.image_url(&cat.image_url),
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn add(
    catalog: &HttpCatalog,
    image: &PathBuf,
    name: Option<String>,
    bodega: Option<String>,
    description: Option<String>,
    latitude: String,
    longitude: String,
    crop_width: Option<f64>,
    crop_center: Option<(f64, f64)>,
) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(image)
        .await
        .with_context(|| format!("reading {}", image.display()))?;

    // The CLI displays nothing, so the crop works at the photo's natural
    // scale: display coordinates are image pixels.
    let source = match image::load_from_memory(&bytes) {
        Ok(img) => {
            let mut source =
                SourceImage::new(f64::from(img.width()), f64::from(img.height()));
            source.complete_load(img);
            source
        }
        Err(err) => bail!("cannot decode {}: {err}", image.display()),
    };

    let mut tool = CropTool::new(source, CARD_ASPECT_RATIO);

    if let Some(width) = crop_width {
        let rect = tool.session().rect();
        tool.session_mut().begin_resize(Handle::Se);
        tool.pointer_move(rect.left + width, rect.top);
        tool.pointer_up();
    }
    if let Some((x, y)) = crop_center {
        tool.session_mut().begin_drag();
        tool.pointer_move(x, y);
        tool.pointer_up();
    }

    let rect = tool.session().rect();
    info!(
        left = rect.left,
        top = rect.top,
        width = rect.width,
        height = rect.height,
        "committing crop"
    );
    let photo = tool.commit()?;

    let mut form = SightingForm {
        name: name.unwrap_or_default(),
        bodega_name: bodega.unwrap_or_default(),
        description: description.unwrap_or_default(),
        latitude,
        longitude,
        photo: None,
    };
    form.set_photo(photo);

    let sighting = form.validate()?;
    let cat = catalog.add_cat(sighting).await?;
    form.reset();

    println!(
        "Recorded sighting #{} ({}) at ({:.4}, {:.4})",
        cat.id,
        cat.display_name(),
        cat.latitude,
        cat.longitude
    );
    println!("Photo: {}", catalog.image_url(&cat.image_url));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_parser_accepts_spaces() {
        assert_eq!(parse_point("120, 80.5"), Ok((120.0, 80.5)));
        assert!(parse_point("120").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn cli_parses_add_command() {
        let cli = Cli::try_parse_from([
            "bodegacats",
            "add",
            "cat.jpg",
            "--latitude",
            "40.71",
            "--longitude",
            "-74.00",
            "--crop-center",
            "200,150",
        ])
        .unwrap();
        match cli.command {
            Command::Add {
                crop_center,
                latitude,
                ..
            } => {
                assert_eq!(crop_center, Some((200.0, 150.0)));
                assert_eq!(latitude, "40.71");
            }
            _ => panic!("expected add"),
        }
    }
}
