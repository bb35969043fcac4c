// Application state module
// Holds the current image and notifies the display layer when it changes

use crate::error::ControllerError;
use crate::image_loader::{self, SourceRef};
use crate::picker::FileSelection;
use crate::rotation::Rotation;
use image::DynamicImage;
use log::{debug, error, info};
use std::fmt;
use std::path::{Path, PathBuf};

/// Display name given to the blank canvas
pub const DEFAULT_FILE_NAME: &str = "Untitled";

/// Where `save` writes, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "Untitled.png";

/// Observable properties of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Image,
    FileName,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Image => f.write_str("Image"),
            Property::FileName => f.write_str("FileName"),
        }
    }
}

type Observer = Box<dyn FnMut(Property)>;

/// Image state controller.
///
/// Single owner, driven directly by the input bindings. A failed operation
/// never changes any field.
pub struct ImageController {
    /// Currently displayed image (source with `rotation` applied)
    image: Option<DynamicImage>,
    /// Origin the displayed image is derived from
    source: Option<SourceRef>,
    /// Name shown to the user
    file_name: Option<String>,
    rotation: Rotation,
    output_path: PathBuf,
    observers: Vec<Observer>,
}

impl ImageController {
    /// Create an empty controller that saves to `output_path`
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            image: None,
            source: None,
            file_name: None,
            rotation: Rotation::default(),
            output_path: output_path.into(),
            observers: Vec::new(),
        }
    }

    /// Register a callback run after each change, once per changed property
    pub fn subscribe(&mut self, observer: impl FnMut(Property) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    pub fn source(&self) -> Option<&SourceRef> {
        self.source.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Replace the current image with the blank canvas
    pub fn create_blank(&mut self) {
        self.image = Some(image_loader::blank_canvas());
        self.source = Some(SourceRef::Placeholder);
        self.file_name = Some(DEFAULT_FILE_NAME.to_string());
        self.rotation = Rotation::default();
        info!(
            "Created blank {}x{} canvas",
            image_loader::BLANK_WIDTH,
            image_loader::BLANK_HEIGHT
        );

        self.notify(Property::Image);
        self.notify(Property::FileName);
    }

    /// Open the image the user picked. A cancelled selection does nothing.
    pub fn open_from_disk(&mut self, selection: FileSelection) -> Result<(), ControllerError> {
        let path = match selection {
            FileSelection::Cancelled => {
                debug!("Open cancelled");
                return Ok(());
            }
            FileSelection::Path(path) => path,
        };

        let source = SourceRef::File(path.clone());
        let img = image_loader::load_source(&source).map_err(|e| {
            error!("Failed to import {}: {}", path.display(), e);
            ControllerError::Import {
                path: path.clone(),
                source: e,
            }
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        info!("Opened {} ({}x{})", path.display(), img.width(), img.height());
        self.image = Some(img);
        self.source = Some(source);
        self.file_name = Some(file_name);
        self.rotation = Rotation::default();

        self.notify(Property::Image);
        self.notify(Property::FileName);
        Ok(())
    }

    /// Turn the image a further 90° clockwise.
    ///
    /// The source is decoded again and the new total angle applied to it.
    /// Without a loaded image this does nothing.
    pub fn rotate(&mut self) -> Result<(), ControllerError> {
        let source = match (&self.image, &self.source) {
            (Some(_), Some(source)) => source,
            _ => {
                debug!("Rotate ignored: no image loaded");
                return Ok(());
            }
        };

        let next = self.rotation.next();
        let img = image_loader::load_source(source).map_err(|e| {
            error!("Failed to re-read {} for rotation: {}", source, e);
            ControllerError::Import {
                path: source.path(),
                source: e,
            }
        })?;

        self.image = Some(next.apply(img));
        self.rotation = next;
        info!("Rotated to {}°", next.degrees());

        self.notify(Property::Image);
        Ok(())
    }

    /// Drop the current image
    pub fn close(&mut self) {
        self.image = None;
        self.rotation = Rotation::default();
        info!("Image closed");

        self.notify(Property::Image);
    }

    /// Write the displayed image as PNG to the output path, overwriting it
    pub fn save_to_disk(&self) -> Result<(), ControllerError> {
        let img = self.image.as_ref().ok_or_else(|| {
            error!("Save requested with no image loaded");
            ControllerError::NoImageLoaded
        })?;

        image_loader::save_png(img, &self.output_path).map_err(|e| {
            error!("Failed to save {}: {}", self.output_path.display(), e);
            ControllerError::Write {
                path: self.output_path.clone(),
                source: e,
            }
        })?;

        info!("Saved {}", self.output_path.display());
        Ok(())
    }

    fn notify(&mut self, property: Property) {
        for observer in &mut self.observers {
            observer(property);
        }
    }
}

impl Default for ImageController {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}
