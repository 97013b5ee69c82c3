pub mod icon_file;
pub mod icon_size;
pub mod resized_image_set;
pub mod source_image;

// --- public re-exports ---
pub use icon_file::{IconFile, IconFileError};
pub use icon_size::{IconSize, IconSizeError, TARGET_SIZES};
pub use resized_image_set::{ResampleError, ResizedImage, ResizedImageSet};
pub use source_image::{SourceImage, SourceImageError};
