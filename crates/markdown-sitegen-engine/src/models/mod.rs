pub mod content_file;

pub use content_file::ContentFile;
