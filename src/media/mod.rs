//! Media handling module.

pub mod encode;

pub use encode::encode_image_as_data_url;
