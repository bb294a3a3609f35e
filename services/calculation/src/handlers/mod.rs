pub mod calculation;
pub mod info;
