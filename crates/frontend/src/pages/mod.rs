pub mod dog_guide;
