pub mod address;
pub mod demo;
pub mod keygen;
pub mod recover;
pub mod sign;
pub mod verify;
pub mod vk;
