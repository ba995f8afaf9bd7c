pub mod clock;
pub mod frame;
pub mod glutils;
pub mod presenter;
pub mod shaders;
pub mod system;
