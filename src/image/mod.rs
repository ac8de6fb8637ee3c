pub mod io;
pub mod plane;
pub mod traits;
pub mod u16;
pub mod u8;

pub use self::plane::Plane;
pub use self::traits::{ImageView, Rows};
pub use self::u16::ImageU16;
pub use self::u8::ImageU8;
