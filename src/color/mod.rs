mod utils;
mod wheel;

use smart_leds::RGB8;
pub use utils::{clear, fade_by, fill, rgb_from_u32, scaled, to_rgb565};
pub use wheel::{color_wheel, heat_color};

pub type Rgb = RGB8;
