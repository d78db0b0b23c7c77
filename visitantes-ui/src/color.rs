use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
);
pub const GREY_6: Color = Color::from_rgb(
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const WHITE: Color = iced::Color::WHITE;
pub const BLUE: Color = Color::from_rgb(
    0x1D as f32 / 255.0,
    0x6F as f32 / 255.0,
    0xE0 as f32 / 255.0,
);
pub const LIGHT_BLUE: Color = Color::from_rgb(
    0x4C as f32 / 255.0,
    0x8E as f32 / 255.0,
    0xEA as f32 / 255.0,
);
pub const TRANSPARENT_BLUE: Color = Color::from_rgba(
    0x1D as f32 / 255.0,
    0x6F as f32 / 255.0,
    0xE0 as f32 / 255.0,
    0.3,
);
pub const GREEN: Color = Color::from_rgb(
    0x2E as f32 / 255.0,
    0xA0 as f32 / 255.0,
    0x43 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);
