use palette::Srgb;

/// Wedge fills, in palette order. Wedge `i` of the chart uses entry `9 - i`.
pub const SEGMENT_PALETTE: [Srgb<u8>; 10] = [
    Srgb::new(0xcd, 0x5e, 0x80),
    Srgb::new(0xe0, 0x5d, 0x65),
    Srgb::new(0xee, 0x3a, 0x64),
    Srgb::new(0x35, 0x85, 0xea),
    Srgb::new(0x30, 0x99, 0xe8),
    Srgb::new(0x37, 0xb6, 0xff),
    Srgb::new(0x24, 0xcc, 0xe3),
    Srgb::new(0x87, 0x25, 0xd0),
    Srgb::new(0xa9, 0x39, 0xa9),
    Srgb::new(0xc1, 0x48, 0x8c),
];

/// Readout colors indexed by `score - 1`.
pub const SCORE_COLORS: [Srgb<u8>; 10] = [
    Srgb::new(0xee, 0x3a, 0x64), // 1
    Srgb::new(0xe0, 0x5d, 0x65),
    Srgb::new(0xcd, 0x5e, 0x80),
    Srgb::new(0x87, 0x25, 0xd0),
    Srgb::new(0xa9, 0x39, 0xa9),
    Srgb::new(0xc1, 0x48, 0x8c),
    Srgb::new(0x24, 0xcc, 0xe3),
    Srgb::new(0x37, 0xb6, 0xff),
    Srgb::new(0x30, 0x99, 0xe8),
    Srgb::new(0x35, 0x85, 0xea), // 10
];

pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
