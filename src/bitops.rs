pub fn bit(byte: u8, i: usize) -> bool { // ← bit i, 0 = LSB
    (byte >> i) & 0x1 == 1
}

pub fn bits8(byte: u8) -> [bool; 8] { // little-endian (0-7), index = ladder line
    [bit(byte, 0), bit(byte, 1), bit(byte, 2), bit(byte, 3), bit(byte, 4), bit(byte, 5), bit(byte, 6), bit(byte, 7)]
}

pub fn comp8(bits: [bool; 8]) -> u8 { // ← inverse of bits8
    bits.iter().enumerate().fold(0u8, |acc, (i, &b)| acc | ((b as u8) << i))
}
