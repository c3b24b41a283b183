pub mod binary;
pub mod data;

/// Address-like leaf values.
pub const TEST_DATA: [&[u8]; 10] = [
    "0x123456789012345678901234567890123456789".as_bytes(),
    "0x123456789012345678901234567890123456781".as_bytes(),
    "0x123456789012345678901234567890123456792".as_bytes(),
    "0x1234567890123456789012345678901234567893".as_bytes(),
    "0x123456789012345678901234567890123456894".as_bytes(),
    "0x9f2c41d0a7b35e6c8814f0e2d3b76a5c91e0f4a2".as_bytes(),
    "0x04b8e1f7c2a9d63e5f10b7c4a8e2d9f6c3b1a0e7".as_bytes(),
    "0x7d3a5c9e1b0f8a2d6c4e3b7f9a1c5e8d2b6f0a43".as_bytes(),
    "0xc0ffee254729296a45a3885639ac7e10f9d54979".as_bytes(),
    "0x3e5e9111ae8eb78fe1cc3bb8915d5d461f3ef9a9".as_bytes(),
];
