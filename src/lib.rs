//! crcforge - Append content to a buffer without changing its CRC32

pub mod checksum;
pub mod cli;
pub mod forge;
pub mod observability;
